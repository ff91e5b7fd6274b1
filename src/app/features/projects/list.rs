use axum::{extract::State, routing::get, Json, Router};

use super::types::{ProjectResponse, PROJECT_SORTING};
use crate::app::{
    caller::Caller,
    db,
    domain::{Page, PageParams},
    error::AppError,
    extract::AppQuery,
    AppState,
};

/// GET /project: Page through the projects the caller belongs to.
pub async fn list_projects(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<ProjectResponse>>, AppError> {
    let page = params.resolve(&PROJECT_SORTING)?;

    let projects = db::projects::find_page_for_member(&state.db, caller.username(), &page).await?;
    let total = db::projects::count_for_member(&state.db, caller.username()).await?;

    let content = projects
        .into_iter()
        .map(|p| ProjectResponse::from_row(p, &state.config))
        .collect();

    Ok(Json(Page::new(content, &page, total, &state.config, "/project")))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/project", get(list_projects))
}
