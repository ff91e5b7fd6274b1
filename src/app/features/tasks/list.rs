use axum::{extract::State, routing::get, Json, Router};

use super::types::{TaskResponse, TASK_SORTING};
use crate::app::{
    caller::Caller,
    db,
    domain::{Page, PageParams},
    error::AppError,
    extract::AppQuery,
    AppState,
};

/// GET /task: Page through the tasks of every project the caller belongs to.
pub async fn list_tasks(
    caller: Caller,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<TaskResponse>>, AppError> {
    let page = params.resolve(&TASK_SORTING)?;

    let tasks = db::tasks::find_page_for_member(&state.db, caller.username(), &page).await?;
    let total = db::tasks::count_for_member(&state.db, caller.username()).await?;

    let content = tasks
        .into_iter()
        .map(|t| TaskResponse::from_row(t, &state.config))
        .collect();

    Ok(Json(Page::new(content, &page, total, &state.config, "/task")))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/task", get(list_tasks))
}
