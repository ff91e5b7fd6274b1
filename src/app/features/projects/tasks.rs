use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::helpers::load_project;
use crate::app::{
    db,
    domain::{Page, PageParams},
    error::AppError,
    extract::AppQuery,
    features::tasks::types::{TaskResponse, TASK_SORTING},
    AppState,
};

/// GET /project/:id/tasks: Page through a project's tasks.
pub async fn list_project_tasks(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<TaskResponse>>, AppError> {
    let page = params.resolve(&TASK_SORTING)?;
    let project = load_project(&state.db, &project_id).await?;

    let tasks = db::tasks::find_page_by_project(&state.db, &project.id, &page).await?;
    let total = db::tasks::count_by_project(&state.db, &project.id).await?;

    let content = tasks
        .into_iter()
        .map(|t| TaskResponse::from_row(t, &state.config))
        .collect();
    let path = format!("/project/{}/tasks", project.id);

    Ok(Json(Page::new(content, &page, total, &state.config, &path)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/project/:id/tasks", get(list_project_tasks))
}
