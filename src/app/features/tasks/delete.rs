use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::delete,
    Router,
};

use super::helpers::load_task;
use crate::app::{
    caller::Caller, db, error::AppError, features::projects::helpers::require_project_member, AppState,
};

/// DELETE /task/:id: Delete a task with its statuses, comments and assignments.
pub async fn delete_task(
    caller: Caller,
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let task = load_task(&state.db, &task_id).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    db::tasks::delete(&state.db, &task.id).await?;

    tracing::info!(task_id = %task.id, by = %caller.username(), "task deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/task/:id", delete(delete_task))
}
