use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::{helpers::load_task, types::TaskResponse};
use crate::app::{error::AppError, AppState};

/// GET /task/:id: Show one task.
pub async fn show_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = load_task(&state.db, &task_id).await?;
    Ok(Json(TaskResponse::from_row(task, &state.config)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/task/:id", get(show_task))
}
