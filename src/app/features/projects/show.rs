use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::{helpers::load_project, types::ProjectResponse};
use crate::app::{error::AppError, AppState};

/// GET /project/:id: Show one project.
pub async fn show_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = load_project(&state.db, &project_id).await?;
    Ok(Json(ProjectResponse::from_row(project, &state.config)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/project/:id", get(show_project))
}
