use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::delete,
    Router,
};

use super::helpers::load_project;
use crate::app::{caller::Caller, db, error::AppError, AppState};

/// DELETE /project/:id: Delete a project with its tasks. Author or admin only.
pub async fn delete_project(
    caller: Caller,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let project = load_project(&state.db, &project_id).await?;

    if project.author_username != caller.username() && !caller.role.is_admin() {
        return Err(AppError::Forbidden(
            "ONLY_PROJECT_AUTHOR_OR_ADMIN_CAN_DELETE_PROJECT".to_string(),
        ));
    }

    db::projects::delete(&state.db, &project.id).await?;

    tracing::info!(project_id = %project.id, by = %caller.username(), "project deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/project/:id", delete(delete_project))
}
