//! Membership of a project: list, add, remove.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::{
    helpers::{load_project, require_project_member},
    types::{MemberResponse, ProjectMemberPathParams},
};
use crate::app::{caller::Caller, db, error::AppError, extract::ValidJson, AppState};

/// Request body for adding a member to a project.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProjectMemberRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::username::validate_username"))]
    pub username: String,
}

/// GET /project/:id/members: List project members.
pub async fn list_project_members(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<MemberResponse>>, AppError> {
    let project = load_project(&state.db, &project_id).await?;
    let members = db::project_members::list(&state.db, &project.id)
        .await?
        .into_iter()
        .map(|m| MemberResponse::from_row(m, &project.id, &state.config))
        .collect();
    Ok(Json(members))
}

/// POST /project/:id/members: Add a member directly (caller must belong to the project).
pub async fn add_project_member(
    caller: Caller,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ValidJson(request): ValidJson<AddProjectMemberRequest>,
) -> Result<(StatusCode, Json<Vec<MemberResponse>>), AppError> {
    let project = load_project(&state.db, &project_id).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    let username = request.username.trim();
    if db::project_members::is_member(&state.db, &project.id, username).await? {
        return Err(AppError::already_project_member(username, &project.id));
    }

    let now = state.clock.unix_now();
    let mut tx = state.db.begin().await?;
    db::members::ensure(&mut *tx, username, now).await?;
    db::project_members::add(&mut *tx, &project.id, username, now).await?;
    tx.commit().await?;

    tracing::info!(project_id = %project.id, %username, by = %caller.username(), "member added to project");

    let members = db::project_members::list(&state.db, &project.id)
        .await?
        .into_iter()
        .map(|m| MemberResponse::from_row(m, &project.id, &state.config))
        .collect();
    Ok((StatusCode::CREATED, Json(members)))
}

/// DELETE /project/:id/members/:username: Remove a member and unassign them from the project's tasks.
pub async fn remove_project_member(
    caller: Caller,
    State(state): State<AppState>,
    Path(params): Path<ProjectMemberPathParams>,
) -> Result<StatusCode, AppError> {
    let project = load_project(&state.db, &params.id).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    if !db::project_members::is_member(&state.db, &project.id, &params.username).await? {
        return Err(AppError::not_project_member(&params.username, &project.id));
    }
    if params.username == project.author_username {
        return Err(AppError::bad_request("PROJECT_AUTHOR_CANNOT_BE_REMOVED"));
    }

    let mut tx = state.db.begin().await?;
    db::task_members::remove_from_project(&mut *tx, &project.id, &params.username).await?;
    db::project_members::remove(&mut *tx, &project.id, &params.username).await?;
    tx.commit().await?;

    tracing::info!(project_id = %project.id, username = %params.username, by = %caller.username(), "member removed from project");

    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/project/:id/members", get(list_project_members).post(add_project_member))
        .route("/project/:id/members/:username", delete(remove_project_member))
}
