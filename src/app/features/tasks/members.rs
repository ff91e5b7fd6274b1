//! Assignment of project members to tasks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::{
    helpers::{load_project_task, load_task},
    types::ProjectTaskPathParams,
};
use crate::app::{
    caller::Caller,
    db,
    error::AppError,
    extract::ValidJson,
    features::projects::{
        helpers::{load_project, require_project_member},
        types::MemberResponse,
    },
    AppState,
};

/// Request body for assigning a project member to a task.
#[derive(Debug, Deserialize, Validate)]
pub struct AssignTaskMemberRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::username::validate_username"))]
    pub username: String,
}

async fn assign(state: &AppState, task: &db::Task, username: &str) -> Result<Vec<MemberResponse>, AppError> {
    if !db::project_members::is_member(&state.db, &task.project_id, username).await? {
        return Err(AppError::not_project_member(username, &task.project_id));
    }
    if db::task_members::is_assigned(&state.db, &task.id, username).await? {
        return Err(AppError::already_task_member(username, &task.id));
    }

    db::task_members::insert(&state.db, &task.id, username, state.clock.unix_now()).await?;

    tracing::info!(task_id = %task.id, %username, "member assigned to task");

    members_of(state, task).await
}

async fn members_of(state: &AppState, task: &db::Task) -> Result<Vec<MemberResponse>, AppError> {
    Ok(db::task_members::list(&state.db, &task.id)
        .await?
        .into_iter()
        .map(|m| MemberResponse::from_row(m, &task.project_id, &state.config))
        .collect())
}

/// GET /task/:id/members: Members assigned to a task.
pub async fn list_task_members(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Vec<MemberResponse>>, AppError> {
    let task = load_task(&state.db, &task_id).await?;
    Ok(Json(members_of(&state, &task).await?))
}

/// POST /project/:id/task/:task_id/members: Assign a project member to a task of that project.
pub async fn add_task_member(
    caller: Caller,
    State(state): State<AppState>,
    Path(params): Path<ProjectTaskPathParams>,
    ValidJson(request): ValidJson<AssignTaskMemberRequest>,
) -> Result<(StatusCode, Json<Vec<MemberResponse>>), AppError> {
    let project = load_project(&state.db, &params.id).await?;
    let task = load_project_task(&state.db, &project.id, &params.task_id).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    let members = assign(&state, &task, request.username.trim()).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

/// POST /task/:id/members/assign: Assign the caller to a task.
pub async fn assign_self(
    caller: Caller,
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<(StatusCode, Json<Vec<MemberResponse>>), AppError> {
    let task = load_task(&state.db, &task_id).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    let members = assign(&state, &task, caller.username()).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/task/:id/members", get(list_task_members))
        .route("/project/:id/task/:task_id/members", post(add_task_member))
        .route("/task/:id/members/assign", post(assign_self))
}
