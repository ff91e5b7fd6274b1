use std::str::FromStr;

use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::{helpers::load_task, types::TaskResponse};
use crate::app::{
    caller::Caller,
    db,
    domain::{TaskPriority, TaskType},
    error::AppError,
    extract::ValidJson,
    features::projects::helpers::require_project_member,
    AppState,
};

/// Request body for replacing a task (PUT).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTaskRequest {
    #[serde(default)]
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        length(max = 255, code = "TOO_LONG")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        length(max = 4000, code = "TOO_LONG")
    )]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::task_priority::validate_task_priority"))]
    pub priority: String,
    #[serde(default, rename = "type")]
    #[validate(custom(function = "crate::app::domain::task_type::validate_task_type"))]
    pub task_type: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 31_536_000, code = "ESTIMATED_TIME_OUT_OF_RANGE"))]
    pub estimated_time: i64,
}

/// Request body for updating a task (PATCH). Omitted fields stay unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchTaskRequest {
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        length(max = 255, code = "TOO_LONG")
    )]
    pub title: Option<String>,
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        length(max = 4000, code = "TOO_LONG")
    )]
    pub description: Option<String>,
    #[validate(custom(function = "crate::app::domain::task_priority::validate_task_priority"))]
    pub priority: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "crate::app::domain::task_type::validate_task_type"))]
    pub task_type: Option<String>,
    #[validate(range(min = 0, max = 31_536_000, code = "ESTIMATED_TIME_OUT_OF_RANGE"))]
    pub estimated_time: Option<i64>,
}

async fn apply_changes(
    state: &AppState,
    task_id: &str,
    changes: db::tasks::TaskChanges<'_>,
) -> Result<TaskResponse, AppError> {
    db::tasks::update(&state.db, task_id, &changes, state.clock.unix_now()).await?;

    tracing::info!(%task_id, "task updated");

    let task = load_task(&state.db, task_id).await?;
    Ok(TaskResponse::from_row(task, &state.config))
}

/// PUT /task/:id: Replace every editable field of a task.
pub async fn replace_task(
    caller: Caller,
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    ValidJson(request): ValidJson<ReplaceTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = load_task(&state.db, &task_id).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    let changes = db::tasks::TaskChanges {
        title: request.title.trim(),
        description: request.description.trim(),
        priority: TaskPriority::from_str(&request.priority).map_err(|_| AppError::Internal)?,
        task_type: TaskType::from_str(&request.task_type).map_err(|_| AppError::Internal)?,
        estimated_seconds: request.estimated_time,
    };

    Ok(Json(apply_changes(&state, &task.id, changes).await?))
}

/// PATCH /task/:id: Update any subset of the editable fields.
pub async fn patch_task(
    caller: Caller,
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    ValidJson(request): ValidJson<PatchTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = load_task(&state.db, &task_id).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    let priority = match request.priority.as_deref() {
        Some(p) => TaskPriority::from_str(p).map_err(|_| AppError::Internal)?,
        None => task.priority,
    };
    let task_type = match request.task_type.as_deref() {
        Some(t) => TaskType::from_str(t).map_err(|_| AppError::Internal)?,
        None => task.task_type,
    };
    let changes = db::tasks::TaskChanges {
        title: request.title.as_deref().map(str::trim).unwrap_or(&task.title),
        description: request
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or(&task.description),
        priority,
        task_type,
        estimated_seconds: request.estimated_time.unwrap_or(task.estimated_seconds),
    };

    Ok(Json(apply_changes(&state, &task.id, changes).await?))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/task/:id", put(replace_task).patch(patch_task))
}
