use std::str::FromStr;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use super::types::TaskResponse;
use crate::app::{
    caller::Caller,
    db,
    domain::{TaskPriority, TaskStatusLabel, TaskType},
    error::AppError,
    extract::ValidJson,
    features::projects::helpers::{load_project, require_project_member},
    AppState,
};

/// Request body for creating a task.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::validation_helpers::not_blank"))]
    pub project_id: String,
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
    /// Seconds.
    #[serde(default)]
    #[validate(range(min = 0, max = 31_536_000, code = "ESTIMATED_TIME_OUT_OF_RANGE"))]
    pub estimated_time: i64,
}

/// POST /task: Create a task in a project the caller belongs to. Starts in TODO.
pub async fn create_task(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let project = load_project(&state.db, request.project_id.trim()).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    let priority = TaskPriority::from_str(&request.priority).map_err(|_| AppError::Internal)?;
    let task_type = TaskType::from_str(&request.task_type).map_err(|_| AppError::Internal)?;

    let now = state.clock.unix_now();
    let task_id = Ulid::new().to_string();
    let new_task = db::tasks::NewTask {
        id: task_id.clone(),
        project_id: project.id.clone(),
        author_username: caller.username().to_string(),
        title: request.title.trim().to_string(),
        description: request.description.trim().to_string(),
        priority,
        task_type,
        estimated_seconds: request.estimated_time,
    };
    let initial_status = db::status_intervals::NewStatusInterval {
        id: Ulid::new().to_string(),
        task_id: task_id.clone(),
        label: TaskStatusLabel::Todo,
        set_by: caller.username().to_string(),
    };

    let mut tx = state.db.begin().await?;
    db::members::ensure(&mut *tx, caller.username(), now).await?;
    db::tasks::insert(&mut *tx, &new_task, now).await?;
    db::status_intervals::insert(&mut *tx, &initial_status, now).await?;
    tx.commit().await?;

    tracing::info!(%task_id, project_id = %project.id, author = %caller.username(), "task created");

    let task = db::tasks::find_by_id(&state.db, &task_id)
        .await?
        .ok_or(AppError::Internal)?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from_row(task, &state.config))))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/task", post(create_task))
}
