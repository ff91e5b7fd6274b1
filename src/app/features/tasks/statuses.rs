//! Status intervals of a task. Recording a status closes the ongoing interval.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use super::{helpers::load_task, types::StatusIntervalResponse};
use crate::app::{
    caller::Caller,
    db,
    domain::TaskStatusLabel,
    error::AppError,
    extract::ValidJson,
    features::projects::helpers::require_project_member,
    AppState,
};

/// Request body for recording a task status.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordStatusRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::validation_helpers::not_blank"))]
    pub task_id: String,
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::task_status_label::validate_task_status_label"))]
    pub label: String,
}

/// Close the ongoing interval and open a new one at `now`, atomically.
pub async fn record_status(
    pool: &sqlx::SqlitePool,
    task_id: &str,
    label: TaskStatusLabel,
    set_by: &str,
    now: i64,
) -> Result<db::StatusInterval, AppError> {
    let mut tx = pool.begin().await?;

    if let Some(ongoing) = db::status_intervals::find_ongoing(&mut *tx, task_id).await? {
        if ongoing.label == label {
            return Err(AppError::BadRequest(format!(
                "TASK_WITH_ID_{task_id}_ALREADY_HAS_STATUS_{label}"
            )));
        }
    }

    let interval = db::status_intervals::NewStatusInterval {
        id: Ulid::new().to_string(),
        task_id: task_id.to_string(),
        label,
        set_by: set_by.to_string(),
    };
    db::members::ensure(&mut *tx, set_by, now).await?;
    db::status_intervals::close_ongoing(&mut *tx, task_id, now).await?;
    db::status_intervals::insert(&mut *tx, &interval, now).await?;
    let recorded = db::status_intervals::find_by_id(&mut *tx, &interval.id)
        .await?
        .ok_or(AppError::Internal)?;

    tx.commit().await?;
    Ok(recorded)
}

/// POST /task/status: Record a new status for a task.
pub async fn create_status(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RecordStatusRequest>,
) -> Result<(StatusCode, Json<StatusIntervalResponse>), AppError> {
    let task = load_task(&state.db, request.task_id.trim()).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    let label = TaskStatusLabel::from_str(&request.label).map_err(|_| AppError::Internal)?;
    let recorded = record_status(&state.db, &task.id, label, caller.username(), state.clock.unix_now()).await?;

    tracing::info!(task_id = %task.id, %label, by = %caller.username(), "task status recorded");

    Ok((StatusCode::CREATED, Json(StatusIntervalResponse::from_row(recorded, &state.config))))
}

/// GET /task/:id/statuses: Every status interval of a task, oldest first.
pub async fn list_statuses(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Vec<StatusIntervalResponse>>, AppError> {
    let task = load_task(&state.db, &task_id).await?;
    let intervals = db::status_intervals::find_by_task(&state.db, &task.id)
        .await?
        .into_iter()
        .map(|i| StatusIntervalResponse::from_row(i, &state.config))
        .collect();
    Ok(Json(intervals))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/task/status", post(create_status))
        .route("/task/:id/statuses", get(list_statuses))
}
