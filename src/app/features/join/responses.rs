//! Answers to join requests. Accepting adds the invitee to the project.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::types::JoinRequestResponse;
use crate::app::{
    caller::Caller,
    db,
    domain::JoinResponseStatus,
    error::{AppError, JOIN_REQUEST_ALREADY_RESPONDED, JOIN_REQUEST_NOT_FOUND},
    extract::ValidJson,
    features::projects::helpers::load_project,
    AppState,
};

/// Request body for answering a join request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::validation_helpers::not_blank"))]
    pub join_request_id: String,
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::join_response_status::validate_join_response_status"))]
    pub status: String,
}

/// POST /join/response: The invitee accepts or declines.
pub async fn respond(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RespondRequest>,
) -> Result<(StatusCode, Json<JoinRequestResponse>), AppError> {
    let status = JoinResponseStatus::from_str(&request.status).map_err(|_| AppError::Internal)?;
    let now = state.clock.unix_now();

    let mut tx = state.db.begin().await?;
    let join_request = db::join_requests::find_by_id(&mut *tx, request.join_request_id.trim())
        .await?
        .ok_or_else(|| AppError::not_found(JOIN_REQUEST_NOT_FOUND))?;

    if join_request.username != caller.username() {
        return Err(AppError::Forbidden(format!(
            "ONLY_MEMBER_WITH_USERNAME_{}_CAN_RESPOND_TO_JOIN_REQUEST_WITH_ID_{}",
            join_request.username, join_request.id
        )));
    }
    if join_request.response.is_some() {
        return Err(AppError::bad_request(JOIN_REQUEST_ALREADY_RESPONDED));
    }

    db::join_requests::respond(&mut *tx, &join_request.id, status, now).await?;
    if status == JoinResponseStatus::Accepted {
        db::project_members::add(&mut *tx, &join_request.project_id, &join_request.username, now).await?;
    }
    let answered = db::join_requests::find_by_id(&mut *tx, &join_request.id)
        .await?
        .ok_or(AppError::Internal)?;
    tx.commit().await?;

    tracing::info!(
        join_request_id = %answered.id,
        project_id = %answered.project_id,
        %status,
        "join request answered"
    );

    Ok((StatusCode::CREATED, Json(JoinRequestResponse::from_row(answered, &state.config))))
}

/// GET /join/response/:id: One answered request.
pub async fn show_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JoinRequestResponse>, AppError> {
    let join_request = db::join_requests::find_by_id(&state.db, &id)
        .await?
        .filter(|r| r.response.is_some())
        .ok_or_else(|| AppError::not_found(JOIN_REQUEST_NOT_FOUND))?;
    Ok(Json(JoinRequestResponse::from_row(join_request, &state.config)))
}

/// GET /project/:id/join/responses: Answered requests of a project.
pub async fn list_responses(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<JoinRequestResponse>>, AppError> {
    let project = load_project(&state.db, &project_id).await?;
    let responses = db::join_requests::find_by_project(&state.db, &project.id, true)
        .await?
        .into_iter()
        .map(|r| JoinRequestResponse::from_row(r, &state.config))
        .collect();
    Ok(Json(responses))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/join/response", post(respond))
        .route("/join/response/:id", get(show_response))
        .route("/project/:id/join/responses", get(list_responses))
}
