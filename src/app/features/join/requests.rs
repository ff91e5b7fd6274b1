use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use super::types::JoinRequestResponse;
use crate::app::{
    caller::Caller,
    db,
    error::AppError,
    extract::ValidJson,
    features::projects::helpers::{load_project, require_project_member},
    AppState,
};

/// Request body for inviting a member into a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJoinRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::validation_helpers::not_blank"))]
    pub project_id: String,
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::username::validate_username"))]
    pub username: String,
}

/// POST /join/request: Invite a member into a project the caller belongs to.
pub async fn create_join_request(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateJoinRequest>,
) -> Result<(StatusCode, Json<JoinRequestResponse>), AppError> {
    let project = load_project(&state.db, request.project_id.trim()).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    let username = request.username.trim();
    if db::project_members::is_member(&state.db, &project.id, username).await? {
        return Err(AppError::already_project_member(username, &project.id));
    }
    if db::join_requests::has_pending(&state.db, &project.id, username).await? {
        return Err(AppError::BadRequest(format!(
            "JOIN_REQUEST_FOR_USERNAME_{username}_TO_PROJECT_WITH_ID_{}_IS_PENDING",
            project.id
        )));
    }

    let now = state.clock.unix_now();
    let new_request = db::join_requests::NewJoinRequest {
        id: Ulid::new().to_string(),
        project_id: project.id.clone(),
        username: username.to_string(),
        requested_by: caller.username().to_string(),
    };

    let mut tx = state.db.begin().await?;
    db::members::ensure(&mut *tx, caller.username(), now).await?;
    db::members::ensure(&mut *tx, username, now).await?;
    db::join_requests::insert(&mut *tx, &new_request, now).await?;
    tx.commit().await?;

    tracing::info!(join_request_id = %new_request.id, project_id = %project.id, %username, "join request created");

    let created = db::join_requests::find_by_id(&state.db, &new_request.id)
        .await?
        .ok_or(AppError::Internal)?;
    Ok((StatusCode::CREATED, Json(JoinRequestResponse::from_row(created, &state.config))))
}

/// GET /project/:id/join/requests: Pending requests of a project.
pub async fn list_join_requests(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<JoinRequestResponse>>, AppError> {
    let project = load_project(&state.db, &project_id).await?;
    let requests = db::join_requests::find_by_project(&state.db, &project.id, false)
        .await?
        .into_iter()
        .map(|r| JoinRequestResponse::from_row(r, &state.config))
        .collect();
    Ok(Json(requests))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/join/request", post(create_join_request))
        .route("/project/:id/join/requests", get(list_join_requests))
}
