use std::str::FromStr;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use validator::Validate;

use super::{helpers::load_task, types::CommentResponse};
use crate::app::{
    caller::Caller,
    db,
    domain::Reaction,
    error::{AppError, COMMENT_NOT_FOUND},
    extract::ValidJson,
    features::projects::helpers::require_project_member,
    AppState,
};

/// Request body for reacting to a comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::validation_helpers::not_blank"))]
    pub comment_id: String,
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::reaction::validate_reaction"))]
    pub reaction: String,
}

/// POST /task/comment/reaction: Like or dislike a comment. A second reaction replaces the first.
pub async fn react(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ReactRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = db::comments::find_by_id(&state.db, request.comment_id.trim())
        .await?
        .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;
    let task = load_task(&state.db, &comment.task_id).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    let reaction = Reaction::from_str(&request.reaction).map_err(|_| AppError::Internal)?;
    let now = state.clock.unix_now();

    let mut tx = state.db.begin().await?;
    db::members::ensure(&mut *tx, caller.username(), now).await?;
    db::comment_reactions::upsert(&mut *tx, &comment.id, caller.username(), reaction, now).await?;
    tx.commit().await?;

    tracing::info!(comment_id = %comment.id, %reaction, by = %caller.username(), "comment reaction recorded");

    let comment = db::comments::find_by_id(&state.db, &comment.id)
        .await?
        .ok_or(AppError::Internal)?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from_row(comment, &state.config))))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/task/comment/reaction", post(react))
}
