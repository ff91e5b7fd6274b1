use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use super::{
    helpers::load_task,
    types::{CommentResponse, COMMENT_SORTING},
};
use crate::app::{
    caller::Caller,
    db,
    domain::{Page, PageParams},
    error::AppError,
    extract::{AppQuery, ValidJson},
    features::projects::helpers::require_project_member,
    AppState,
};

/// Request body for commenting on a task.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::validation_helpers::not_blank"))]
    pub task_id: String,
    #[serde(default)]
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        length(max = 4000, code = "TOO_LONG")
    )]
    pub content: String,
}

/// POST /task/comment: Comment on a task.
pub async fn create_comment(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let task = load_task(&state.db, request.task_id.trim()).await?;
    require_project_member(&state.db, &task.project_id, &caller).await?;

    let now = state.clock.unix_now();
    let comment_id = Ulid::new().to_string();
    let new_comment = db::comments::NewComment {
        id: comment_id.clone(),
        task_id: task.id.clone(),
        author_username: caller.username().to_string(),
        content: request.content.trim().to_string(),
    };

    let mut tx = state.db.begin().await?;
    db::members::ensure(&mut *tx, caller.username(), now).await?;
    db::comments::insert(&mut *tx, &new_comment, now).await?;
    tx.commit().await?;

    tracing::info!(%comment_id, task_id = %task.id, author = %caller.username(), "comment created");

    let comment = db::comments::find_by_id(&state.db, &comment_id)
        .await?
        .ok_or(AppError::Internal)?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from_row(comment, &state.config))))
}

/// GET /task/:id/comments: Page through a task's comments.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<CommentResponse>>, AppError> {
    let page = params.resolve(&COMMENT_SORTING)?;
    let task = load_task(&state.db, &task_id).await?;

    let comments = db::comments::find_page_by_task(&state.db, &task.id, &page).await?;
    let total = db::comments::count_by_task(&state.db, &task.id).await?;

    let content = comments
        .into_iter()
        .map(|c| CommentResponse::from_row(c, &state.config))
        .collect();
    let path = format!("/task/{}/comments", task.id);

    Ok(Json(Page::new(content, &page, total, &state.config, &path)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/task/comment", post(create_comment))
        .route("/task/:id/comments", get(list_comments))
}
