//! Report subscribers: who receives reports and where they are sent.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::types::{SubscriberResponse, SUBSCRIBER_SORTING};
use crate::app::{
    db,
    domain::{Page, PageParams},
    error::{AppError, SUBSCRIBER_NOT_FOUND},
    extract::{AppQuery, ValidJson},
    AppState,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubscriberRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::username::validate_username"))]
    pub username: String,
    #[serde(default)]
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        email(code = "INVALID")
    )]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceSubscriberRequest {
    #[serde(default)]
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        email(code = "INVALID")
    )]
    pub email: String,
}

/// PATCH body. Omitted email keeps the current one.
#[derive(Debug, Deserialize, Validate)]
pub struct PatchSubscriberRequest {
    #[validate(
        custom(function = "crate::app::domain::validation_helpers::not_blank"),
        email(code = "INVALID")
    )]
    pub email: Option<String>,
}

pub async fn load_subscriber(
    pool: &sqlx::SqlitePool,
    username: &str,
) -> Result<db::subscribers::Subscriber, AppError> {
    db::subscribers::find_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::not_found(SUBSCRIBER_NOT_FOUND))
}

/// POST /subscriber
pub async fn create_subscriber(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateSubscriberRequest>,
) -> Result<(StatusCode, Json<SubscriberResponse>), AppError> {
    let username = request.username.trim();
    if db::subscribers::find_by_username(&state.db, username).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "SUBSCRIBER_WITH_USERNAME_{username}_ALREADY_EXISTS"
        )));
    }

    db::subscribers::insert(&state.db, username, request.email.trim(), state.clock.unix_now()).await?;
    tracing::info!(%username, "subscriber created");

    let subscriber = load_subscriber(&state.db, username).await?;
    Ok((StatusCode::CREATED, Json(SubscriberResponse::from_row(subscriber, &state.config))))
}

/// GET /subscriber
pub async fn list_subscribers(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<Page<SubscriberResponse>>, AppError> {
    let page = params.resolve(&SUBSCRIBER_SORTING)?;

    let subscribers = db::subscribers::find_page(&state.db, &page).await?;
    let total = db::subscribers::count(&state.db).await?;

    let content = subscribers
        .into_iter()
        .map(|s| SubscriberResponse::from_row(s, &state.config))
        .collect();

    Ok(Json(Page::new(content, &page, total, &state.config, "/subscriber")))
}

/// GET /subscriber/:username
pub async fn show_subscriber(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SubscriberResponse>, AppError> {
    let subscriber = load_subscriber(&state.db, &username).await?;
    Ok(Json(SubscriberResponse::from_row(subscriber, &state.config)))
}

async fn change_email(state: &AppState, username: &str, email: &str) -> Result<SubscriberResponse, AppError> {
    db::subscribers::update_email(&state.db, username, email.trim(), state.clock.unix_now()).await?;
    tracing::info!(%username, "subscriber email changed");

    let subscriber = load_subscriber(&state.db, username).await?;
    Ok(SubscriberResponse::from_row(subscriber, &state.config))
}

/// PUT /subscriber/:username
pub async fn replace_subscriber(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidJson(request): ValidJson<ReplaceSubscriberRequest>,
) -> Result<Json<SubscriberResponse>, AppError> {
    let subscriber = load_subscriber(&state.db, &username).await?;
    Ok(Json(change_email(&state, &subscriber.username, &request.email).await?))
}

/// PATCH /subscriber/:username
pub async fn patch_subscriber(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidJson(request): ValidJson<PatchSubscriberRequest>,
) -> Result<Json<SubscriberResponse>, AppError> {
    let subscriber = load_subscriber(&state.db, &username).await?;
    let email = request.email.as_deref().unwrap_or(&subscriber.email);
    Ok(Json(change_email(&state, &subscriber.username, email).await?))
}

/// DELETE /subscriber/:username
pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, AppError> {
    let subscriber = load_subscriber(&state.db, &username).await?;
    db::subscribers::delete(&state.db, &subscriber.username).await?;
    tracing::info!(username = %subscriber.username, "subscriber deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/subscriber", get(list_subscribers).post(create_subscriber))
        .route(
            "/subscriber/:username",
            get(show_subscriber)
                .put(replace_subscriber)
                .patch(patch_subscriber)
                .delete(delete_subscriber),
        )
}
