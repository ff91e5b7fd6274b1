use std::collections::BTreeSet;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use super::types::ProjectResponse;
use crate::app::{
    caller::Caller,
    db,
    domain::ProjectStatus,
    error::AppError,
    extract::ValidJson,
    AppState,
};

/// Request body for creating a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
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
    /// Invitees. Each one other than the author receives a join request.
    #[serde(default)]
    #[validate(custom(function = "crate::app::domain::username::validate_usernames"))]
    pub members_usernames: Vec<String>,
}

/// POST /project: Create a project owned by the caller.
pub async fn create_project(
    caller: Caller,
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), AppError> {
    let now = state.clock.unix_now();
    let author = caller.username();
    let project_id = Ulid::new().to_string();

    let invitees: BTreeSet<String> = request
        .members_usernames
        .iter()
        .map(|u| u.trim().to_string())
        .filter(|u| u != author)
        .collect();

    let new_project = db::projects::NewProject {
        id: project_id.clone(),
        title: request.title.trim().to_string(),
        description: request.description.trim().to_string(),
        status: ProjectStatus::Created,
        author_username: author.to_string(),
    };

    let mut tx = state.db.begin().await?;
    db::members::ensure(&mut *tx, author, now).await?;
    db::projects::insert(&mut *tx, &new_project, now).await?;
    db::project_members::add(&mut *tx, &project_id, author, now).await?;
    for username in &invitees {
        db::members::ensure(&mut *tx, username, now).await?;
        let join_request = db::join_requests::NewJoinRequest {
            id: Ulid::new().to_string(),
            project_id: project_id.clone(),
            username: username.clone(),
            requested_by: author.to_string(),
        };
        db::join_requests::insert(&mut *tx, &join_request, now).await?;
    }
    tx.commit().await?;

    tracing::info!(%project_id, %author, invitations = invitees.len(), "project created");

    let project = db::projects::find_by_id(&state.db, &project_id)
        .await?
        .ok_or(AppError::Internal)?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from_row(project, &state.config))))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/project", post(create_project))
}
