use std::str::FromStr;

use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::{
    helpers::{load_project, require_project_member},
    types::ProjectResponse,
};
use crate::app::{
    caller::Caller,
    db,
    domain::ProjectStatus,
    error::AppError,
    extract::ValidJson,
    AppState,
};

/// Request body for replacing a project (PUT).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceProjectRequest {
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
    #[validate(custom(function = "crate::app::domain::project_status::validate_project_status"))]
    pub status: String,
}

/// Request body for updating a project (PATCH). Omitted fields stay unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchProjectRequest {
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
    #[validate(custom(function = "crate::app::domain::project_status::validate_project_status"))]
    pub status: Option<String>,
}

fn parse_status(value: &str) -> Result<ProjectStatus, AppError> {
    // Already validated; a failure here is a bug.
    ProjectStatus::from_str(value).map_err(|_| AppError::Internal)
}

async fn apply_changes(
    state: &AppState,
    project_id: &str,
    title: &str,
    description: &str,
    status: ProjectStatus,
) -> Result<ProjectResponse, AppError> {
    let changes = db::projects::ProjectChanges {
        title: title.trim(),
        description: description.trim(),
        status,
    };
    db::projects::update(&state.db, project_id, &changes, state.clock.unix_now()).await?;

    tracing::info!(%project_id, %status, "project updated");

    let project = load_project(&state.db, project_id).await?;
    Ok(ProjectResponse::from_row(project, &state.config))
}

/// PUT /project/:id: Replace title, description and status.
pub async fn replace_project(
    caller: Caller,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ValidJson(request): ValidJson<ReplaceProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = load_project(&state.db, &project_id).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    let status = parse_status(&request.status)?;
    let response = apply_changes(&state, &project.id, &request.title, &request.description, status).await?;
    Ok(Json(response))
}

/// PATCH /project/:id: Update any subset of title, description and status.
pub async fn patch_project(
    caller: Caller,
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ValidJson(request): ValidJson<PatchProjectRequest>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = load_project(&state.db, &project_id).await?;
    require_project_member(&state.db, &project.id, &caller).await?;

    // Merge provided fields with existing values
    let title = request.title.as_deref().unwrap_or(&project.title);
    let description = request.description.as_deref().unwrap_or(&project.description);
    let status = match request.status.as_deref() {
        Some(s) => parse_status(s)?,
        None => project.status,
    };

    let response = apply_changes(&state, &project.id, title, description, status).await?;
    Ok(Json(response))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/project/:id", put(replace_project).patch(patch_project))
}
