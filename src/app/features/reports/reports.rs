use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::{subscribers::load_subscriber, types::ReportResponse};
use crate::app::{
    db, error::AppError, features::statistics::project, links::Link, AppState,
};

/// Which slice of each project a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportKind {
    /// Only the tasks the subscriber is assigned to.
    Personal,
    /// Every task of the project.
    Project,
}

async fn build_report(state: &AppState, username: &str, kind: ReportKind) -> Result<ReportResponse, AppError> {
    let subscriber = load_subscriber(&state.db, username).await?;
    let now = state.clock.unix_now();

    let filter = match kind {
        ReportKind::Personal => Some(subscriber.username.as_str()),
        ReportKind::Project => None,
    };

    let mut projects = Vec::new();
    for project_id in db::projects::ids_for_member(&state.db, &subscriber.username).await? {
        projects.push(project::for_project(&state.db, &project_id, filter, now).await?);
    }

    let suffix = match kind {
        ReportKind::Personal => "personal",
        ReportKind::Project => "project",
    };
    let links = vec![Link::self_link(
        &state.config,
        &format!("/subscriber/{}/reports/{suffix}", subscriber.username),
    )];

    tracing::debug!(username = %subscriber.username, ?kind, projects = projects.len(), "report generated");

    Ok(ReportResponse {
        username: subscriber.username,
        email: subscriber.email,
        generated_at: now,
        projects,
        links,
    })
}

/// GET /subscriber/:username/reports/personal
pub async fn personal_report(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ReportResponse>, AppError> {
    Ok(Json(build_report(&state, &username, ReportKind::Personal).await?))
}

/// GET /subscriber/:username/reports/project
pub async fn project_report(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ReportResponse>, AppError> {
    Ok(Json(build_report(&state, &username, ReportKind::Project).await?))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/subscriber/:username/reports/personal", get(personal_report))
        .route("/subscriber/:username/reports/project", get(project_report))
}
