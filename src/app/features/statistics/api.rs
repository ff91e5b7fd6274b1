use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{
    project::{self, ProjectStatistics},
    task::{self, TaskStatistics},
};
use crate::app::{
    db, error::AppError, extract::AppQuery, features::projects::helpers::load_project, AppState,
};

/// Optional member filter of the project statistics.
#[derive(Debug, Default, Deserialize)]
pub struct StatisticsQuery {
    pub username: Option<String>,
}

/// GET /project/:id/statistics: Aggregated statistics, optionally for one member's tasks.
pub async fn project_statistics(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    AppQuery(query): AppQuery<StatisticsQuery>,
) -> Result<Json<ProjectStatistics>, AppError> {
    let now = state.clock.unix_now();
    let username = query
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let statistics = project::for_project(&state.db, &project_id, username, now).await?;
    Ok(Json(statistics))
}

/// GET /project/:id/tasks/statistics: Statistics of every task of a project.
pub async fn project_task_statistics(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<TaskStatistics>>, AppError> {
    let now = state.clock.unix_now();
    let project = load_project(&state.db, &project_id).await?;
    let tasks = db::tasks::find_by_project(&state.db, &project.id).await?;
    Ok(Json(task::for_tasks(&state.db, &tasks, now).await?))
}

/// GET /task/:id/statistics
pub async fn task_statistics(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<TaskStatistics>, AppError> {
    let now = state.clock.unix_now();
    Ok(Json(task::for_task(&state.db, &task_id, now).await?))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/project/:id/statistics", get(project_statistics))
        .route("/project/:id/tasks/statistics", get(project_task_statistics))
        .route("/task/:id/statistics", get(task_statistics))
}
