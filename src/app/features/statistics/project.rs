//! Project-level statistics folded from task statistics.

use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoEnumIterator;

use super::task::{self, TaskStatistics};
use crate::app::{
    db,
    domain::{TaskStatusLabel, TaskType},
    error::{AppError, MEMBER_NOT_FOUND, PROJECT_NOT_FOUND},
};

/// Derived, never stored. Durations are seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub project_id: String,
    pub username: Option<String>,
    pub total_tasks_count: i64,
    pub total_assigned_members_count: i64,
    pub total_comments_count: i64,
    pub total_statuses_count: i64,
    pub total_estimated_time: i64,
    pub total_existence_time: i64,
    pub performance_percentage: i64,
    pub total_task_status_duration_map: BTreeMap<TaskStatusLabel, i64>,
    pub total_tasks_type_count_map: BTreeMap<TaskType, i64>,
}

/// Resolved share of all tasks as a whole percentage, rounded half up. 0 for no tasks.
pub fn performance_percentage(resolved: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    let resolved = resolved.clamp(0, total);
    (resolved * 200 + total) / (2 * total)
}

impl ProjectStatistics {
    /// Fold task statistics. Every label and every type appears in the maps, zero when unused.
    pub fn fold(project_id: &str, username: Option<&str>, tasks: &[TaskStatistics]) -> Self {
        let mut durations: BTreeMap<TaskStatusLabel, i64> =
            TaskStatusLabel::iter().map(|label| (label, 0)).collect();
        let mut types: BTreeMap<TaskType, i64> = TaskType::iter().map(|t| (t, 0)).collect();

        let mut stats = Self {
            project_id: project_id.to_string(),
            username: username.map(str::to_string),
            total_tasks_count: tasks.len() as i64,
            total_assigned_members_count: 0,
            total_comments_count: 0,
            total_statuses_count: 0,
            total_estimated_time: 0,
            total_existence_time: 0,
            performance_percentage: 0,
            total_task_status_duration_map: BTreeMap::new(),
            total_tasks_type_count_map: BTreeMap::new(),
        };

        let mut resolved = 0;
        for task in tasks {
            stats.total_assigned_members_count += task.assigned_members_count;
            stats.total_comments_count += task.comments_count;
            stats.total_statuses_count += task.statuses_count;
            stats.total_estimated_time += task.estimated_time;
            stats.total_existence_time += task.total_existence_time;
            for (label, seconds) in &task.task_status_duration_map {
                *durations.entry(*label).or_insert(0) += seconds;
            }
            *types.entry(task.task_type).or_insert(0) += 1;
            if task.is_resolved() {
                resolved += 1;
            }
        }

        stats.performance_percentage = performance_percentage(resolved, stats.total_tasks_count);
        stats.total_task_status_duration_map = durations;
        stats.total_tasks_type_count_map = types;
        stats
    }
}

/// Statistics for a project, optionally restricted to the tasks one member is assigned to.
pub async fn for_project(
    pool: &sqlx::SqlitePool,
    project_id: &str,
    username: Option<&str>,
    now: i64,
) -> Result<ProjectStatistics, AppError> {
    let project = db::projects::find_by_id(pool, project_id)
        .await?
        .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))?;

    let tasks = match username {
        None => db::tasks::find_by_project(pool, &project.id).await?,
        Some(username) => {
            if !db::members::exists(pool, username).await? {
                return Err(AppError::not_found(MEMBER_NOT_FOUND));
            }
            if !db::project_members::is_member(pool, &project.id, username).await? {
                return Err(AppError::not_project_member(username, &project.id));
            }
            db::tasks::find_by_project_and_assignee(pool, &project.id, username).await?
        }
    };

    let statistics = task::for_tasks(pool, &tasks, now).await?;
    Ok(ProjectStatistics::fold(&project.id, username, &statistics))
}
