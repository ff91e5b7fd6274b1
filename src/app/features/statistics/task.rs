//! Statistics view of a single task.

use std::collections::BTreeMap;

use serde::Serialize;

use super::timeline::StatusTimeline;
use crate::app::{
    db::{self, StatusInterval, Task},
    domain::{TaskStatusLabel, TaskType},
    error::{AppError, TASK_NOT_FOUND},
};

/// Derived, never stored. Durations are seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    pub task_id: String,
    pub project_id: String,
    pub task_type: TaskType,
    pub current_status: Option<TaskStatusLabel>,
    pub assigned_members_count: i64,
    pub comments_count: i64,
    pub statuses_count: i64,
    pub estimated_time: i64,
    pub total_existence_time: i64,
    pub task_status_duration_map: BTreeMap<TaskStatusLabel, i64>,
}

impl TaskStatistics {
    /// Combine a task row with its intervals. Existence time runs from task creation to `now`.
    pub fn build(task: &Task, intervals: &[StatusInterval], now: i64) -> Self {
        let timeline = StatusTimeline::accumulate(intervals, now);
        Self {
            task_id: task.id.clone(),
            project_id: task.project_id.clone(),
            task_type: task.task_type,
            current_status: task.current_status,
            assigned_members_count: task.assigned_members_count,
            comments_count: task.comments_count,
            statuses_count: timeline.intervals_count(),
            estimated_time: task.estimated_seconds,
            total_existence_time: (now - task.created_at).max(0),
            task_status_duration_map: timeline.durations,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.current_status.is_some_and(TaskStatusLabel::is_resolved)
    }
}

/// Statistics for one task by ID.
pub async fn for_task(pool: &sqlx::SqlitePool, task_id: &str, now: i64) -> Result<TaskStatistics, AppError> {
    let task = db::tasks::find_by_id(pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found(TASK_NOT_FOUND))?;
    let intervals = db::status_intervals::find_by_task(pool, &task.id).await?;
    Ok(TaskStatistics::build(&task, &intervals, now))
}

/// Statistics for each of the given tasks, in the same order.
pub async fn for_tasks(pool: &sqlx::SqlitePool, tasks: &[Task], now: i64) -> Result<Vec<TaskStatistics>, AppError> {
    let mut statistics = Vec::with_capacity(tasks.len());
    for task in tasks {
        let intervals = db::status_intervals::find_by_task(pool, &task.id).await?;
        statistics.push(TaskStatistics::build(task, &intervals, now));
    }
    Ok(statistics)
}
