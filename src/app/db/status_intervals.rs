use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::TaskStatusLabel;

/// Database row for task_statuses table. `set_till = None` marks the ongoing interval.
#[derive(Debug, Clone, FromRow)]
pub struct StatusInterval {
    pub id: String,
    pub task_id: String,
    pub label: TaskStatusLabel,
    pub set_at: i64,
    pub set_till: Option<i64>,
    pub set_by: String,
}

/// Data structure for opening a new interval.
pub struct NewStatusInterval {
    pub id: String,
    pub task_id: String,
    pub label: TaskStatusLabel,
    pub set_by: String,
}

/// Open a new interval starting at `now`.
/// Callers close the previous one first; the partial unique index rejects two open intervals.
pub async fn insert<'e, E>(executor: E, interval: &NewStatusInterval, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO task_statuses (id, task_id, label, set_at, set_till, set_by) VALUES (?, ?, ?, ?, NULL, ?)")
        .bind(&interval.id)
        .bind(&interval.task_id)
        .bind(interval.label)
        .bind(now)
        .bind(&interval.set_by)
        .execute(executor)
        .await?;
    Ok(())
}

/// The ongoing interval of a task, if any.
pub async fn find_ongoing<'e, E>(executor: E, task_id: &str) -> Result<Option<StatusInterval>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, StatusInterval>(
        "SELECT id, task_id, label, set_at, set_till, set_by FROM task_statuses WHERE task_id = ? AND set_till IS NULL",
    )
    .bind(task_id)
    .fetch_optional(executor)
    .await
}

/// Close the ongoing interval of a task at `now`.
pub async fn close_ongoing<'e, E>(executor: E, task_id: &str, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE task_statuses SET set_till = ? WHERE task_id = ? AND set_till IS NULL")
        .bind(now)
        .bind(task_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Find an interval by ID.
pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<StatusInterval>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, StatusInterval>(
        "SELECT id, task_id, label, set_at, set_till, set_by FROM task_statuses WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Every interval of a task in the order they were recorded.
pub async fn find_by_task<'e, E>(executor: E, task_id: &str) -> Result<Vec<StatusInterval>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, StatusInterval>(
        "SELECT id, task_id, label, set_at, set_till, set_by FROM task_statuses WHERE task_id = ? ORDER BY set_at, rowid",
    )
    .bind(task_id)
    .fetch_all(executor)
    .await
}
