use sqlx::SqliteExecutor;

use super::members::{MemberWithCounts, MEMBER_WITH_COUNTS_COLUMNS};

/// Assign a member to a task.
pub async fn insert<'e, E>(executor: E, task_id: &str, username: &str, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO task_members (task_id, username, created_at) VALUES (?, ?, ?)")
        .bind(task_id)
        .bind(username)
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

/// Check if a member is assigned to a task.
pub async fn is_assigned<'e, E>(executor: E, task_id: &str, username: &str) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM task_members WHERE task_id = ? AND username = ?")
        .bind(task_id)
        .bind(username)
        .fetch_one(executor)
        .await?;
    Ok(count > 0)
}

/// Unassign a member from every task of a project.
pub async fn remove_from_project<'e, E>(executor: E, project_id: &str, username: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "DELETE FROM task_members WHERE username = ? AND task_id IN (SELECT id FROM tasks WHERE project_id = ?)",
    )
    .bind(username)
    .bind(project_id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Members assigned to a task in assignment order.
pub async fn list(pool: &sqlx::SqlitePool, task_id: &str) -> Result<Vec<MemberWithCounts>, sqlx::Error> {
    let sql = format!(
        "SELECT {MEMBER_WITH_COUNTS_COLUMNS} FROM task_members tm \
         JOIN members m ON m.username = tm.username \
         WHERE tm.task_id = ? ORDER BY tm.created_at, tm.rowid"
    );
    sqlx::query_as::<_, MemberWithCounts>(&sql)
        .bind(task_id)
        .fetch_all(pool)
        .await
}
