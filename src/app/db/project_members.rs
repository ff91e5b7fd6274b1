use sqlx::SqliteExecutor;

use super::members::{MemberWithCounts, MEMBER_WITH_COUNTS_COLUMNS};

/// Add a member to a project. Idempotent (INSERT OR IGNORE).
pub async fn add<'e, E>(executor: E, project_id: &str, username: &str, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT OR IGNORE INTO project_members (project_id, username, created_at) VALUES (?, ?, ?)")
        .bind(project_id)
        .bind(username)
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

/// Check if a user is a member of a project.
pub async fn is_member<'e, E>(executor: E, project_id: &str, username: &str) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 =
        sqlx::query_scalar("SELECT count(*) FROM project_members WHERE project_id = ? AND username = ?")
            .bind(project_id)
            .bind(username)
            .fetch_one(executor)
            .await?;
    Ok(count > 0)
}

/// Remove a member from a project.
pub async fn remove<'e, E>(executor: E, project_id: &str, username: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM project_members WHERE project_id = ? AND username = ?")
        .bind(project_id)
        .bind(username)
        .execute(executor)
        .await?;
    Ok(())
}

/// Members of a project in the order they joined.
pub async fn list(pool: &sqlx::SqlitePool, project_id: &str) -> Result<Vec<MemberWithCounts>, sqlx::Error> {
    let sql = format!(
        "SELECT {MEMBER_WITH_COUNTS_COLUMNS} FROM project_members pm \
         JOIN members m ON m.username = pm.username \
         WHERE pm.project_id = ? ORDER BY pm.created_at, pm.rowid"
    );
    sqlx::query_as::<_, MemberWithCounts>(&sql)
        .bind(project_id)
        .fetch_all(pool)
        .await
}
