use sqlx::{FromRow, SqliteExecutor};

/// Member as listed under a project or task, with participation counts.
#[derive(Debug, FromRow)]
pub struct MemberWithCounts {
    pub username: String,
    pub created_at: i64,
    pub projects_count: i64,
    pub tasks_count: i64,
}

/// Register a member. Idempotent: no-op if the username is already known (INSERT OR IGNORE).
pub async fn ensure<'e, E>(executor: E, username: &str, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT OR IGNORE INTO members (username, created_at) VALUES (?, ?)")
        .bind(username)
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

/// Check whether a username has ever been registered.
pub async fn exists<'e, E>(executor: E, username: &str) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM members WHERE username = ?")
        .bind(username)
        .fetch_one(executor)
        .await?;
    Ok(count > 0)
}

/// Columns shared by every member listing. Expects the member table aliased as `m`.
pub(crate) const MEMBER_WITH_COUNTS_COLUMNS: &str = "m.username, m.created_at, \
    (SELECT count(*) FROM project_members pm2 WHERE pm2.username = m.username) AS projects_count, \
    (SELECT count(*) FROM task_members tm2 WHERE tm2.username = m.username) AS tasks_count";
