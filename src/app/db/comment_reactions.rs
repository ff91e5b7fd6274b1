use sqlx::SqliteExecutor;

use crate::app::domain::Reaction;

/// Record a member's reaction to a comment, replacing any earlier one.
pub async fn upsert<'e, E>(
    executor: E,
    comment_id: &str,
    username: &str,
    reaction: Reaction,
    now: i64,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO comment_reactions (comment_id, username, reaction, created_at) VALUES (?, ?, ?, ?) \
         ON CONFLICT (comment_id, username) DO UPDATE SET reaction = excluded.reaction, created_at = excluded.created_at",
    )
    .bind(comment_id)
    .bind(username)
    .bind(reaction)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}
