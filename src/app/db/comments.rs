use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::PageRequest;

/// Database row for comments table, with reaction tallies.
#[derive(Debug, FromRow)]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub author_username: String,
    pub content: String,
    pub created_at: i64,
    pub likes_count: i64,
    pub dislikes_count: i64,
}

pub struct NewComment {
    pub id: String,
    pub task_id: String,
    pub author_username: String,
    pub content: String,
}

const SELECT_COMMENT: &str = "SELECT c.id, c.task_id, c.author_username, c.content, c.created_at, \
    (SELECT count(*) FROM comment_reactions r WHERE r.comment_id = c.id AND r.reaction = 'LIKE') AS likes_count, \
    (SELECT count(*) FROM comment_reactions r WHERE r.comment_id = c.id AND r.reaction = 'DISLIKE') AS dislikes_count \
    FROM comments c";

pub async fn insert<'e, E>(executor: E, comment: &NewComment, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO comments (id, task_id, author_username, content, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(&comment.id)
        .bind(&comment.task_id)
        .bind(&comment.author_username)
        .bind(&comment.content)
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<Comment>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("{SELECT_COMMENT} WHERE c.id = ?");
    sqlx::query_as::<_, Comment>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// One page of a task's comments.
pub async fn find_page_by_task(
    pool: &sqlx::SqlitePool,
    task_id: &str,
    page: &PageRequest,
) -> Result<Vec<Comment>, sqlx::Error> {
    let sql = format!(
        "{SELECT_COMMENT} WHERE c.task_id = ? ORDER BY {}, c.rowid LIMIT ? OFFSET ?",
        page.order_by()
    );
    sqlx::query_as::<_, Comment>(&sql)
        .bind(task_id)
        .bind(page.page_size)
        .bind(page.offset())
        .fetch_all(pool)
        .await
}

pub async fn count_by_task(pool: &sqlx::SqlitePool, task_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT count(*) FROM comments WHERE task_id = ?")
        .bind(task_id)
        .fetch_one(pool)
        .await
}
