use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::PageRequest;

/// Database row for subscribers table.
#[derive(Debug, FromRow)]
pub struct Subscriber {
    pub username: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

pub async fn insert<'e, E>(executor: E, username: &str, email: &str, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("INSERT INTO subscribers (username, email, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(email)
        .bind(now)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn find_by_username<'e, E>(executor: E, username: &str) -> Result<Option<Subscriber>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Subscriber>(
        "SELECT username, email, created_at, updated_at FROM subscribers WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(executor)
    .await
}

pub async fn find_page(pool: &sqlx::SqlitePool, page: &PageRequest) -> Result<Vec<Subscriber>, sqlx::Error> {
    let sql = format!(
        "SELECT username, email, created_at, updated_at FROM subscribers ORDER BY {}, rowid LIMIT ? OFFSET ?",
        page.order_by()
    );
    sqlx::query_as::<_, Subscriber>(&sql)
        .bind(page.page_size)
        .bind(page.offset())
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT count(*) FROM subscribers")
        .fetch_one(pool)
        .await
}

pub async fn update_email<'e, E>(executor: E, username: &str, email: &str, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE subscribers SET email = ?, updated_at = ? WHERE username = ?")
        .bind(email)
        .bind(now)
        .bind(username)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete<'e, E>(executor: E, username: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM subscribers WHERE username = ?")
        .bind(username)
        .execute(executor)
        .await?;
    Ok(())
}
