use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::JoinResponseStatus;

/// Database row for join_requests table. `response = None` while pending.
#[derive(Debug, FromRow)]
pub struct JoinRequest {
    pub id: String,
    pub project_id: String,
    pub username: String,
    pub requested_by: String,
    pub created_at: i64,
    pub response: Option<JoinResponseStatus>,
    pub responded_at: Option<i64>,
}

pub struct NewJoinRequest {
    pub id: String,
    pub project_id: String,
    pub username: String,
    pub requested_by: String,
}

const SELECT_JOIN_REQUEST: &str =
    "SELECT id, project_id, username, requested_by, created_at, response, responded_at FROM join_requests";

pub async fn insert<'e, E>(executor: E, request: &NewJoinRequest, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO join_requests (id, project_id, username, requested_by, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&request.id)
    .bind(&request.project_id)
    .bind(&request.username)
    .bind(&request.requested_by)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<JoinRequest>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("{SELECT_JOIN_REQUEST} WHERE id = ?");
    sqlx::query_as::<_, JoinRequest>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Whether a member already has an unanswered request for a project.
pub async fn has_pending<'e, E>(executor: E, project_id: &str, username: &str) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar(
        "SELECT count(*) FROM join_requests WHERE project_id = ? AND username = ? AND response IS NULL",
    )
    .bind(project_id)
    .bind(username)
    .fetch_one(executor)
    .await?;
    Ok(count > 0)
}

/// Requests of a project, either still pending or already answered.
pub async fn find_by_project(
    pool: &sqlx::SqlitePool,
    project_id: &str,
    answered: bool,
) -> Result<Vec<JoinRequest>, sqlx::Error> {
    let filter = if answered { "IS NOT NULL" } else { "IS NULL" };
    let sql = format!("{SELECT_JOIN_REQUEST} WHERE project_id = ? AND response {filter} ORDER BY created_at, rowid");
    sqlx::query_as::<_, JoinRequest>(&sql)
        .bind(project_id)
        .fetch_all(pool)
        .await
}

/// Store the invitee's answer.
pub async fn respond<'e, E>(executor: E, id: &str, response: JoinResponseStatus, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE join_requests SET response = ?, responded_at = ? WHERE id = ?")
        .bind(response)
        .bind(now)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
