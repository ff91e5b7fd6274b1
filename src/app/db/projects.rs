use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::{PageRequest, ProjectStatus};

/// Database row for projects table, with derived counts.
#[derive(Debug, FromRow)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub author_username: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub members_count: i64,
    pub tasks_count: i64,
    pub join_requests_count: i64,
}

/// Data structure for inserting a new project.
pub struct NewProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub author_username: String,
}

/// Full replacement of the editable project fields.
pub struct ProjectChanges<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: ProjectStatus,
}

const SELECT_PROJECT: &str = "SELECT p.id, p.title, p.description, p.status, p.author_username, p.created_at, p.updated_at, \
    (SELECT count(*) FROM project_members pm WHERE pm.project_id = p.id) AS members_count, \
    (SELECT count(*) FROM tasks t WHERE t.project_id = p.id) AS tasks_count, \
    (SELECT count(*) FROM join_requests j WHERE j.project_id = p.id) AS join_requests_count \
    FROM projects p";

/// Insert a new project into the database.
pub async fn insert<'e, E>(executor: E, project: &NewProject, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO projects (id, title, description, status, author_username, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&project.id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(project.status)
    .bind(&project.author_username)
    .bind(now)
    .execute(executor)
    .await?;

    Ok(())
}

/// Find a project by ID.
pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<Project>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("{SELECT_PROJECT} WHERE p.id = ?");
    sqlx::query_as::<_, Project>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// One page of the projects a member belongs to.
pub async fn find_page_for_member(
    pool: &sqlx::SqlitePool,
    username: &str,
    page: &PageRequest,
) -> Result<Vec<Project>, sqlx::Error> {
    let sql = format!(
        "{SELECT_PROJECT} WHERE p.id IN (SELECT project_id FROM project_members WHERE username = ?) \
         ORDER BY {}, p.rowid LIMIT ? OFFSET ?",
        page.order_by()
    );
    sqlx::query_as::<_, Project>(&sql)
        .bind(username)
        .bind(page.page_size)
        .bind(page.offset())
        .fetch_all(pool)
        .await
}

/// Count the projects a member belongs to.
pub async fn count_for_member(pool: &sqlx::SqlitePool, username: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT count(*) FROM project_members WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
}

/// IDs of all projects a member belongs to, oldest first.
pub async fn ids_for_member(pool: &sqlx::SqlitePool, username: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT p.id FROM projects p JOIN project_members pm ON pm.project_id = p.id \
         WHERE pm.username = ? ORDER BY p.created_at, p.rowid",
    )
    .bind(username)
    .fetch_all(pool)
    .await
}

/// Update the editable fields and the updated_at timestamp.
pub async fn update<'e, E>(
    executor: E,
    id: &str,
    changes: &ProjectChanges<'_>,
    now: i64,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE projects SET title = ?, description = ?, status = ?, updated_at = ? WHERE id = ?")
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.status)
        .bind(now)
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}

/// Delete a project by ID. Tasks, memberships and join requests cascade.
pub async fn delete<'e, E>(executor: E, id: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
