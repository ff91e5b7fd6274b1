use sqlx::{FromRow, SqliteExecutor};

use crate::app::domain::{PageRequest, TaskPriority, TaskStatusLabel, TaskType};

/// Database row for tasks table, with current status and derived counts.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub author_username: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub task_type: TaskType,
    pub estimated_seconds: i64,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub current_status: Option<TaskStatusLabel>,
    pub assigned_members_count: i64,
    pub comments_count: i64,
}

/// Data structure for inserting a new task.
pub struct NewTask {
    pub id: String,
    pub project_id: String,
    pub author_username: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub task_type: TaskType,
    pub estimated_seconds: i64,
}

/// Full replacement of the editable task fields.
pub struct TaskChanges<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub priority: TaskPriority,
    pub task_type: TaskType,
    pub estimated_seconds: i64,
}

const SELECT_TASK: &str = "SELECT t.id, t.project_id, t.author_username, t.title, t.description, t.priority, t.task_type, \
    t.estimated_seconds, t.created_at, t.updated_at, \
    (SELECT s.label FROM task_statuses s WHERE s.task_id = t.id AND s.set_till IS NULL) AS current_status, \
    (SELECT count(*) FROM task_members tm WHERE tm.task_id = t.id) AS assigned_members_count, \
    (SELECT count(*) FROM comments c WHERE c.task_id = t.id) AS comments_count \
    FROM tasks t";

/// Insert a new task into the database.
pub async fn insert<'e, E>(executor: E, task: &NewTask, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO tasks (id, project_id, author_username, title, description, priority, task_type, estimated_seconds, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&task.id)
    .bind(&task.project_id)
    .bind(&task.author_username)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.priority)
    .bind(task.task_type)
    .bind(task.estimated_seconds)
    .bind(now)
    .execute(executor)
    .await?;

    Ok(())
}

/// Find a task by ID.
pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<Task>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("{SELECT_TASK} WHERE t.id = ?");
    sqlx::query_as::<_, Task>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// All tasks of a project, oldest first.
pub async fn find_by_project(pool: &sqlx::SqlitePool, project_id: &str) -> Result<Vec<Task>, sqlx::Error> {
    let sql = format!("{SELECT_TASK} WHERE t.project_id = ? ORDER BY t.created_at, t.rowid");
    sqlx::query_as::<_, Task>(&sql)
        .bind(project_id)
        .fetch_all(pool)
        .await
}

/// Tasks of a project that a member is assigned to, oldest first.
pub async fn find_by_project_and_assignee(
    pool: &sqlx::SqlitePool,
    project_id: &str,
    username: &str,
) -> Result<Vec<Task>, sqlx::Error> {
    let sql = format!(
        "{SELECT_TASK} WHERE t.project_id = ? \
         AND t.id IN (SELECT task_id FROM task_members WHERE username = ?) \
         ORDER BY t.created_at, t.rowid"
    );
    sqlx::query_as::<_, Task>(&sql)
        .bind(project_id)
        .bind(username)
        .fetch_all(pool)
        .await
}

/// One page of a project's tasks.
pub async fn find_page_by_project(
    pool: &sqlx::SqlitePool,
    project_id: &str,
    page: &PageRequest,
) -> Result<Vec<Task>, sqlx::Error> {
    let sql = format!(
        "{SELECT_TASK} WHERE t.project_id = ? ORDER BY {}, t.rowid LIMIT ? OFFSET ?",
        page.order_by()
    );
    sqlx::query_as::<_, Task>(&sql)
        .bind(project_id)
        .bind(page.page_size)
        .bind(page.offset())
        .fetch_all(pool)
        .await
}

pub async fn count_by_project(pool: &sqlx::SqlitePool, project_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT count(*) FROM tasks WHERE project_id = ?")
        .bind(project_id)
        .fetch_one(pool)
        .await
}

/// One page of the tasks in every project the member belongs to.
pub async fn find_page_for_member(
    pool: &sqlx::SqlitePool,
    username: &str,
    page: &PageRequest,
) -> Result<Vec<Task>, sqlx::Error> {
    let sql = format!(
        "{SELECT_TASK} WHERE t.project_id IN (SELECT project_id FROM project_members WHERE username = ?) \
         ORDER BY {}, t.rowid LIMIT ? OFFSET ?",
        page.order_by()
    );
    sqlx::query_as::<_, Task>(&sql)
        .bind(username)
        .bind(page.page_size)
        .bind(page.offset())
        .fetch_all(pool)
        .await
}

pub async fn count_for_member(pool: &sqlx::SqlitePool, username: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT count(*) FROM tasks WHERE project_id IN (SELECT project_id FROM project_members WHERE username = ?)",
    )
    .bind(username)
    .fetch_one(pool)
    .await
}

/// Update the editable fields and the updated_at timestamp.
pub async fn update<'e, E>(executor: E, id: &str, changes: &TaskChanges<'_>, now: i64) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "UPDATE tasks SET title = ?, description = ?, priority = ?, task_type = ?, estimated_seconds = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(changes.title)
    .bind(changes.description)
    .bind(changes.priority)
    .bind(changes.task_type)
    .bind(changes.estimated_seconds)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}

/// Delete a task by ID. Statuses, comments and assignments cascade.
pub async fn delete<'e, E>(executor: E, id: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
