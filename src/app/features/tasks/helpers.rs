use crate::app::{
    db,
    error::{AppError, TASK_NOT_FOUND},
};

/// Load task by id. Returns NotFound if it doesn't exist.
pub async fn load_task(pool: &sqlx::SqlitePool, task_id: &str) -> Result<db::Task, AppError> {
    db::tasks::find_by_id(pool, task_id)
        .await?
        .ok_or_else(|| AppError::not_found(TASK_NOT_FOUND))
}

/// Load task by id and verify it belongs to the project. Returns NotFound otherwise.
pub async fn load_project_task(
    pool: &sqlx::SqlitePool,
    project_id: &str,
    task_id: &str,
) -> Result<db::Task, AppError> {
    let task = load_task(pool, task_id).await?;
    if task.project_id != project_id {
        return Err(AppError::not_found(TASK_NOT_FOUND));
    }
    Ok(task)
}
