use crate::app::{
    caller::Caller,
    db,
    error::{AppError, PROJECT_NOT_FOUND},
};

/// Load project by id. Returns NotFound if it doesn't exist.
pub async fn load_project(pool: &sqlx::SqlitePool, project_id: &str) -> Result<db::Project, AppError> {
    db::projects::find_by_id(pool, project_id)
        .await?
        .ok_or_else(|| AppError::not_found(PROJECT_NOT_FOUND))
}

/// Ensure the caller belongs to the project (admins always pass).
pub async fn require_project_member(
    pool: &sqlx::SqlitePool,
    project_id: &str,
    caller: &Caller,
) -> Result<(), AppError> {
    if caller.role.is_admin() {
        return Ok(());
    }
    if db::project_members::is_member(pool, project_id, caller.username()).await? {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "MEMBER_WITH_USERNAME_{}_IS_NOT_ASSIGNED_TO_PROJECT_WITH_ID_{}",
        caller.username(),
        project_id
    )))
}
