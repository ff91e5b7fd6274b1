mod create;
mod delete;
mod list;
mod members;
mod show;
mod tasks;
mod update;

pub mod helpers;
pub mod types;

use axum::Router;

use crate::app::AppState;

/// Project routes (CRUD, members, task listing).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(create::routes())
        .merge(list::routes())
        .merge(show::routes())
        .merge(update::routes())
        .merge(delete::routes())
        .merge(members::routes())
        .merge(tasks::routes())
}
