mod comments;
mod create;
mod delete;
mod list;
mod members;
mod reactions;
mod show;
mod statuses;
mod update;

pub mod helpers;
pub mod types;

use axum::Router;

use crate::app::AppState;

/// Task routes (CRUD, members, statuses, comments, reactions).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(create::routes())
        .merge(list::routes())
        .merge(show::routes())
        .merge(update::routes())
        .merge(delete::routes())
        .merge(members::routes())
        .merge(statuses::routes())
        .merge(comments::routes())
        .merge(reactions::routes())
}
