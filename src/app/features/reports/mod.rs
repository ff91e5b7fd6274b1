mod reports;
mod subscribers;
mod types;

use axum::Router;

use crate::app::AppState;

/// Subscriber management and the reports built for subscribers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(subscribers::routes())
        .merge(reports::routes())
}
