mod requests;
mod responses;
mod types;

use axum::Router;

use crate::app::AppState;

/// Join request and response routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(requests::routes())
        .merge(responses::routes())
}
