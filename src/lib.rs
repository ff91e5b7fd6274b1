pub mod app;

use axum::{middleware, Router};

/// Build the full application router. Used by main and by integration tests.
pub fn create_router(state: app::AppState) -> Router {
    Router::new()
        .merge(app::routes())
        .fallback(fallback)
        .layer(middleware::from_fn(app::caller::require_identity_headers))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> app::error::AppError {
    app::error::AppError::not_found("RESOURCE_NOT_FOUND")
}
