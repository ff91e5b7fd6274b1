use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

/// Human-readable application name, used in logs.
pub const APP_NAME: &str = "Kanwise";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: config::Config,
    pub clock: Arc<dyn clock::Clock>,
}

/// All API routes, merged with the identity guard in lib.rs.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(features::projects::routes())
        .merge(features::tasks::routes())
        .merge(features::join::routes())
        .merge(features::statistics::routes())
        .merge(features::reports::routes())
}

pub mod caller;
pub mod clock;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extract;
pub mod features;
pub mod links;
