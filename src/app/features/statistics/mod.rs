//! Derived statistics: status timelines, per-task views and project aggregates.

mod api;
pub mod project;
pub mod task;
pub mod timeline;

pub use api::routes;
