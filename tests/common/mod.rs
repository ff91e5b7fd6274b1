#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use kanwise::app::clock::FixedClock;
use kanwise::create_router;
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;

/// Unix time every test starts at.
pub const T0: i64 = 1_700_000_000;

/// One connection only: every `sqlite::memory:` connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_router(pool: SqlitePool) -> (axum::Router, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(T0));
    let state = kanwise::app::AppState {
        db: pool,
        config: kanwise::app::config::Config::for_tests(),
        clock: clock.clone(),
    };
    (create_router(state), clock)
}

pub async fn test_app() -> (axum::Router, Arc<FixedClock>) {
    test_router(test_pool().await)
}

/// Send a request as `username` with the USER role.
pub async fn send(app: &axum::Router, method: &str, uri: &str, username: &str, body: Option<Value>) -> (http::StatusCode, Value) {
    send_as(app, method, uri, "USER", username, body).await
}

pub async fn send_as(
    app: &axum::Router,
    method: &str,
    uri: &str,
    role: &str,
    username: &str,
    body: Option<Value>,
) -> (http::StatusCode, Value) {
    let builder = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Role", role)
        .header("Username", username);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    read(app.clone().oneshot(request).await.unwrap()).await
}

pub async fn read(response: axum::response::Response) -> (http::StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn create_project(app: &axum::Router, author: &str, title: &str, invitees: &[&str]) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/project",
        author,
        Some(json!({ "title": title, "description": "d", "membersUsernames": invitees })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED, "create project failed: {body}");
    body
}

pub async fn add_member(app: &axum::Router, actor: &str, project_id: &str, username: &str) {
    let (status, body) = send(
        app,
        "POST",
        &format!("/project/{project_id}/members"),
        actor,
        Some(json!({ "username": username })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED, "add member failed: {body}");
}

pub async fn create_task(app: &axum::Router, author: &str, project_id: &str, task_type: &str, estimated: i64) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/task",
        author,
        Some(json!({
            "projectId": project_id,
            "title": "Write the importer",
            "description": "CSV first",
            "priority": "HIGH",
            "type": task_type,
            "estimatedTime": estimated,
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED, "create task failed: {body}");
    body
}

pub async fn record_status(app: &axum::Router, actor: &str, task_id: &str, label: &str) -> (http::StatusCode, Value) {
    send(
        app,
        "POST",
        "/task/status",
        actor,
        Some(json!({ "taskId": task_id, "label": label })),
    )
    .await
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().unwrap().to_string()
}
