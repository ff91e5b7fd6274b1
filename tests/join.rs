use serde_json::json;

mod common;

use crate::common::*;

async fn pending_requests(app: &axum::Router, project_id: &str) -> Vec<serde_json::Value> {
    let (status, body) = send(app, "GET", &format!("/project/{project_id}/join/requests"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn project_creation_invites_listed_members() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Invites", &["frneek", "mlesniak", "ola"]).await;

    let pending = pending_requests(&app, &id_of(&project)).await;
    let invitees: Vec<&str> = pending.iter().map(|r| r["username"].as_str().unwrap()).collect();
    assert_eq!(invitees.len(), 2);
    assert!(invitees.contains(&"frneek"));
    assert!(invitees.contains(&"ola"));
    assert!(pending.iter().all(|r| r["status"].is_null()));
    assert!(pending.iter().all(|r| r["requestedBy"] == "mlesniak"));
}

#[tokio::test]
async fn accepting_adds_the_invitee() {
    let (app, clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Welcome", &["frneek"]).await;
    let project_id = id_of(&project);
    let request_id = pending_requests(&app, &project_id).await[0]["id"].as_str().unwrap().to_string();

    clock.advance(30);
    let (status, answered) = send(
        &app,
        "POST",
        "/join/response",
        "frneek",
        Some(json!({ "joinRequestId": request_id, "status": "ACCEPTED" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(answered["status"], "ACCEPTED");
    assert_eq!(answered["respondedAt"], T0 + 30);

    let (_, members) = send(&app, "GET", &format!("/project/{project_id}/members"), "mlesniak", None).await;
    assert_eq!(members.as_array().unwrap().len(), 2);

    assert!(pending_requests(&app, &project_id).await.is_empty());
    let (_, responses) = send(&app, "GET", &format!("/project/{project_id}/join/responses"), "mlesniak", None).await;
    assert_eq!(responses[0]["id"], request_id);

    let (status, shown) = send(&app, "GET", &format!("/join/response/{request_id}"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(shown["status"], "ACCEPTED");
}

#[tokio::test]
async fn declining_leaves_membership_unchanged() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Declined", &["frneek"]).await;
    let project_id = id_of(&project);
    let request_id = pending_requests(&app, &project_id).await[0]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/join/response",
        "frneek",
        Some(json!({ "joinRequestId": request_id, "status": "DECLINED" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED);

    let (_, fetched) = send(&app, "GET", &format!("/project/{project_id}"), "mlesniak", None).await;
    assert_eq!(fetched["membersCount"], 1);
}

#[tokio::test]
async fn answering_twice_fails() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Once", &["frneek"]).await;
    let request_id = pending_requests(&app, &id_of(&project)).await[0]["id"].as_str().unwrap().to_string();
    let body = json!({ "joinRequestId": request_id, "status": "ACCEPTED" });

    let (status, _) = send(&app, "POST", "/join/response", "frneek", Some(body.clone())).await;
    assert_eq!(status, http::StatusCode::CREATED);

    let (status, error) = send(&app, "POST", "/join/response", "frneek", Some(body)).await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "JOIN_REQUEST_ALREADY_RESPONDED");
}

#[tokio::test]
async fn only_the_invitee_may_answer() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Private", &["frneek"]).await;
    let request_id = pending_requests(&app, &id_of(&project)).await[0]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/join/response",
        "mlesniak",
        Some(json!({ "joinRequestId": request_id, "status": "ACCEPTED" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        "POST",
        "/join/response",
        "frneek",
        Some(json!({ "joinRequestId": request_id, "status": "MAYBE" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(body[0]["message"], "MUST_BE_ANY_OF_JoinResponseStatus");
}

#[tokio::test]
async fn inviting_through_join_request() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Direct", &[]).await;
    let project_id = id_of(&project);

    let invite = json!({ "projectId": project_id, "username": "frneek" });
    let (status, created) = send(&app, "POST", "/join/request", "mlesniak", Some(invite.clone())).await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(created["username"], "frneek");

    let (status, _) = send(&app, "POST", "/join/request", "mlesniak", Some(invite)).await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/join/request",
        "mlesniak",
        Some(json!({ "projectId": project_id, "username": "mlesniak" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("MEMBER_WITH_USERNAME_mlesniak_IS_ALREADY_ASSIGNED_TO_PROJECT_WITH_ID_{project_id}")
    );

    let (status, _) = send(
        &app,
        "POST",
        "/join/request",
        "stranger",
        Some(json!({ "projectId": project_id, "username": "ola" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_join_request_is_not_found() {
    let (app, _clock) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/join/response",
        "frneek",
        Some(json!({ "joinRequestId": "01ARZ3NDEKTSV4RRFFQ69G5FAV", "status": "ACCEPTED" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "JOIN_REQUEST_NOT_FOUND");
}
