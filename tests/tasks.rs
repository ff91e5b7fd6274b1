use serde_json::json;

mod common;

use crate::common::*;

async fn project_with_member(app: &axum::Router) -> String {
    let project = create_project(app, "mlesniak", "Board", &[]).await;
    let project_id = id_of(&project);
    add_member(app, "mlesniak", &project_id, "frneek").await;
    project_id
}

#[tokio::test]
async fn new_task_starts_with_one_ongoing_todo_interval() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;

    let task = create_task(&app, "mlesniak", &project_id, "FEATURE", 7_200).await;
    assert_eq!(task["type"], "FEATURE");
    assert_eq!(task["priority"], "HIGH");
    assert_eq!(task["estimatedTime"], 7_200);
    assert_eq!(task["currentStatus"], "TODO");
    assert_eq!(task["createdAt"], T0);

    let (status, statuses) = send(&app, "GET", &format!("/task/{}/statuses", id_of(&task)), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    let statuses = statuses.as_array().unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0]["label"], "TODO");
    assert_eq!(statuses[0]["setAt"], T0);
    assert!(statuses[0]["setTill"].is_null());
}

#[tokio::test]
async fn create_task_validates_enums_and_range() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/task",
        "mlesniak",
        Some(json!({
            "projectId": project_id,
            "title": "t",
            "description": "d",
            "priority": "URGENT",
            "type": "CHORE",
            "estimatedTime": -1,
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!([
            { "field": "estimatedTime", "message": "ESTIMATED_TIME_OUT_OF_RANGE" },
            { "field": "priority", "message": "MUST_BE_ANY_OF_TaskPriority" },
            { "field": "type", "message": "MUST_BE_ANY_OF_TaskType" },
        ])
    );
}

#[tokio::test]
async fn outsiders_cannot_create_tasks() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/task",
        "stranger",
        Some(json!({
            "projectId": project_id,
            "title": "t",
            "description": "d",
            "priority": "LOW",
            "type": "BUG",
            "estimatedTime": 0,
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::FORBIDDEN);
    assert!(body["message"].as_str().unwrap().starts_with("MEMBER_WITH_USERNAME_stranger"));
}

#[tokio::test]
async fn recording_a_status_closes_the_previous_interval() {
    let (app, clock) = test_app().await;
    let project_id = project_with_member(&app).await;
    let task = create_task(&app, "mlesniak", &project_id, "BUG", 60).await;
    let task_id = id_of(&task);

    clock.advance(300);
    let (status, recorded) = record_status(&app, "frneek", &task_id, "IN_PROGRESS").await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(recorded["label"], "IN_PROGRESS");
    assert_eq!(recorded["setAt"], T0 + 300);
    assert_eq!(recorded["setBy"], "frneek");

    let (_, statuses) = send(&app, "GET", &format!("/task/{task_id}/statuses"), "mlesniak", None).await;
    let statuses = statuses.as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0]["setTill"], T0 + 300);
    assert!(statuses[1]["setTill"].is_null());

    let (_, task) = send(&app, "GET", &format!("/task/{task_id}"), "mlesniak", None).await;
    assert_eq!(task["currentStatus"], "IN_PROGRESS");
}

#[tokio::test]
async fn recording_the_current_status_again_fails() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;
    let task = create_task(&app, "mlesniak", &project_id, "BUG", 60).await;
    let task_id = id_of(&task);

    let (status, body) = record_status(&app, "mlesniak", &task_id, "TODO").await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], format!("TASK_WITH_ID_{task_id}_ALREADY_HAS_STATUS_TODO"));

    let (status, body) = record_status(&app, "mlesniak", &task_id, "DONE").await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(body[0]["message"], "MUST_BE_ANY_OF_TaskStatusLabel");
}

#[tokio::test]
async fn assigning_members_to_a_task() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;
    let task = create_task(&app, "mlesniak", &project_id, "RESEARCH", 60).await;
    let task_id = id_of(&task);
    let uri = format!("/project/{project_id}/task/{task_id}/members");

    let (status, members) = send(&app, "POST", &uri, "mlesniak", Some(json!({ "username": "frneek" }))).await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(members[0]["username"], "frneek");
    assert_eq!(members[0]["tasksCount"], 1);

    let (status, body) = send(&app, "POST", &uri, "mlesniak", Some(json!({ "username": "frneek" }))).await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("MEMBER_WITH_USERNAME_frneek_IS_ALREADY_ASSIGNED_TO_TASK_WITH_ID_{task_id}")
    );

    let (status, body) = send(&app, "POST", &uri, "mlesniak", Some(json!({ "username": "outsider" }))).await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("MEMBER_WITH_USERNAME_outsider_IS_NOT_ASSIGNED_TO_PROJECT_WITH_ID_{project_id}")
    );

    let (status, members) = send(&app, "POST", &format!("/task/{task_id}/members/assign"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(members.as_array().unwrap().len(), 2);

    let (_, task) = send(&app, "GET", &format!("/task/{task_id}"), "mlesniak", None).await;
    assert_eq!(task["assignedMembersCount"], 2);
}

#[tokio::test]
async fn comments_and_reactions() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;
    let task = create_task(&app, "mlesniak", &project_id, "IMPROVEMENT", 60).await;
    let task_id = id_of(&task);

    let (status, comment) = send(
        &app,
        "POST",
        "/task/comment",
        "frneek",
        Some(json!({ "taskId": task_id, "content": "Looks good" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(comment["authorUsername"], "frneek");
    let comment_id = id_of(&comment);

    let react = |username: &'static str, reaction: &'static str| {
        let app = app.clone();
        let comment_id = comment_id.clone();
        async move {
            send(
                &app,
                "POST",
                "/task/comment/reaction",
                username,
                Some(json!({ "commentId": comment_id, "reaction": reaction })),
            )
            .await
        }
    };

    let (status, reacted) = react("mlesniak", "LIKE").await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(reacted["likesCount"], 1);

    let (_, reacted) = react("frneek", "LIKE").await;
    assert_eq!(reacted["likesCount"], 2);

    // Second reaction of the same member replaces the first.
    let (_, reacted) = react("mlesniak", "DISLIKE").await;
    assert_eq!(reacted["likesCount"], 1);
    assert_eq!(reacted["dislikesCount"], 1);

    let (status, page) = send(&app, "GET", &format!("/task/{task_id}/comments"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["content"], "Looks good");
    assert_eq!(page["content"][0]["dislikesCount"], 1);

    let (_, task) = send(&app, "GET", &format!("/task/{task_id}"), "mlesniak", None).await;
    assert_eq!(task["commentsCount"], 1);
}

#[tokio::test]
async fn reacting_to_unknown_comment_is_not_found() {
    let (app, _clock) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/task/comment/reaction",
        "mlesniak",
        Some(json!({ "commentId": "01ARZ3NDEKTSV4RRFFQ69G5FAV", "reaction": "LIKE" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "COMMENT_NOT_FOUND");
}

#[tokio::test]
async fn update_and_delete_task() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;
    let task = create_task(&app, "mlesniak", &project_id, "BUG", 60).await;
    let uri = format!("/task/{}", id_of(&task));

    let (status, patched) = send(&app, "PATCH", &uri, "frneek", Some(json!({ "priority": "CRITICAL" }))).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(patched["priority"], "CRITICAL");
    assert_eq!(patched["type"], "BUG");
    assert_eq!(patched["estimatedTime"], 60);

    let (status, _) = send(&app, "DELETE", &uri, "frneek", None).await;
    assert_eq!(status, http::StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &uri, "frneek", None).await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "TASK_NOT_FOUND");

    let (_, project) = send(&app, "GET", &format!("/project/{project_id}"), "frneek", None).await;
    assert_eq!(project["tasksCount"], 0);
}

#[tokio::test]
async fn task_lists_are_paged() {
    let (app, _clock) = test_app().await;
    let project_id = project_with_member(&app).await;
    for _ in 0..3 {
        create_task(&app, "mlesniak", &project_id, "BUG", 60).await;
    }
    create_project(&app, "stranger", "Elsewhere", &[]).await;

    let (status, page) = send(&app, "GET", &format!("/project/{project_id}/tasks?pageSize=2"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["content"].as_array().unwrap().len(), 2);

    let (_, mine) = send(&app, "GET", "/task?sortBy=priority&sortDirection=DESC", "frneek", None).await;
    assert_eq!(mine["totalElements"], 3);

    let (_, theirs) = send(&app, "GET", "/task", "stranger", None).await;
    assert_eq!(theirs["totalElements"], 0);
}
