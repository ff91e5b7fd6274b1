use serde_json::json;

mod common;

use crate::common::*;

#[tokio::test]
async fn empty_project_statistics_are_zeroed() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Empty", &[]).await;

    let (status, stats) = send(&app, "GET", &format!("/project/{}/statistics", id_of(&project)), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(stats["totalTasksCount"], 0);
    assert_eq!(stats["performancePercentage"], 0);
    assert_eq!(
        stats["totalTaskStatusDurationMap"],
        json!({ "TODO": 0, "IN_PROGRESS": 0, "RESOLVED": 0 })
    );
    assert_eq!(
        stats["totalTasksTypeCountMap"],
        json!({ "BUG": 0, "FEATURE": 0, "IMPROVEMENT": 0, "RESEARCH": 0 })
    );
    assert!(stats["username"].is_null());
}

#[tokio::test]
async fn task_statistics_follow_the_clock() {
    let (app, clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Clocked", &[]).await;
    let task = create_task(&app, "mlesniak", &id_of(&project), "BUG", 3_600).await;
    let task_id = id_of(&task);

    clock.advance(100);
    record_status(&app, "mlesniak", &task_id, "IN_PROGRESS").await;
    clock.advance(250);
    record_status(&app, "mlesniak", &task_id, "RESOLVED").await;
    clock.advance(50);

    let (status, stats) = send(&app, "GET", &format!("/task/{task_id}/statistics"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(stats["taskId"], task_id);
    assert_eq!(stats["taskType"], "BUG");
    assert_eq!(stats["currentStatus"], "RESOLVED");
    assert_eq!(stats["statusesCount"], 3);
    assert_eq!(stats["estimatedTime"], 3_600);
    assert_eq!(stats["totalExistenceTime"], 400);
    assert_eq!(
        stats["taskStatusDurationMap"],
        json!({ "TODO": 100, "IN_PROGRESS": 250, "RESOLVED": 50 })
    );

    // The ongoing interval keeps growing with the clock.
    clock.advance(10);
    let (_, stats) = send(&app, "GET", &format!("/task/{task_id}/statistics"), "mlesniak", None).await;
    assert_eq!(stats["taskStatusDurationMap"]["RESOLVED"], 60);
    assert_eq!(stats["totalExistenceTime"], 410);
}

#[tokio::test]
async fn project_statistics_aggregate_tasks() {
    let (app, clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Aggregate", &[]).await;
    let project_id = id_of(&project);

    let first = id_of(&create_task(&app, "mlesniak", &project_id, "BUG", 100).await);
    let second = id_of(&create_task(&app, "mlesniak", &project_id, "BUG", 200).await);
    let third = id_of(&create_task(&app, "mlesniak", &project_id, "FEATURE", 300).await);

    clock.advance(60);
    record_status(&app, "mlesniak", &first, "RESOLVED").await;
    record_status(&app, "mlesniak", &second, "IN_PROGRESS").await;
    clock.advance(40);

    let (status, stats) = send(&app, "GET", &format!("/project/{project_id}/statistics"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(stats["totalTasksCount"], 3);
    assert_eq!(stats["totalStatusesCount"], 5);
    assert_eq!(stats["totalEstimatedTime"], 600);
    assert_eq!(stats["totalExistenceTime"], 300);
    assert_eq!(stats["performancePercentage"], 33);
    assert_eq!(
        stats["totalTaskStatusDurationMap"],
        json!({ "TODO": 220, "IN_PROGRESS": 40, "RESOLVED": 40 })
    );
    assert_eq!(stats["totalTasksTypeCountMap"]["BUG"], 2);
    assert_eq!(stats["totalTasksTypeCountMap"]["FEATURE"], 1);

    let (status, per_task) = send(&app, "GET", &format!("/project/{project_id}/tasks/statistics"), "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(per_task.as_array().unwrap().len(), 3);
    assert!(per_task.as_array().unwrap().iter().any(|t| t["taskId"] == third));
}

#[tokio::test]
async fn member_filter_keeps_only_assigned_tasks() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Filtered", &[]).await;
    let project_id = id_of(&project);
    add_member(&app, "mlesniak", &project_id, "frneek").await;

    let assigned = id_of(&create_task(&app, "mlesniak", &project_id, "RESEARCH", 100).await);
    create_task(&app, "mlesniak", &project_id, "BUG", 200).await;

    send(&app, "POST", &format!("/task/{assigned}/members/assign"), "frneek", None).await;
    record_status(&app, "frneek", &assigned, "RESOLVED").await;

    let (status, stats) = send(
        &app,
        "GET",
        &format!("/project/{project_id}/statistics?username=frneek"),
        "mlesniak",
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(stats["username"], "frneek");
    assert_eq!(stats["totalTasksCount"], 1);
    assert_eq!(stats["totalEstimatedTime"], 100);
    assert_eq!(stats["performancePercentage"], 100);
    assert_eq!(stats["totalTasksTypeCountMap"]["RESEARCH"], 1);
    assert_eq!(stats["totalTasksTypeCountMap"]["BUG"], 0);
}

#[tokio::test]
async fn member_filter_fails_for_unknown_or_outside_members() {
    let (app, _clock) = test_app().await;
    let project = create_project(&app, "mlesniak", "Strict", &[]).await;
    let project_id = id_of(&project);
    create_project(&app, "outsider", "Theirs", &[]).await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/project/{project_id}/statistics?username=ghost"),
        "mlesniak",
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "MEMBER_NOT_FOUND");

    let (status, body) = send(
        &app,
        "GET",
        &format!("/project/{project_id}/statistics?username=outsider"),
        "mlesniak",
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        format!("MEMBER_WITH_USERNAME_outsider_IS_NOT_ASSIGNED_TO_PROJECT_WITH_ID_{project_id}")
    );
}

#[tokio::test]
async fn statistics_of_unknown_resources_are_not_found() {
    let (app, _clock) = test_app().await;

    let (status, body) = send(&app, "GET", "/project/01ARZ3NDEKTSV4RRFFQ69G5FAV/statistics", "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "PROJECT_NOT_FOUND");

    let (status, body) = send(&app, "GET", "/task/01ARZ3NDEKTSV4RRFFQ69G5FAV/statistics", "mlesniak", None).await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "TASK_NOT_FOUND");
}
