use serde::Serialize;

use crate::app::{
    config::Config,
    db,
    domain::{Sorting, TaskPriority, TaskStatusLabel, TaskType},
    links::Link,
};

/// Sortable fields of task lists.
pub const TASK_SORTING: Sorting = Sorting {
    default: "createdAt",
    fields: &[
        ("createdAt", "t.created_at"),
        ("updatedAt", "t.updated_at"),
        ("title", "t.title"),
        (
            "priority",
            "CASE t.priority WHEN 'LOW' THEN 0 WHEN 'MEDIUM' THEN 1 WHEN 'HIGH' THEN 2 ELSE 3 END",
        ),
        ("type", "t.task_type"),
        ("estimatedTime", "t.estimated_seconds"),
    ],
};

/// Sortable fields of comment lists.
pub const COMMENT_SORTING: Sorting = Sorting {
    default: "createdAt",
    fields: &[("createdAt", "c.created_at")],
};

/// Path parameters for `/project/:id/task/:task_id/...`.
#[derive(Debug, serde::Deserialize)]
pub struct ProjectTaskPathParams {
    pub id: String,
    pub task_id: String,
}

/// Task as returned by every task endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub project_id: String,
    pub author_username: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub estimated_time: i64,
    pub current_status: Option<TaskStatusLabel>,
    pub assigned_members_count: i64,
    pub comments_count: i64,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub links: Vec<Link>,
}

impl TaskResponse {
    pub fn from_row(task: db::Task, config: &Config) -> Self {
        let base = format!("/task/{}", task.id);
        let links = vec![
            Link::self_link(config, &base),
            Link::new(config, "project", &format!("/project/{}", task.project_id)),
            Link::new(config, "members", &format!("{base}/members")),
            Link::new(config, "statuses", &format!("{base}/statuses")),
            Link::new(config, "comments", &format!("{base}/comments")),
            Link::new(config, "statistics", &format!("{base}/statistics")),
        ];

        Self {
            id: task.id,
            project_id: task.project_id,
            author_username: task.author_username,
            title: task.title,
            description: task.description,
            priority: task.priority,
            task_type: task.task_type,
            estimated_time: task.estimated_seconds,
            current_status: task.current_status,
            assigned_members_count: task.assigned_members_count,
            comments_count: task.comments_count,
            created_at: task.created_at,
            updated_at: task.updated_at,
            links,
        }
    }
}

/// One recorded status interval.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusIntervalResponse {
    pub id: String,
    pub task_id: String,
    pub label: TaskStatusLabel,
    pub set_at: i64,
    pub set_till: Option<i64>,
    pub set_by: String,
    pub links: Vec<Link>,
}

impl StatusIntervalResponse {
    pub fn from_row(interval: db::StatusInterval, config: &Config) -> Self {
        let links = vec![Link::new(config, "task", &format!("/task/{}", interval.task_id))];
        Self {
            id: interval.id,
            task_id: interval.task_id,
            label: interval.label,
            set_at: interval.set_at,
            set_till: interval.set_till,
            set_by: interval.set_by,
            links,
        }
    }
}

/// Comment with reaction tallies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub task_id: String,
    pub author_username: String,
    pub content: String,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub created_at: i64,
    pub links: Vec<Link>,
}

impl CommentResponse {
    pub fn from_row(comment: db::comments::Comment, config: &Config) -> Self {
        let links = vec![
            Link::new(config, "task", &format!("/task/{}", comment.task_id)),
            Link::new(config, "comments", &format!("/task/{}/comments", comment.task_id)),
        ];
        Self {
            id: comment.id,
            task_id: comment.task_id,
            author_username: comment.author_username,
            content: comment.content,
            likes_count: comment.likes_count,
            dislikes_count: comment.dislikes_count,
            created_at: comment.created_at,
            links,
        }
    }
}
