use serde::Serialize;

use crate::app::{
    config::Config,
    db,
    domain::{ProjectStatus, Sorting},
    links::Link,
};

/// Sortable fields of the project list.
pub const PROJECT_SORTING: Sorting = Sorting {
    default: "createdAt",
    fields: &[
        ("createdAt", "p.created_at"),
        ("updatedAt", "p.updated_at"),
        ("title", "p.title"),
        ("status", "p.status"),
    ],
};

/// Path parameters for endpoints addressing one member of a project.
#[derive(Debug, serde::Deserialize)]
pub struct ProjectMemberPathParams {
    pub id: String,
    pub username: String,
}

/// Project as returned by every project endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub author_username: String,
    pub members_count: i64,
    pub tasks_count: i64,
    pub join_requests_count: i64,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub links: Vec<Link>,
}

impl ProjectResponse {
    pub fn from_row(project: db::Project, config: &Config) -> Self {
        let base = format!("/project/{}", project.id);
        let links = vec![
            Link::self_link(config, &base),
            Link::new(config, "members", &format!("{base}/members")),
            Link::new(config, "tasks", &format!("{base}/tasks")),
            Link::new(config, "statistics", &format!("{base}/statistics")),
            Link::new(config, "joinRequests", &format!("{base}/join/requests")),
        ];

        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            status: project.status,
            author_username: project.author_username,
            members_count: project.members_count,
            tasks_count: project.tasks_count,
            join_requests_count: project.join_requests_count,
            created_at: project.created_at,
            updated_at: project.updated_at,
            links,
        }
    }
}

/// Member of a project or task with participation counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub username: String,
    pub projects_count: i64,
    pub tasks_count: i64,
    pub links: Vec<Link>,
}

impl MemberResponse {
    /// `statistics_of` is the project whose statistics the member link filters.
    pub fn from_row(member: db::MemberWithCounts, statistics_of: &str, config: &Config) -> Self {
        let links = vec![Link::new(
            config,
            "statistics",
            &format!("/project/{}/statistics?username={}", statistics_of, member.username),
        )];
        Self {
            username: member.username,
            projects_count: member.projects_count,
            tasks_count: member.tasks_count,
            links,
        }
    }
}
