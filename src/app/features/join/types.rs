use serde::Serialize;

use crate::app::{config::Config, db, domain::JoinResponseStatus, links::Link};

/// Join request, pending or answered.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestResponse {
    pub id: String,
    pub project_id: String,
    pub username: String,
    pub requested_by: String,
    pub created_at: i64,
    pub status: Option<JoinResponseStatus>,
    pub responded_at: Option<i64>,
    pub links: Vec<Link>,
}

impl JoinRequestResponse {
    pub fn from_row(request: db::join_requests::JoinRequest, config: &Config) -> Self {
        let self_path = if request.response.is_some() {
            format!("/join/response/{}", request.id)
        } else {
            format!("/project/{}/join/requests", request.project_id)
        };
        let links = vec![
            Link::self_link(config, &self_path),
            Link::new(config, "project", &format!("/project/{}", request.project_id)),
        ];

        Self {
            id: request.id,
            project_id: request.project_id,
            username: request.username,
            requested_by: request.requested_by,
            created_at: request.created_at,
            status: request.response,
            responded_at: request.responded_at,
            links,
        }
    }
}
