use serde::Serialize;

use crate::app::{
    config::Config,
    db::subscribers::Subscriber,
    domain::Sorting,
    features::statistics::project::ProjectStatistics,
    links::Link,
};

/// Sortable fields of the subscriber list.
pub const SUBSCRIBER_SORTING: Sorting = Sorting {
    default: "createdAt",
    fields: &[
        ("createdAt", "created_at"),
        ("updatedAt", "updated_at"),
        ("username", "username"),
        ("email", "email"),
    ],
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberResponse {
    pub username: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub links: Vec<Link>,
}

impl SubscriberResponse {
    pub fn from_row(subscriber: Subscriber, config: &Config) -> Self {
        let base = format!("/subscriber/{}", subscriber.username);
        let links = vec![
            Link::self_link(config, &base),
            Link::new(config, "personalReport", &format!("{base}/reports/personal")),
            Link::new(config, "projectReport", &format!("{base}/reports/project")),
        ];
        Self {
            username: subscriber.username,
            email: subscriber.email,
            created_at: subscriber.created_at,
            updated_at: subscriber.updated_at,
            links,
        }
    }
}

/// One report: the statistics of every project the subscriber belongs to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub username: String,
    pub email: String,
    pub generated_at: i64,
    pub projects: Vec<ProjectStatistics>,
    pub links: Vec<Link>,
}
