use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use validator::ValidationError;

/// Label of a task status interval. `Resolved` is terminal for statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatusLabel {
    Todo,
    InProgress,
    Resolved,
}

impl TaskStatusLabel {
    pub fn is_resolved(self) -> bool {
        self == TaskStatusLabel::Resolved
    }
}

pub fn validate_task_status_label(value: &str) -> Result<(), ValidationError> {
    super::validation_helpers::must_be_any_of::<TaskStatusLabel>(value, "MUST_BE_ANY_OF_TaskStatusLabel")
}
