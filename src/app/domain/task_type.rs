use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use validator::ValidationError;

/// Kind of work a task represents. Counted per project in statistics.
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
pub enum TaskType {
    Bug,
    Feature,
    Improvement,
    Research,
}

pub fn validate_task_type(value: &str) -> Result<(), ValidationError> {
    super::validation_helpers::must_be_any_of::<TaskType>(value, "MUST_BE_ANY_OF_TaskType")
}
