use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use validator::ValidationError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

pub fn validate_task_priority(value: &str) -> Result<(), ValidationError> {
    super::validation_helpers::must_be_any_of::<TaskPriority>(value, "MUST_BE_ANY_OF_TaskPriority")
}
