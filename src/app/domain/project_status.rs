use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use validator::ValidationError;

/// Lifecycle status of a project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Created,
    OnTrack,
    AtRisk,
    OffTrack,
    OnHold,
    Completed,
}

/// Validator hook for request fields carrying a project status.
pub fn validate_project_status(value: &str) -> Result<(), ValidationError> {
    super::validation_helpers::must_be_any_of::<ProjectStatus>(value, "MUST_BE_ANY_OF_ProjectStatus")
}
