use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use validator::ValidationError;

/// Reaction a member leaves on a task comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reaction {
    Like,
    Dislike,
}

pub fn validate_reaction(value: &str) -> Result<(), ValidationError> {
    super::validation_helpers::must_be_any_of::<Reaction>(value, "MUST_BE_ANY_OF_Reaction")
}
