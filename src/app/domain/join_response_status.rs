use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use validator::ValidationError;

/// Answer given by an invitee to a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinResponseStatus {
    Accepted,
    Declined,
}

pub fn validate_join_response_status(value: &str) -> Result<(), ValidationError> {
    super::validation_helpers::must_be_any_of::<JoinResponseStatus>(value, "MUST_BE_ANY_OF_JoinResponseStatus")
}
