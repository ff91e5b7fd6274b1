use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub const ROLE_HEADER_IS_MISSING: &str = "ROLE_HEADER_IS_MISSING";
pub const USERNAME_HEADER_IS_MISSING: &str = "USERNAME_HEADER_IS_MISSING";
pub const PROJECT_NOT_FOUND: &str = "PROJECT_NOT_FOUND";
pub const TASK_NOT_FOUND: &str = "TASK_NOT_FOUND";
pub const MEMBER_NOT_FOUND: &str = "MEMBER_NOT_FOUND";
pub const COMMENT_NOT_FOUND: &str = "COMMENT_NOT_FOUND";
pub const JOIN_REQUEST_NOT_FOUND: &str = "JOIN_REQUEST_NOT_FOUND";
pub const SUBSCRIBER_NOT_FOUND: &str = "SUBSCRIBER_NOT_FOUND";
pub const JOIN_REQUEST_ALREADY_RESPONDED: &str = "JOIN_REQUEST_ALREADY_RESPONDED";
pub const MALFORMED_REQUEST_BODY: &str = "MALFORMED_REQUEST_BODY";
pub const MALFORMED_QUERY: &str = "MALFORMED_QUERY";

/// One violated constraint of a command object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Body used for every non-validation error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub timestamp: String,
    pub http_status_code: u16,
    pub http_status: String,
    pub message: String,
}

/// Application error type for unified error handling across the app.
#[derive(Debug)]
pub enum AppError {
    /// Field-level validation errors (400) - body is the violation list
    Validation(Vec<FieldViolation>),

    /// Business-rule conflicts and malformed input (400)
    BadRequest(String),

    /// Unknown entity (404)
    NotFound(String),

    /// Caller may not perform the operation (403)
    Forbidden(String),

    /// Database errors (500 Internal Server Error)
    Database(SqlxError),

    /// Generic internal errors (500 Internal Server Error)
    Internal,
}

impl AppError {
    pub fn not_found(code: &str) -> Self {
        AppError::NotFound(code.to_string())
    }

    pub fn bad_request(code: &str) -> Self {
        AppError::BadRequest(code.to_string())
    }

    pub fn already_project_member(username: &str, project_id: &str) -> Self {
        AppError::BadRequest(format!(
            "MEMBER_WITH_USERNAME_{username}_IS_ALREADY_ASSIGNED_TO_PROJECT_WITH_ID_{project_id}"
        ))
    }

    pub fn not_project_member(username: &str, project_id: &str) -> Self {
        AppError::BadRequest(format!(
            "MEMBER_WITH_USERNAME_{username}_IS_NOT_ASSIGNED_TO_PROJECT_WITH_ID_{project_id}"
        ))
    }

    pub fn already_task_member(username: &str, task_id: &str) -> Self {
        AppError::BadRequest(format!(
            "MEMBER_WITH_USERNAME_{username}_IS_ALREADY_ASSIGNED_TO_TASK_WITH_ID_{task_id}"
        ))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Database(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

/// Build the fixed error body for a status and message code.
pub fn error_body(status: StatusCode, message: impl Into<String>) -> ErrorBody {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    let http_status = status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_uppercase()
        .replace(' ', "_");

    ErrorBody {
        timestamp,
        http_status_code: status.as_u16(),
        http_status,
        message: message.into(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Validation(violations) => {
                return (status, Json(violations)).into_response();
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Forbidden(msg) => msg,
            AppError::Database(err) => {
                tracing::error!(%err, "database error");
                "INTERNAL_SERVER_ERROR".to_string()
            }
            AppError::Internal => "INTERNAL_SERVER_ERROR".to_string(),
        };

        (status, Json(error_body(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_names_the_status() {
        let body = error_body(StatusCode::NOT_FOUND, PROJECT_NOT_FOUND);
        assert_eq!(body.http_status_code, 404);
        assert_eq!(body.http_status, "NOT_FOUND");
        assert_eq!(body.message, "PROJECT_NOT_FOUND");
        assert!(!body.timestamp.is_empty());
    }

    #[test]
    fn conflict_codes_embed_identifiers() {
        let AppError::BadRequest(msg) = AppError::already_project_member("frneek", "01ABC") else {
            panic!("expected bad request");
        };
        assert_eq!(
            msg,
            "MEMBER_WITH_USERNAME_frneek_IS_ALREADY_ASSIGNED_TO_PROJECT_WITH_ID_01ABC"
        );
    }

    #[test]
    fn status_codes_by_category() {
        assert_eq!(AppError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found(TASK_NOT_FOUND).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Forbidden("NOPE".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
