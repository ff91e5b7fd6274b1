//! Caller identity carried by the `Role` and `Username` headers.
//!
//! Every route sits behind [`require_identity_headers`]; handlers read the
//! identity through the [`Caller`] extractor.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::{
    domain::{Role, Username},
    error::{AppError, ROLE_HEADER_IS_MISSING, USERNAME_HEADER_IS_MISSING},
};

pub const ROLE_HEADER: &str = "role";
pub const USERNAME_HEADER: &str = "username";

/// Authenticated-by-convention caller of a request.
#[derive(Debug, Clone)]
pub struct Caller {
    pub username: Username,
    pub role: Role,
}

impl Caller {
    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Read the caller from request headers. Role is checked before Username.
pub fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, AppError> {
    let role = header_value(headers, ROLE_HEADER)
        .ok_or_else(|| AppError::bad_request(ROLE_HEADER_IS_MISSING))?;
    let username = header_value(headers, USERNAME_HEADER)
        .ok_or_else(|| AppError::bad_request(USERNAME_HEADER_IS_MISSING))?;
    let username =
        Username::new(username).map_err(|_| AppError::bad_request("USERNAME_HEADER_IS_INVALID"))?;

    Ok(Caller {
        username,
        role: Role::from_header(role),
    })
}

/// Middleware rejecting any request without both identity headers.
pub async fn require_identity_headers(request: Request, next: Next) -> Response {
    if let Err(err) = caller_from_headers(request.headers()) {
        tracing::debug!(method = %request.method(), uri = %request.uri(), ?err, "rejected request without identity headers");
        return err.into_response();
    }
    next.run(request).await
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        caller_from_headers(&parts.headers)
    }
}
