//! Body and query extractors that turn rejections into [`AppError`]s.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::app::{
    domain::validation_helpers::violations_from,
    error::{AppError, MALFORMED_QUERY, MALFORMED_REQUEST_BODY},
};

/// JSON body that has been deserialized and validated.
/// Validation failures become the `[{field, message}]` list.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "malformed request body");
            AppError::bad_request(MALFORMED_REQUEST_BODY)
        })?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(violations_from(&errors)))?;

        Ok(ValidJson(value))
    }
}

/// Query string extractor reporting failures with the common error body.
#[derive(Debug)]
pub struct AppQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "malformed query string");
                AppError::bad_request(MALFORMED_QUERY)
            })?;
        Ok(AppQuery(value))
    }
}
