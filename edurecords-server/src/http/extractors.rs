//! Custom Axum extractors
//!
//! Each one turns axum's default rejection into `ApiError::Validation`, so
//! a bad id, body or query string answers 400 with the usual JSON error shape.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{RecordId, ValidationError};

/// Extract and validate a record id from path
pub struct ValidRecordId(pub RecordId);

impl<S> FromRequestParts<S> for ValidRecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        Ok(Self(id.parse()?))
    }
}

/// JSON body whose decode failures are reported as invalid arguments
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedRequest {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

/// Query string whose decode failures are reported as invalid arguments
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::MalformedRequest {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
