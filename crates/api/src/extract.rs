//! Request extractors that run declarative validation before a handler
//! sees the input.
//!
//! Validation failures short-circuit with 422 and a structured
//! `{ "errors": [ { field: message } ] }` body; the handler (and thus the
//! repository layer) is never invoked.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that validates the deserialized value.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|err| AppError::Malformed {
                location: "body",
                message: err.body_text(),
            })?;
        value.validate().map_err(AppError::Validation)?;
        Ok(Self(value))
    }
}

/// Query-string extractor that validates the deserialized parameters.
///
/// Unknown query keys are ignored by serde, per the list-endpoint contract.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) =
            Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|err| AppError::Malformed {
                    location: "query",
                    message: err.body_text(),
                })?;
        value.validate().map_err(AppError::Validation)?;
        Ok(Self(value))
    }
}

/// Path extractor whose format failures (e.g. a malformed UUID) produce
/// the same 422 error shape as the other validation failures.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) =
            Path::<T>::from_request_parts(parts, state)
                .await
                .map_err(|err| AppError::Malformed {
                    location: "path",
                    message: err.body_text(),
                })?;
        Ok(Self(value))
    }
}
