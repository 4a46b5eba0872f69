//! JSON body extractor with a uniform rejection.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use common::AppError;

/// JSON extractor that turns every decode failure (bad syntax, wrong field
/// types, unparsable values) into `InvalidRequestBody`.
///
/// The `Content-Type` header is not consulted; the body is decoded as JSON
/// whatever the client declared.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(reason = %e, "Failed to read request body");
            AppError::InvalidRequestBody
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(reason = %e, "Rejected request body");
            AppError::InvalidRequestBody
        })?;

        Ok(JsonBody(value))
    }
}
