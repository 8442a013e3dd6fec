//! Request extractors that report failures in the API's own error shape.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use biteright_core::DashboardError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON body extractor.
///
/// Unlike `axum::Json` it does not require a `Content-Type` header, and its rejections are
/// `{error}` bodies: unparseable input or a body that is not a JSON object is
/// `Invalid JSON body`, while an object with a badly typed field is a validation error naming
/// that field.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::MalformedBody)?;
        parse_json(&bytes).map(JsonBody)
    }
}

pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| ApiError::MalformedBody)?;
    if !value.is_object() {
        return Err(ApiError::MalformedBody);
    }
    serde_json::from_value(value).map_err(|err| DashboardError::Validation(err.to_string()).into())
}

/// Path parameter extractor.
///
/// A segment that does not percent-decode into the expected type cannot name any resource,
/// so it is answered as an unknown route with a JSON `{error}` body.
pub struct PathParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParams(value)),
            Err(rejection) => {
                tracing::debug!("unusable path parameters: {}", rejection);
                Err(ApiError::RouteNotFound)
            }
        }
    }
}

/// Stage ids in paths are plain decimal digits; anything else is not a route.
pub fn parse_stage_id(raw: &str) -> Result<u32, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse().map_err(|_| ApiError::RouteNotFound)
}
