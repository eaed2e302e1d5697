//! Request extractors whose rejections render as the JSON error envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use phonebook_core::validation::{check_content_type, parse_json_body, validate_person};
use phonebook_core::{ErrorDescriptor, MALFORMED_ID, MALFORMED_JSON, PersonInput};

use crate::api_error::ApiError;

/// A person payload that passed content-type, JSON and field-presence checks.
#[derive(Debug)]
pub struct PersonPayload(pub PersonInput);

impl<S> FromRequest<S> for PersonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type =
            req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);
        check_content_type(content_type.as_deref())?;

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "unreadable request body");
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ErrorDescriptor::payload_too_large()
            } else {
                ErrorDescriptor::bad_request(MALFORMED_JSON)
            }
        })?;
        let value = parse_json_body(&body)?;
        tracing::debug!(body = %value, "person payload");

        Ok(Self(validate_person(&value)?))
    }
}

/// The raw `{id}` path segment. Undecodable segments are malformed ids.
#[derive(Debug)]
pub struct PersonId(pub String);

impl<S> FromRequestParts<S> for PersonId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) =
            Path::<String>::from_request_parts(parts, state).await.map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "undecodable person id");
                ErrorDescriptor::bad_request(MALFORMED_ID)
            })?;
        Ok(Self(id))
    }
}
