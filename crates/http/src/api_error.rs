//! Typed API error for HTTP handlers.
//!
//! The single point where failures become HTTP responses. Handlers return
//! `Result<Json<T>, ApiError>`; client errors carry an `ErrorDescriptor`,
//! not-found is an empty 404 and everything else is an opaque 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use phonebook_core::ErrorDescriptor;
use phonebook_service::ServiceError;

use crate::response_types::ErrorEnvelope;

#[derive(Debug)]
pub enum ApiError {
    /// 400/422 with a structured body.
    Rejected(ErrorDescriptor),
    /// 404 with an empty body.
    NotFound,
    /// 500. Details logged, not exposed.
    Internal(anyhow::Error),
}

/// Renders a descriptor as the JSON error envelope with its status code.
pub fn descriptor_response(descriptor: &ErrorDescriptor) -> Response {
    let status =
        StatusCode::from_u16(descriptor.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorEnvelope::from(descriptor))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(descriptor) => descriptor_response(&descriptor),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                descriptor_response(&ErrorDescriptor::internal())
            },
        }
    }
}

impl From<ErrorDescriptor> for ApiError {
    fn from(descriptor: ErrorDescriptor) -> Self {
        Self::Rejected(descriptor)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Rejected(descriptor) => Self::Rejected(descriptor),
            ServiceError::NotFound => Self::NotFound,
            ServiceError::Storage(e) => Self::Internal(e.into()),
        }
    }
}
