//! Typed error enum for the service layer.
//!
//! Every storage failure reaches callers through the persistence mapper, so
//! client-attributable failures already carry their `ErrorDescriptor` and only
//! genuine faults remain opaque.

use phonebook_core::ErrorDescriptor;
use phonebook_storage::StorageError;
use thiserror::Error;

use crate::persistence_mapper::map_storage_error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client input rejected with a ready-to-render descriptor (400/422).
    #[error("rejected: {0}")]
    Rejected(ErrorDescriptor),

    /// No record for a well-formed identifier. Rendered as an empty 404.
    #[error("not found")]
    NotFound,

    /// Unanticipated storage failure. Logged server-side, never detailed to clients.
    #[error("storage: {0}")]
    Storage(#[source] StorageError),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        map_storage_error(err)
    }
}
