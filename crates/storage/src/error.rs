//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (malformed id, field violations,
//! database faults) instead of downcasting opaque boxes. Constraint
//! violations are remapped by the write path, which knows the offending input;
//! any other `sqlx::Error` converts into `Database`.

use thiserror::Error;

use crate::types::{FieldViolation, ViolationKind};

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Identifier cannot be parsed into the store's id format.
    #[error("malformed id: {0:?}")]
    MalformedId(String),

    /// One or more field constraints rejected the write, in field order.
    #[error("validation failed: {}", describe(.0))]
    Validation(Vec<FieldViolation>),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

fn describe(violations: &[FieldViolation]) -> String {
    violations.iter().map(|v| v.message.as_str()).collect::<Vec<_>>().join("; ")
}

impl StorageError {
    /// Whether this error contains a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Validation(v) if v.iter().any(|v| v.kind == ViolationKind::Unique))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_detection() {
        let err = StorageError::Validation(vec![FieldViolation::unique("name", "Ann")]);
        assert!(err.is_duplicate());
        let err = StorageError::MalformedId("x".into());
        assert!(!err.is_duplicate());
    }

    #[test]
    fn validation_display_joins_messages() {
        let err = StorageError::Validation(vec![
            FieldViolation::unique("name", "Ann"),
            FieldViolation::other("number", "bad"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: Error, expected `name` to be unique. Value: `Ann`; bad"
        );
    }

    #[test]
    fn sqlx_errors_are_database_errors() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::Database(sqlx::Error::PoolTimedOut)));
        assert!(!err.is_duplicate());
    }
}
