//! Maps record-store outcomes onto client-facing errors.
//!
//! - malformed id → 400 `Malformed Id`
//! - field violations → one 422 listing every message in field declaration order
//! - anything else → `ServiceError::Storage`, a server fault

use std::sync::LazyLock;

use phonebook_core::{ErrorDescriptor, MALFORMED_ID, field_order};
use phonebook_storage::{FieldViolation, StorageError, ViolationKind};
use regex::Regex;

use crate::ServiceError;

/// Threshold embedded in a store's minimum-length description.
static MIN_LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"length \((\d+)\)").expect("static regex is valid"));

pub fn map_storage_error(err: StorageError) -> ServiceError {
    match err {
        StorageError::MalformedId(id) => {
            tracing::debug!(%id, "malformed id");
            ServiceError::Rejected(ErrorDescriptor::bad_request(MALFORMED_ID))
        },
        StorageError::Validation(violations) => {
            ServiceError::Rejected(violations_descriptor(violations))
        },
        other => ServiceError::Storage(other),
    }
}

/// Builds a single 422 from all violations, ordered by field declaration.
pub fn violations_descriptor(mut violations: Vec<FieldViolation>) -> ErrorDescriptor {
    violations.sort_by_key(|v| field_order(&v.path));
    ErrorDescriptor::unprocessable(violations.iter().map(violation_message).collect())
}

pub fn violation_message(violation: &FieldViolation) -> String {
    let field = capitalize(&violation.path);
    match violation.kind {
        ViolationKind::Unique => format!("{field} already exists"),
        ViolationKind::MinLength => match parse_min_length(&violation.message) {
            Some(length) => format!("{field} must be at least {length} characters long"),
            None => format!("ValidationError in {field}"),
        },
        ViolationKind::Other => format!("ValidationError in {field}"),
    }
}

/// Extracts `n` from a description containing `length (n)`.
pub fn parse_min_length(description: &str) -> Option<usize> {
    MIN_LENGTH_RE.captures(description)?.get(1)?.as_str().parse().ok()
}

fn capitalize(path: &str) -> String {
    let mut chars = path.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
