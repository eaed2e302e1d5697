//! Storage types shared across modules

use chrono::{DateTime, Utc};
use phonebook_core::{FieldSpec, Person, PersonInput, PERSON_FIELDS, char_len};
use uuid::Uuid;

use crate::error::StorageError;

/// Stored person row. Timestamps are bookkeeping and never leave the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: Uuid,
    pub name: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonRecord {
    pub(crate) fn new(input: &PersonInput, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            number: input.number.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn field(&self, path: &str) -> Option<&str> {
        match path {
            "name" => Some(&self.name),
            "number" => Some(&self.number),
            _ => None,
        }
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Self { id: record.id.to_string(), name: record.name, number: record.number }
    }
}

/// Which constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    MinLength,
    Unique,
    Other,
}

/// One field-level constraint failure with the store's own description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn min_length(spec: &FieldSpec, value: &str) -> Self {
        Self {
            path: spec.path.to_owned(),
            kind: ViolationKind::MinLength,
            message: format!(
                "Path `{}` (`{value}`) is shorter than the minimum allowed length ({}).",
                spec.path, spec.min_length
            ),
        }
    }

    #[must_use]
    pub fn unique(path: &str, value: &str) -> Self {
        Self {
            path: path.to_owned(),
            kind: ViolationKind::Unique,
            message: format!("Error, expected `{path}` to be unique. Value: `{value}`"),
        }
    }

    #[must_use]
    pub fn other(path: &str, message: impl Into<String>) -> Self {
        Self { path: path.to_owned(), kind: ViolationKind::Other, message: message.into() }
    }
}

/// Parses a path identifier into the store's id format.
pub(crate) fn parse_id(id: &str) -> Result<Uuid, StorageError> {
    Uuid::parse_str(id).map_err(|_| StorageError::MalformedId(id.to_owned()))
}

/// Checks `input` against [`PERSON_FIELDS`].
///
/// `taken` lists unique fields whose value already belongs to another record.
/// A field reports at most one violation; length is checked before uniqueness.
pub(crate) fn check_input(input: &PersonInput, taken: &[&str]) -> Result<(), StorageError> {
    let mut violations = Vec::new();
    for spec in &PERSON_FIELDS {
        let value = input.field(spec.path).unwrap_or_default();
        if char_len(value) < spec.min_length {
            violations.push(FieldViolation::min_length(spec, value));
        } else if spec.unique && taken.contains(&spec.path) {
            violations.push(FieldViolation::unique(spec.path, value));
        }
    }
    if violations.is_empty() { Ok(()) } else { Err(StorageError::Validation(violations)) }
}
