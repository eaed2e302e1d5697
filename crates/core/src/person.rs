//! Person domain types and the declared field schema.
//!
//! `Person` is the public projection that leaves the API. Stores keep their own
//! row type with bookkeeping columns and convert into `Person` on the way out.

use serde::{Deserialize, Serialize};

/// A phonebook entry as seen by API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier, always rendered as a string.
    pub id: String,
    pub name: String,
    pub number: String,
}

impl Person {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), number: number.into() }
    }
}

/// Validated create/update payload (full replace of name and number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub number: String,
}

impl PersonInput {
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self { name: name.into(), number: number.into() }
    }

    /// Value of a declared field by its path.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&str> {
        match path {
            "name" => Some(&self.name),
            "number" => Some(&self.number),
            _ => None,
        }
    }
}

/// Constraint declaration for one `Person` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub path: &'static str,
    pub min_length: usize,
    pub unique: bool,
}

/// Person fields in declaration order. Violation reports follow this order.
pub const PERSON_FIELDS: [FieldSpec; 2] = [
    FieldSpec { path: "name", min_length: 3, unique: true },
    FieldSpec { path: "number", min_length: 8, unique: false },
];

/// Position of `path` in [`PERSON_FIELDS`]; unknown paths sort last.
#[must_use]
pub fn field_order(path: &str) -> usize {
    PERSON_FIELDS.iter().position(|f| f.path == path).unwrap_or(PERSON_FIELDS.len())
}

/// Looks up the declaration for `path`.
#[must_use]
pub fn field_spec(path: &str) -> Option<&'static FieldSpec> {
    PERSON_FIELDS.iter().find(|f| f.path == path)
}

/// Number of characters as counted by the length constraints.
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
