//! Storage layer for the phonebook API
//!
//! A `PersonStore` trait with an in-memory store for development and tests and
//! a PostgreSQL store whose table constraints are the authoritative guard for
//! name uniqueness and field lengths.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::PersonStore;
pub use types::{FieldViolation, PersonRecord, ViolationKind};
