//! Storage backend trait abstraction
//!
//! Handlers and services depend on `PersonStore`; the concrete store is chosen
//! once at startup and injected.

use async_trait::async_trait;
use phonebook_core::{Person, PersonInput};

use crate::error::StorageError;

/// CRUD operations on person records.
///
/// Identifiers are opaque strings. A string the store cannot parse yields
/// `StorageError::MalformedId`; a well-formed id with no record is `None`/`false`.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// All records, oldest first.
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError>;

    /// Get a record by id.
    async fn get_person(&self, id: &str) -> Result<Option<Person>, StorageError>;

    /// Insert a new record after checking field constraints and name uniqueness.
    async fn insert_person(&self, input: &PersonInput) -> Result<Person, StorageError>;

    /// Replace name and number of an existing record. `None` if absent.
    async fn update_person(
        &self,
        id: &str,
        input: &PersonInput,
    ) -> Result<Option<Person>, StorageError>;

    /// Delete a record. Returns `true` if deleted.
    async fn delete_person(&self, id: &str) -> Result<bool, StorageError>;

    /// Number of stored records.
    async fn count_persons(&self) -> Result<u64, StorageError>;
}
