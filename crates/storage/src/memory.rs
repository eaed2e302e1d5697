//! Process-local person store.
//!
//! The write lock is held across constraint checks and the write itself, so
//! uniqueness holds under concurrent requests without a database.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use phonebook_core::{Person, PersonInput, PERSON_FIELDS};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::PersonStore;
use crate::types::{PersonRecord, check_input, parse_id};

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: Arc<RwLock<Vec<PersonRecord>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Unique fields of `input` already used by a record other than `exclude`.
fn taken_fields(
    records: &[PersonRecord],
    input: &PersonInput,
    exclude: Option<Uuid>,
) -> Vec<&'static str> {
    PERSON_FIELDS
        .iter()
        .filter(|spec| spec.unique)
        .filter(|spec| {
            let value = input.field(spec.path);
            records.iter().any(|r| Some(r.id) != exclude && r.field(spec.path) == value)
        })
        .map(|spec| spec.path)
        .collect()
}

#[async_trait]
impl PersonStore for MemoryStorage {
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError> {
        let records = self.records.read().await;
        Ok(records.iter().cloned().map(Person::from).collect())
    }

    async fn get_person(&self, id: &str) -> Result<Option<Person>, StorageError> {
        let id = parse_id(id)?;
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned().map(Person::from))
    }

    async fn insert_person(&self, input: &PersonInput) -> Result<Person, StorageError> {
        let mut records = self.records.write().await;
        check_input(input, &taken_fields(&records, input, None))?;
        let record = PersonRecord::new(input, Utc::now());
        records.push(record.clone());
        tracing::debug!(id = %record.id, "person inserted");
        Ok(record.into())
    }

    async fn update_person(
        &self,
        id: &str,
        input: &PersonInput,
    ) -> Result<Option<Person>, StorageError> {
        let id = parse_id(id)?;
        let mut records = self.records.write().await;
        if !records.iter().any(|r| r.id == id) {
            return Ok(None);
        }
        check_input(input, &taken_fields(&records, input, Some(id)))?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.name.clone_from(&input.name);
        record.number.clone_from(&input.number);
        record.updated_at = Utc::now();
        Ok(Some(record.clone().into()))
    }

    async fn delete_person(&self, id: &str) -> Result<bool, StorageError> {
        let id = parse_id(id)?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn count_persons(&self) -> Result<u64, StorageError> {
        let records = self.records.read().await;
        Ok(u64::try_from(records.len()).unwrap_or(u64::MAX))
    }
}
