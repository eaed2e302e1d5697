//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use phonebook_core::{Person, PersonInput};

use crate::error::StorageError;
use crate::traits::PersonStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <crate::MemoryStorage as PersonStore>::$method(s, $($arg),*).await,
            StorageBackend::Postgres(s) => <crate::PgStorage as PersonStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(crate::MemoryStorage),
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    /// Short backend label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl PersonStore for StorageBackend {
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError> {
        dispatch!(self, list_persons())
    }

    async fn get_person(&self, id: &str) -> Result<Option<Person>, StorageError> {
        dispatch!(self, get_person(id))
    }

    async fn insert_person(&self, input: &PersonInput) -> Result<Person, StorageError> {
        dispatch!(self, insert_person(input))
    }

    async fn update_person(
        &self,
        id: &str,
        input: &PersonInput,
    ) -> Result<Option<Person>, StorageError> {
        dispatch!(self, update_person(id, input))
    }

    async fn delete_person(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, delete_person(id))
    }

    async fn count_persons(&self) -> Result<u64, StorageError> {
        dispatch!(self, count_persons())
    }
}
