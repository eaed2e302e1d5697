use std::sync::Arc;

use phonebook_core::{Person, PersonInput};
use phonebook_storage::{PersonStore, StorageBackend};

use crate::ServiceError;

/// Person use cases. Absent records surface as `ServiceError::NotFound`.
pub struct PersonService {
    storage: Arc<StorageBackend>,
}

impl PersonService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        Ok(self.storage.list_persons().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Person, ServiceError> {
        self.storage.get_person(id).await?.ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, input: &PersonInput) -> Result<Person, ServiceError> {
        let person = self.storage.insert_person(input).await?;
        tracing::info!(id = %person.id, name = %person.name, "person created");
        Ok(person)
    }

    pub async fn update(&self, id: &str, input: &PersonInput) -> Result<Person, ServiceError> {
        let person = self.storage.update_person(id, input).await?.ok_or(ServiceError::NotFound)?;
        tracing::info!(id = %person.id, "person updated");
        Ok(person)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.storage.delete_person(id).await? {
            tracing::info!(%id, "person deleted");
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.count_persons().await?)
    }
}
