//! Table-constraint remapping in PgStorage, reached without the pre-checks.
//! Run with: DATABASE_URL=... cargo test -p phonebook-storage -- --ignored pg_

use crate::{PersonStore, PgStorage, StorageError, ViolationKind};
use phonebook_core::PersonInput;
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

#[tokio::test]
#[ignore]
async fn pg_unique_constraint_maps_to_duplicate() {
    let storage = create_pg_storage().await;
    let name = format!("test-{}", Uuid::new_v4());
    let created = storage.insert_record(&PersonInput::new(&name, "123-4567890")).await.unwrap();

    let err = storage.insert_record(&PersonInput::new(&name, "000-0000000")).await.unwrap_err();
    let StorageError::Validation(violations) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "name");
    assert!(err.is_duplicate());

    storage.delete_person(&created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_check_constraint_maps_to_min_length() {
    let storage = create_pg_storage().await;
    let err = storage
        .insert_record(&PersonInput::new(format!("test-{}", Uuid::new_v4()), "123"))
        .await
        .unwrap_err();
    let StorageError::Validation(violations) = err else {
        panic!("expected validation error");
    };
    assert_eq!(violations[0].path, "number");
    assert_eq!(violations[0].kind, ViolationKind::MinLength);
    assert!(violations[0].message.contains("length (8)"));
}
