//! Test utilities and module declarations for storage tests.

use crate::MemoryStorage;
use phonebook_core::PersonInput;

mod constraint_tests;
mod pg_constraint_tests;

pub fn create_test_storage() -> MemoryStorage {
    MemoryStorage::new()
}

pub fn create_test_input(name: &str, number: &str) -> PersonInput {
    PersonInput::new(name, number)
}
