//! Service layer for the phonebook API
//!
//! Sits between HTTP/CLI front ends and storage, and owns the mapping from
//! persistence outcomes to client-facing errors.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
pub mod persistence_mapper;
mod person_service;

pub use error::ServiceError;
pub use person_service::PersonService;
