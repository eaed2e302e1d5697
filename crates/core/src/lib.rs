//! Core types for the phonebook API
//!
//! Domain records, the declared field schema, the client-facing
//! `ErrorDescriptor` and the request validation stage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

pub mod constants;
pub mod env_config;
mod error;
mod person;
pub mod validation;

pub use constants::*;
pub use error::*;
pub use person::*;
