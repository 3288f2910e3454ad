//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The customer types here are shared by the service, the gateway and the
//! console client.

pub mod constants;
pub mod customer;
pub mod error;

pub use constants::*;
pub use customer::{Customer, CustomerDraft, CustomerResponse};
pub use error::{DomainError, DomainResult};
