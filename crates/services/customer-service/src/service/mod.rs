//! Service layer - customer use cases.

mod customer_service;

pub use customer_service::{CustomerManager, CustomerService};
