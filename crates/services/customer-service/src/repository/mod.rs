//! Repository layer for data access.

mod customer_repository;
pub mod entities;

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerRepository, CustomerStore};
