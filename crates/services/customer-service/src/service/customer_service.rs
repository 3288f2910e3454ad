//! Customer service - Handles customer-related business logic.
//!
//! SOLID (SRP): Handles customer use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{Customer, CustomerDraft};

use crate::repository::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List every customer
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Get customer by ID
    async fn get_customer(&self, id: Uuid) -> AppResult<Customer>;

    /// Create a new customer
    async fn create_customer(&self, draft: CustomerDraft) -> AppResult<Customer>;

    /// Replace name, email, phone and address of an existing customer
    async fn update_customer(&self, id: Uuid, draft: CustomerDraft) -> AppResult<Customer>;

    /// Permanently delete a customer
    async fn delete_customer(&self, id: Uuid) -> AppResult<()>;

    /// Delete every customer, returning how many were removed
    async fn delete_all_customers(&self) -> AppResult<u64>;

    /// Check that the backing store is reachable
    async fn health(&self) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    /// Create new customer service instance with repository
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.repo.list().await
    }

    async fn get_customer(&self, id: Uuid) -> AppResult<Customer> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_customer(&self, draft: CustomerDraft) -> AppResult<Customer> {
        let customer = self.repo.create(draft.validated()?).await?;
        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    async fn update_customer(&self, id: Uuid, draft: CustomerDraft) -> AppResult<Customer> {
        let customer = self.repo.update(id, draft.validated()?).await?;
        tracing::info!(customer_id = %id, "Customer updated");
        Ok(customer)
    }

    async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }

    async fn delete_all_customers(&self) -> AppResult<u64> {
        let removed = self.repo.delete_all().await?;
        tracing::info!(removed, "All customers deleted");
        Ok(removed)
    }

    async fn health(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}
