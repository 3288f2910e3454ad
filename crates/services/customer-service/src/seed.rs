//! Sample data initialization.

use std::sync::Arc;

use common::AppResult;
use domain::CustomerDraft;

use crate::repository::CustomerRepository;

/// Inserts a fixed set of sample customers into an empty table.
pub struct SampleData {
    repo: Arc<dyn CustomerRepository>,
}

impl SampleData {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    /// The sample customers, in insertion order.
    pub fn customers() -> Vec<CustomerDraft> {
        [
            ("John Doe", "john.doe@example.com", "555-123-4567", "123 Main St, Anytown, USA"),
            ("Jane Smith", "jane.smith@example.com", "555-234-5678", "456 Oak Ave, Somewhere, USA"),
            ("Robert Johnson", "robert.johnson@example.com", "555-345-6789", "789 Pine Rd, Nowhere, USA"),
            ("Emily Davis", "emily.davis@example.com", "555-456-7890", "101 Maple Dr, Everywhere, USA"),
            ("Michael Wilson", "michael.wilson@example.com", "555-567-8901", "202 Cedar Ln, Anywhere, USA"),
        ]
        .into_iter()
        .map(|(name, email, phone, address)| {
            CustomerDraft::new(name, email)
                .with_phone(phone)
                .with_address(address)
        })
        .collect()
    }

    /// Seed the sample customers unless the table already has rows.
    ///
    /// Returns the number of inserted customers.
    pub async fn seed_if_empty(&self) -> AppResult<u64> {
        tracing::info!("Checking if customer data initialization is needed");

        if self.repo.count().await? > 0 {
            tracing::info!("Customer data already present, skipping initialization");
            return Ok(0);
        }

        let inserted = self.repo.create_many(Self::customers()).await?;
        tracing::info!(inserted, "Initialized database with sample customers");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCustomerRepository;

    #[tokio::test]
    async fn test_seeds_empty_table() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_create_many()
            .withf(|drafts| drafts.len() == 5 && drafts[0].name == "John Doe")
            .times(1)
            .returning(|drafts| Ok(drafts.len() as u64));

        let seeded = SampleData::new(Arc::new(repo)).seed_if_empty().await.unwrap();
        assert_eq!(seeded, 5);
    }

    #[tokio::test]
    async fn test_skips_populated_table() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_count().returning(|| Ok(2));
        repo.expect_create_many().never();

        let seeded = SampleData::new(Arc::new(repo)).seed_if_empty().await.unwrap();
        assert_eq!(seeded, 0);
    }

    #[test]
    fn test_sample_customers_are_complete() {
        let customers = SampleData::customers();
        assert_eq!(customers.len(), 5);
        assert!(customers
            .iter()
            .all(|c| c.phone.is_some() && c.address.is_some() && c.email.contains('@')));
    }
}
