//! Customer Service Library
//!
//! Persistence and business rules for customer records. The gateway embeds
//! it in-process; the `customer-service` binary exposes schema and seeding
//! commands.

pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

pub use crate::config::CustomerServiceConfig;
pub use crate::infra::{Database, MigrationState};
pub use crate::seed::SampleData;
pub use crate::service::{CustomerManager, CustomerService};

use crate::repository::{CustomerRepository, CustomerStore};

/// Connect to the database, apply migrations and build the service.
///
/// Sample customers are inserted first when seeding is enabled and the
/// table is empty.
pub async fn connect(
    config: &CustomerServiceConfig,
) -> Result<Arc<dyn CustomerService>, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let repo: Arc<dyn CustomerRepository> = Arc::new(CustomerStore::new(db.into_connection()));

    if config.seed_sample_data {
        SampleData::new(repo.clone()).seed_if_empty().await?;
    }

    Ok(Arc::new(CustomerManager::new(repo)))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &CustomerServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for state in db.migration_status().await? {
                let marker = if state.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, state.name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Insert the sample customers if the table is empty (for CLI commands).
pub async fn run_seed(config: &CustomerServiceConfig) -> Result<u64, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let repo = Arc::new(CustomerStore::new(db.into_connection()));
    Ok(SampleData::new(repo).seed_if_empty().await?)
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
