//! Customer service configuration.

use std::env;

use common::DatabaseConfig;

/// Customer service configuration.
#[derive(Debug, Clone)]
pub struct CustomerServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Insert the sample customers when the table is empty
    pub seed_sample_data: bool,
}

impl CustomerServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("CUSTOMER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for CustomerServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            seed_sample_data: true,
        }
    }
}
