//! Application state for dependency injection.

use std::sync::Arc;

use customer_service_lib::CustomerService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(customers: Arc<dyn CustomerService>, config: GatewayConfig) -> Self {
        Self { customers, config }
    }
}
