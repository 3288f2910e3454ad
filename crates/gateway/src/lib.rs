//! API Gateway Library
//!
//! This crate provides the HTTP REST API for customer records, backed by an
//! in-process customer service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::sync::Arc;

use tracing::info;

use customer_service_lib::{CustomerService, CustomerServiceConfig};

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect the customer service and run the HTTP server (for the combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    service_config: CustomerServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    config.host = host.to_string();
    config.port = port;

    let customers = customer_service_lib::connect(&service_config).await?;
    run_server(customers, config).await
}

/// Serve the router for the given service until the process is stopped.
pub async fn run_server(
    customers: Arc<dyn CustomerService>,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_address();
    let app = create_router(AppState::new(customers, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Gateway listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
