//! Health check handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;

use common::AppResult;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when every dependency answers, otherwise `degraded`
    pub status: &'static str,
    pub services: Dependencies,
}

#[derive(Debug, Serialize)]
pub struct Dependencies {
    pub database: DependencyCheck,
}

#[derive(Debug, Serialize)]
pub struct DependencyCheck {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DependencyCheck {
    fn from_result(name: &str, result: AppResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                status: "healthy",
                error: None,
            },
            Err(e) => {
                tracing::warn!(dependency = name, error = %e, "Health check failed");
                Self {
                    status: "unhealthy",
                    error: Some(e.user_message()),
                }
            }
        }
    }

    fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Report database reachability; 503 while it is down.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = DependencyCheck::from_result("database", state.customers.health().await);

    let (code, status) = if database.is_healthy() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            services: Dependencies { database },
        }),
    )
}
