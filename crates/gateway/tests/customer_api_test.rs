//! Integration tests for the customer REST endpoints.
//!
//! These tests drive the router with an in-memory customer service, so no
//! database is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tokio_test::assert_ok;
use tower::ServiceExt;
use uuid::Uuid;

use common::{AppError, AppResult};
use customer_service_lib::CustomerService;
use domain::{Customer, CustomerDraft};
use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;

// =============================================================================
// In-memory service
// =============================================================================

#[derive(Default)]
struct InMemoryCustomers {
    rows: Mutex<Vec<Customer>>,
    unhealthy: bool,
}

impl InMemoryCustomers {
    fn with(drafts: Vec<CustomerDraft>) -> Self {
        let rows = drafts
            .into_iter()
            .map(|d| Customer::new(Uuid::new_v4(), d))
            .collect();
        Self {
            rows: Mutex::new(rows),
            unhealthy: false,
        }
    }

    async fn first_id(&self) -> Uuid {
        self.rows.lock().await[0].id
    }
}

#[async_trait]
impl CustomerService for InMemoryCustomers {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.rows.lock().await.clone())
    }

    async fn get_customer(&self, id: Uuid) -> AppResult<Customer> {
        self.rows
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create_customer(&self, draft: CustomerDraft) -> AppResult<Customer> {
        let customer = Customer::new(Uuid::new_v4(), draft.normalized());
        self.rows.lock().await.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(&self, id: Uuid, draft: CustomerDraft) -> AppResult<Customer> {
        let mut rows = self.rows.lock().await;
        let customer = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;
        customer.apply(draft.normalized());
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete_all_customers(&self) -> AppResult<u64> {
        let mut rows = self.rows.lock().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn health(&self) -> AppResult<()> {
        if self.unhealthy {
            Err(AppError::service_unavailable("database"))
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn sample() -> Arc<InMemoryCustomers> {
    Arc::new(InMemoryCustomers::with(vec![
        CustomerDraft::new("John Doe", "john.doe@example.com")
            .with_phone("555-123-4567")
            .with_address("123 Main St, Anytown, USA"),
        CustomerDraft::new("Jane Smith", "jane.smith@example.com"),
    ]))
}

fn app(service: &Arc<InMemoryCustomers>) -> Router {
    create_router(AppState::new(service.clone(), GatewayConfig::default()))
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_list_customers_returns_wire_shape() {
    let service = sample();
    let (status, body) = send(app(&service), request("GET", "/customers", None)).await;

    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "John Doe");
    assert_eq!(list[0]["phone"], "555-123-4567");
    assert!(list[1]["phone"].is_null());

    let mut keys: Vec<&String> = list[0].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, ["address", "email", "id", "name", "phone"]);
}

#[tokio::test]
async fn test_list_customers_empty() {
    let service = Arc::new(InMemoryCustomers::default());
    let (status, body) = send(app(&service), request("GET", "/customers", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_customer_by_id() {
    let service = sample();
    let id = service.first_id().await;

    let (status, body) = send(app(&service), request("GET", &format!("/customers/{}", id), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["email"], "john.doe@example.com");
}

#[tokio::test]
async fn test_get_customer_malformed_id_is_bad_request() {
    let service = sample();
    let (status, body) = send(app(&service), request("GET", "/customers/5", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_customer_missing_is_not_found() {
    let service = sample();
    let uri = format!("/customers/{}", Uuid::new_v4());
    let (status, body) = send(app(&service), request("GET", &uri, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_customer_returns_created() {
    let service = Arc::new(InMemoryCustomers::default());
    let payload = json!({
        "name": "Emily Davis",
        "email": "emily.davis@example.com",
        "phone": "555-456-7890",
        "address": "101 Maple Dr, Everywhere, USA"
    });

    let (status, body) = send(app(&service), request("POST", "/customers", Some(payload))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Emily Davis");
    assert_ok!(Uuid::parse_str(body["id"].as_str().unwrap()));
    assert_eq!(service.list_customers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_customer_invalid_email_is_rejected() {
    let service = Arc::new(InMemoryCustomers::default());
    let payload = json!({ "name": "Bad", "email": "not-an-email", "phone": "", "address": "" });

    let (status, body) = send(app(&service), request("POST", "/customers", Some(payload))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Email must be a valid address");
    assert!(service.list_customers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_customer_reports_first_declared_failing_field() {
    let service = Arc::new(InMemoryCustomers::default());
    let payload = json!({
        "name": "",
        "email": "ann@example.com",
        "address": "x".repeat(300),
    });

    let (status, body) = send(app(&service), request("POST", "/customers", Some(payload))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Name must be between 1 and 100 characters");
}

#[tokio::test]
async fn test_create_customer_malformed_json_is_bad_request() {
    let service = Arc::new(InMemoryCustomers::default());
    let request = Request::builder()
        .method("POST")
        .uri("/customers")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(app(&service), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_customer_replaces_fields() {
    let service = sample();
    let id = service.first_id().await;
    let payload = json!({
        "name": "John Q. Doe",
        "email": "john.q@example.com",
        "phone": "",
        "address": "1 New Rd"
    });

    let uri = format!("/customers/{}", id);
    let (status, body) = send(app(&service), request("PUT", &uri, Some(payload))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["name"], "John Q. Doe");
    assert!(body["phone"].is_null());
    assert_eq!(body["address"], "1 New Rd");
}

#[tokio::test]
async fn test_update_missing_customer_is_not_found() {
    let service = sample();
    let uri = format!("/customers/{}", Uuid::new_v4());
    let payload = json!({ "name": "X", "email": "x@example.com" });

    let (status, _) = send(app(&service), request("PUT", &uri, Some(payload))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_customer_then_get_is_not_found() {
    let service = sample();
    let id = service.first_id().await;
    let uri = format!("/customers/{}", id);

    let (status, _) = send(app(&service), request("DELETE", &uri, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(app(&service), request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app(&service), request("DELETE", &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_customers() {
    let service = sample();

    let (status, _) = send(app(&service), request("DELETE", "/customers", None)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(service.list_customers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health_reports_database_state() {
    let healthy = sample();
    let (status, body) = send(app(&healthy), request("GET", "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let unhealthy = Arc::new(InMemoryCustomers {
        unhealthy: true,
        ..Default::default()
    });
    let (status, body) = send(app(&unhealthy), request("GET", "/health", None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
    assert_eq!(body["services"]["database"]["error"], "database is unavailable");
}

#[tokio::test]
async fn test_openapi_document_lists_customer_paths() {
    let service = sample();
    let (status, body) = send(app(&service), request("GET", "/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/customers"].is_object());
    assert!(body["paths"]["/customers/{id}"].is_object());

    let schemas = &body["components"]["schemas"];
    assert_eq!(schemas["CustomerRequest"]["properties"]["name"]["example"], "John Doe");
    assert_eq!(
        schemas["CustomerResponse"]["properties"]["email"]["example"],
        "john.doe@example.com"
    );
}
