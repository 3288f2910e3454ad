//! Customer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    CustomerDraft, CustomerResponse, MAX_ADDRESS_LENGTH, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH,
    MAX_PHONE_LENGTH, MIN_NAME_LENGTH,
};

use crate::extractors::{FieldOrder, ValidatedJson};
use crate::state::AppState;

/// Customer create/update request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CustomerRequest {
    /// Customer display name
    #[validate(length(
        min = MIN_NAME_LENGTH,
        max = MAX_NAME_LENGTH,
        message = "Name must be between 1 and 100 characters"
    ))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Contact email address
    #[validate(
        email(message = "Email must be a valid address"),
        length(max = MAX_EMAIL_LENGTH, message = "Email is too long")
    )]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// Contact phone number
    #[validate(length(max = MAX_PHONE_LENGTH, message = "Phone is too long"))]
    #[schema(example = "555-123-4567")]
    pub phone: Option<String>,
    /// Postal address
    #[validate(length(max = MAX_ADDRESS_LENGTH, message = "Address is too long"))]
    #[schema(example = "123 Main St, Anytown, USA")]
    pub address: Option<String>,
}

impl FieldOrder for CustomerRequest {
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "address"];
}

impl From<CustomerRequest> for CustomerDraft {
    fn from(request: CustomerRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
        }
    }
}

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_customers)
                .post(create_customer)
                .delete(delete_all_customers),
        )
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// Customer ids are UUIDs; anything else is rejected before reaching the service.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!(id = raw, "Invalid customer id format");
        AppError::bad_request("Invalid customer id")
    })
}

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "List of all customers", body = Vec<CustomerResponse>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<CustomerResponse>>> {
    tracing::debug!("Getting all customers");
    let customers = state.customers.list_customers().await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer record", body = CustomerResponse),
        (status = 400, description = "Malformed customer id"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CustomerResponse>> {
    tracing::debug!(id = %id, "Getting customer");
    let id = parse_id(&id)?;
    let customer = state.customers.get_customer(id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CustomerRequest>,
) -> AppResult<(StatusCode, Json<CustomerResponse>)> {
    let customer = state.customers.create_customer(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// Update an existing customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 400, description = "Validation error or malformed id"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CustomerRequest>,
) -> AppResult<Json<CustomerResponse>> {
    let id = parse_id(&id)?;
    let customer = state.customers.update_customer(id, payload.into()).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, description = "Malformed customer id"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.customers.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every customer
#[utoipa::path(
    delete,
    path = "/customers",
    tag = "Customers",
    responses(
        (status = 204, description = "All customers deleted")
    )
)]
pub async fn delete_all_customers(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.customers.delete_all_customers().await?;
    Ok(StatusCode::NO_CONTENT)
}
