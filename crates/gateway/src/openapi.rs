//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::customer_handler::CustomerRequest;
use domain::CustomerResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::customer_handler::list_customers,
        crate::handlers::customer_handler::get_customer,
        crate::handlers::customer_handler::create_customer,
        crate::handlers::customer_handler::update_customer,
        crate::handlers::customer_handler::delete_customer,
        crate::handlers::customer_handler::delete_all_customers,
    ),
    components(
        schemas(
            CustomerRequest,
            CustomerResponse,
        )
    ),
    tags(
        (name = "Customers", description = "Customer record management"),
    )
)]
pub struct ApiDoc;
