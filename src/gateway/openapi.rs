//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateOrderRequest, OrderItemRequest};
use crate::orders::{Order, OrderItem};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orders API",
        version = "1.0.0",
        description = "Minimal order-management backend: create customer orders and fetch them by id."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            CreateOrderRequest,
            OrderItemRequest,
            Order,
            OrderItem,
            HealthResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order creation and retrieval"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Orders API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Orders API"));
    }

    #[test]
    fn test_order_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/orders"));
        assert!(paths.paths.contains_key("/orders/{id}"));
        assert!(paths.paths.contains_key("/health"));
    }
}
