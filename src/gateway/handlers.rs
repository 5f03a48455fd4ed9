//! Order endpoints and health check

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use utoipa::ToSchema;
use uuid::Uuid;

use super::state::AppState;
use super::types::CreateOrderRequest;

/// Create order endpoint
///
/// POST /orders
///
/// Responds 201 with a location reference to the get-by-id endpoint and the
/// new order's id as the body. Every failure past request binding collapses
/// to a fixed-message 500; no error detail leaks to the caller.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created, body is the new order id", body = Uuid),
        (status = 500, description = "Internal error")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Response {
    tracing::info!("Creating new order for customer: {}", req.customer_name);
    let customer_name = req.customer_name.clone();

    match state.orders.create_order(req).await {
        Ok(order) => {
            tracing::info!("Order created successfully with ID: {}", order.order_id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, format!("/orders/{}", order.order_id))],
                Json(order.order_id),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Error creating order for customer {}: {}", customer_name, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json("An error occurred while creating the order"),
            )
                .into_response()
        }
    }
}

/// Get order endpoint
///
/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its items", body = crate::orders::Order),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "Orders"
)]
pub async fn get_order(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> Response {
    match state.orders.get_order_by_id(id).await {
        Ok(Some(order)) => (StatusCode::OK, Json(order)).into_response(),
        Ok(None) => {
            tracing::warn!("Order with ID {} not found", id);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!("Error retrieving order with ID {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json("An error occurred while retrieving the order"),
            )
                .into_response()
        }
    }
}

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings the store; does not expose any internal detail in the response.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.db.health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { timestamp_ms })),
        Err(e) => {
            tracing::error!("[HEALTH] SQLite ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { timestamp_ms }),
            )
        }
    }
}
