//! Request DTOs for the orders API
//!
//! These are the externally-facing shapes, distinct from the persisted
//! records in [`crate::orders::models`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Order creation request.
///
/// The order id and creation timestamp are supplied by the caller; the
/// server generates nothing.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_id: Uuid,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

/// A single line of a creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_wire_shape() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{
                "orderId": "11111111-1111-1111-1111-111111111111",
                "customerName": "Ada",
                "createdAt": "2024-01-01T00:00:00Z",
                "items": [{"productId": "p1", "quantity": 2}]
            }"#,
        )
        .expect("should deserialize");

        assert_eq!(
            req.order_id,
            Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap()
        );
        assert_eq!(req.customer_name, "Ada");
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].product_id, "p1");
        assert_eq!(req.items[0].quantity, 2);
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{
                "orderId": "11111111-1111-1111-1111-111111111111",
                "customerName": "Ada",
                "createdAt": "2024-01-01T00:00:00Z"
            }"#,
        )
        .expect("should deserialize");
        assert!(req.items.is_empty());
    }
}
