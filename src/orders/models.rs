//! Domain records for orders and their line items

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A customer order with its line items.
///
/// The identifier and creation timestamp are caller-supplied at creation;
/// nothing here is server-generated.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    /// Line items in request order
    pub items: Vec<OrderItem>,
}

/// A single product/quantity line within an order.
///
/// `order_id` is the owning order's key, not a pointer back to the parent
/// record, so serializing an item can never recurse into its order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Surrogate id, assigned by the store on insert
    pub id: i64,
    pub order_id: Uuid,
    pub product_id: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let order_id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
        Order {
            order_id,
            customer_name: "Ada".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            items: vec![OrderItem {
                id: 1,
                order_id,
                product_id: "p1".to_string(),
                quantity: 2,
            }],
        }
    }

    #[test]
    fn test_order_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(
            json["orderId"],
            serde_json::json!("11111111-1111-1111-1111-111111111111")
        );
        assert_eq!(json["customerName"], serde_json::json!("Ada"));
        assert_eq!(json["items"][0]["productId"], serde_json::json!("p1"));
        assert_eq!(json["items"][0]["quantity"], serde_json::json!(2));
    }

    #[test]
    fn test_item_carries_key_only_no_parent_record() {
        let json = serde_json::to_value(sample_order()).unwrap();
        let item = json["items"][0].as_object().unwrap();
        let mut keys: Vec<&str> = item.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["id", "orderId", "productId", "quantity"]);
    }
}
