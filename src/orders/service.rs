//! Service layer: reshapes the creation request into a domain order and
//! delegates to the repository. No business rule lives here.

use uuid::Uuid;

use super::error::StorageError;
use super::models::{Order, OrderItem};
use super::repository::OrderRepository;
use crate::gateway::types::CreateOrderRequest;

#[derive(Clone)]
pub struct OrderService {
    repository: OrderRepository,
}

impl OrderService {
    pub fn new(repository: OrderRepository) -> Self {
        Self { repository }
    }

    /// Build a domain order from exactly the request fields and persist it.
    ///
    /// No defaulting, no validation, no server-generated id or timestamp;
    /// input item order is preserved. Repository errors propagate unchanged.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, StorageError> {
        let order_id = req.order_id;

        let items = req
            .items
            .into_iter()
            .map(|item| OrderItem {
                id: 0, // assigned by the store on insert
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect();

        let order = Order {
            order_id,
            customer_name: req.customer_name,
            created_at: req.created_at,
            items,
        };

        self.repository.create_order(order).await
    }

    /// Passthrough to the repository, including the not-found signal.
    pub async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, StorageError> {
        self.repository.get_order_by_id(order_id).await
    }
}
