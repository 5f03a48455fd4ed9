use std::sync::Arc;

use crate::db::Database;
use crate::orders::OrderService;

/// Shared gateway state.
///
/// Holds no per-request data; the pool behind the service scopes a store
/// session to each request on its own.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(orders: OrderService, db: Arc<Database>) -> Self {
        Self { orders, db }
    }
}
