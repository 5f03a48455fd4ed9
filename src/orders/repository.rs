//! Repository layer for database operations

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::error::StorageError;
use super::models::{Order, OrderItem};

/// Order repository: insert-and-return, fetch-by-id
#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Create a new OrderRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist an order and its items as a single transaction.
    ///
    /// Returns the order with store-assigned item ids populated. A duplicate
    /// order id fails at the primary-key constraint, which is the only
    /// uniqueness enforcement in the system.
    pub async fn create_order(&self, mut order: Order) -> Result<Order, StorageError> {
        let order_id = order.order_id;
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"INSERT INTO orders (order_id, customer_name, created_at)
               VALUES ($1, $2, $3)"#,
        )
        .bind(order_id)
        .bind(&order.customer_name)
        .bind(order.created_at)
        .execute(&mut *tx)
        .await?;

        for item in &mut order.items {
            let result = sqlx::query(
                r#"INSERT INTO order_items (order_id, product_id, quantity)
                   VALUES ($1, $2, $3)"#,
            )
            .bind(order_id)
            .bind(&item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;

            item.id = result.last_insert_rowid();
            item.order_id = order_id;
        }

        tx.commit().await?;
        Ok(order)
    }

    /// Look up an order by id, eagerly loading its items.
    ///
    /// `Ok(None)` is the explicit not-found signal, not an error.
    pub async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, StorageError> {
        let row = sqlx::query(
            r#"SELECT order_id, customer_name, created_at
               FROM orders WHERE order_id = $1"#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        // Surrogate ids are monotonic, so this preserves insertion order
        let items: Vec<OrderItem> = sqlx::query_as(
            r#"SELECT id, order_id, product_id, quantity
               FROM order_items WHERE order_id = $1 ORDER BY id"#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Order {
            order_id: row.get("order_id"),
            customer_name: row.get("customer_name"),
            created_at: row.get("created_at"),
            items,
        }))
    }
}
