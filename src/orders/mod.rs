//! Order management module
//!
//! SQLite-based storage for customer orders and their line items.

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::StorageError;
pub use models::{Order, OrderItem};
pub use repository::OrderRepository;
pub use service::OrderService;

// Re-export Database from top-level db module
pub use crate::db::Database;
