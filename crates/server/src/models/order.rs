//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use storekeeper_core::{OrderId, OrderStatus, ProductId, UserId};

/// A stored order.
///
/// `user_id` and `product_id` are references: the order does not own the
/// user or product, and the store does not check that they exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Store-assigned identity.
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Set by the store when the order is created.
    pub order_date: DateTime<Utc>,
    /// `"Pending"` for every order this service creates.
    pub status: OrderStatus,
}

/// Fields supplied when creating or replacing an order.
///
/// Any `order_date` or `status` in the request body is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_id: ProductId,
}
