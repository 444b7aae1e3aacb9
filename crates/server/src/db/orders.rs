//! Order repository for database operations.
//!
//! The repository owns the defaulting policy for orders: new rows always get
//! the current UTC time as `order_date` and `"Pending"` as `status`, and a
//! replacement only rewrites the user and product references.

use chrono::Utc;
use sqlx::SqlitePool;

use storekeeper_core::{OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::{NewOrder, Order};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new order stamped with the current time and a pending status.
    ///
    /// The referenced user and product are not checked.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let created = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, product_id, order_date, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, product_id, order_date, status
            ",
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(Utc::now())
        .bind(OrderStatus::pending())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(
            order_id = %created.id,
            user_id = %created.user_id,
            product_id = %created.product_id,
            "Order created"
        );
        Ok(created)
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, product_id, order_date, status
            FROM orders
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Replace the user and product references of an order.
    ///
    /// `order_date` and `status` keep their stored values. Returns `None` if
    /// no order has this id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: OrderId,
        order: NewOrder,
    ) -> Result<Option<Order>, RepositoryError> {
        let updated = sqlx::query_as::<_, Order>(
            r"
            UPDATE orders
            SET user_id = ?, product_id = ?
            WHERE id = ?
            RETURNING id, user_id, product_id, order_date, status
            ",
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        if updated.is_some() {
            tracing::info!(order_id = %id, "Order updated");
        } else {
            tracing::debug!(order_id = %id, "Order update matched no row");
        }
        Ok(updated)
    }

    /// Delete an order and return the row that was removed.
    ///
    /// Returns `None` if no order has this id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let deleted = sqlx::query_as::<_, Order>(
            r"
            DELETE FROM orders
            WHERE id = ?
            RETURNING id, user_id, product_id, order_date, status
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        if deleted.is_some() {
            tracing::info!(order_id = %id, "Order deleted");
        }
        Ok(deleted)
    }
}
