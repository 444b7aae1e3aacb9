//! Order handlers.
//!
//! Creation ignores any `status` or `order_date` in the body. Replacement
//! rewrites the user and product references and keeps the stored date and
//! status.

use axum::{Json, extract::State};

use storekeeper_core::OrderId;

use crate::error::{AppError, Entity, Result};
use crate::extract::{ValidJson, ValidPath};
use crate::models::{NewOrder, Order};
use crate::state::AppState;

/// Create an order.
///
/// # Errors
///
/// Returns `AppError::Database` if the insert fails.
pub async fn create_order(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewOrder>,
) -> Result<Json<Order>> {
    let order = state.orders().insert(input).await?;
    Ok(Json(order))
}

/// Get an order by id.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no order has this id.
pub async fn get_order(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<OrderId>,
) -> Result<Json<Order>> {
    state
        .orders()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Entity::Order, id))
}

/// Replace an order's user and product references.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no order has this id.
pub async fn update_order(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<OrderId>,
    ValidJson(input): ValidJson<NewOrder>,
) -> Result<Json<Order>> {
    state
        .orders()
        .update(id, input)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Entity::Order, id))
}

/// Delete an order, returning the removed row.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no order has this id.
pub async fn delete_order(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<OrderId>,
) -> Result<Json<Order>> {
    state
        .orders()
        .delete_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Entity::Order, id))
}
