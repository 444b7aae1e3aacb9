//! Product handlers.

use axum::{Json, extract::State};

use storekeeper_core::ProductId;

use crate::error::{AppError, Entity, Result};
use crate::extract::{ValidJson, ValidPath};
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Create a product.
///
/// # Errors
///
/// Returns `AppError::Database` if the insert fails.
pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewProduct>,
) -> Result<Json<Product>> {
    let product = state.products().insert(input).await?;
    Ok(Json(product))
}

/// Get a product by id.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this id.
pub async fn get_product(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<ProductId>,
) -> Result<Json<Product>> {
    state
        .products()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(Entity::Product, id))
}
