//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check (database reachable)
//!
//! # Users
//! POST   /users/               - Create user
//! GET    /users/{id}           - Get user
//!
//! # Products
//! POST   /products/            - Create product
//! GET    /products/{id}        - Get product
//!
//! # Orders
//! POST   /orders/              - Create order (status "Pending", dated now)
//! GET    /orders/{id}          - Get order
//! PUT    /orders/{id}          - Replace order references
//! DELETE /orders/{id}          - Delete order
//! ```
//!
//! Paths are matched with or without a trailing slash.

pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{id}", get(users::get_user))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create_product))
        .route("/{id}", get(products::get_product))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create_order)).route(
        "/{id}",
        get(orders::get_order)
            .put(orders::update_order)
            .delete(orders::delete_order),
    )
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/users", user_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
}
