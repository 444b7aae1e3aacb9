//! Integration tests for the `/products` endpoints.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::json;
use storekeeper_integration_tests::{TestServer, body_json};

#[tokio::test]
async fn test_create_product_then_get() {
    let server = TestServer::start().await;

    let response = server
        .post(
            "/products/",
            &json!({"name": "Widget", "description": "A widget", "price": 9.99}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Widget");
    assert!((created["price"].as_f64().unwrap() - 9.99).abs() < f64::EPSILON);

    let fetched = body_json(server.get("/products/1").await).await;
    assert_eq!(fetched, created);

    server.stop().await;
}

#[tokio::test]
async fn test_product_ids_increase() {
    let server = TestServer::start().await;
    let product = json!({"name": "Widget", "description": "d", "price": 1.0});

    let first = body_json(server.post("/products/", &product).await).await;
    let second = body_json(server.post("/products/", &product).await).await;

    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_get_missing_product_is_not_found() {
    let server = TestServer::start().await;

    let response = server.get("/products/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Product not found");
    assert_eq!(body["entity"], "product");
    assert_eq!(body["id"], 5);
}

#[tokio::test]
async fn test_price_must_be_a_number() {
    let server = TestServer::start().await;

    let response = server
        .post(
            "/products/",
            &json!({"name": "Widget", "description": "d", "price": "free"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
