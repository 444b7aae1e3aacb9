//! Integration tests for the `/orders` endpoints.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use serde_json::{Value, json};
use storekeeper_integration_tests::{TestServer, body_json};

async fn seed(server: &TestServer) {
    for email in ["one@example.com", "two@example.com"] {
        let response = server
            .post(
                "/users/",
                &json!({"first_name": "F", "last_name": "L", "email": email, "password": "p"}),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    for name in ["Widget", "Gadget"] {
        let response = server
            .post(
                "/products/",
                &json!({"name": name, "description": "d", "price": 2.5}),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

fn order_date(order: &Value) -> DateTime<Utc> {
    order["order_date"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_create_order_ignores_caller_status_and_date() {
    let server = TestServer::start().await;
    seed(&server).await;

    let before = Utc::now();
    let response = server
        .post(
            "/orders/",
            &json!({
                "user_id": 1,
                "product_id": 2,
                "status": "Shipped",
                "order_date": "2001-01-01T00:00:00Z"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let order = body_json(response).await;

    assert_eq!(order["status"], "Pending");
    assert_eq!(order["user_id"], 1);
    assert_eq!(order["product_id"], 2);

    let date = order_date(&order);
    assert!(date >= before - Duration::seconds(5));
    assert!(date <= Utc::now() + Duration::seconds(5));

    server.stop().await;
}

#[tokio::test]
async fn test_update_then_get_returns_new_references() {
    let server = TestServer::start().await;
    seed(&server).await;

    let created = body_json(
        server
            .post("/orders/", &json!({"user_id": 1, "product_id": 1}))
            .await,
    )
    .await;

    let update = json!({"user_id": 2, "product_id": 2});
    let response = server.put("/orders/1", &update).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["id"], 1);
    assert_eq!(updated["user_id"], 2);
    assert_eq!(updated["product_id"], 2);
    assert_eq!(updated["status"], created["status"]);
    assert_eq!(updated["order_date"], created["order_date"]);

    let fetched = body_json(server.get("/orders/1").await).await;
    assert_eq!(fetched, updated);

    // Applying the same update again leaves the stored state unchanged.
    let again = body_json(server.put("/orders/1", &update).await).await;
    assert_eq!(again, fetched);
    assert_eq!(body_json(server.get("/orders/1").await).await, fetched);
}

#[tokio::test]
async fn test_update_does_not_check_references() {
    let server = TestServer::start().await;
    seed(&server).await;
    server
        .post("/orders/", &json!({"user_id": 1, "product_id": 1}))
        .await;

    let response = server
        .put("/orders/1", &json!({"user_id": 404, "product_id": 404}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], 404);
}

#[tokio::test]
async fn test_delete_returns_order_and_removes_it() {
    let server = TestServer::start().await;
    seed(&server).await;

    let created = body_json(
        server
            .post("/orders/", &json!({"user_id": 2, "product_id": 1}))
            .await,
    )
    .await;

    let response = server.delete("/orders/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = server.get("/orders/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Order not found");

    let response = server.delete("/orders/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_order_ids_are_not_reused() {
    let server = TestServer::start().await;
    seed(&server).await;
    let order = json!({"user_id": 1, "product_id": 1});

    server.post("/orders/", &order).await;
    server.delete("/orders/1").await;
    let next = body_json(server.post("/orders/", &order).await).await;

    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn test_update_missing_order_is_not_found() {
    let server = TestServer::start().await;

    let response = server
        .put("/orders/7", &json!({"user_id": 1, "product_id": 1}))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["entity"], "order");
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn test_non_numeric_order_id_is_validation_error() {
    let server = TestServer::start().await;

    let response = server.get("/orders/first").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "id");
}
