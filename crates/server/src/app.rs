//! Router assembly and serving.
//!
//! `main` and the integration tests both go through [`connect`], [`router`]
//! and [`serve`], so the tested stack is the deployed stack.

use std::future::Future;

use axum::{Router, ServiceExt, extract::Request, middleware};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use tracing::Span;

use crate::config::ServerConfig;
use crate::db::{self, RepositoryError};
use crate::middleware::request_id_middleware;
use crate::routes;
use crate::state::AppState;

/// Create the pool, apply migrations if configured, and build the state.
///
/// # Errors
///
/// Returns `RepositoryError` if the database cannot be opened or migrated.
pub async fn connect(config: &ServerConfig) -> Result<AppState, RepositoryError> {
    let pool = db::create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Database pool created");

    if config.run_migrations {
        db::run_migrations(&pool).await?;
    } else {
        tracing::info!("Skipping migrations at startup");
    }

    Ok(AppState::new(pool))
}

/// Build the application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    routes::routes()
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Serve the application on `listener` until `shutdown` resolves.
///
/// Trailing slashes are trimmed before routing, so `/users/` and `/users`
/// reach the same handler.
///
/// # Errors
///
/// Returns `std::io::Error` if the server fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = NormalizePathLayer::trim_trailing_slash().layer(router(state));

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Request span carrying method, path and an initially empty `request_id`.
fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt as _;

    use super::*;
    use crate::middleware::REQUEST_ID_HEADER;

    async fn test_state() -> AppState {
        connect(&ServerConfig::in_memory()).await.unwrap()
    }

    async fn send(
        state: &AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let app = NormalizePathLayer::trim_trailing_slash().layer(router(state.clone()));
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_trailing_slash_is_optional() {
        let state = test_state().await;
        let product = json!({"name": "Widget", "description": "d", "price": 9.99});

        let (status, _) = send(&state, Method::POST, "/products/", Some(product.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&state, Method::POST, "/products", Some(product)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&state, Method::GET, "/products/2/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 2);
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let state = test_state().await;
        let (status, body) = send(
            &state,
            Method::POST,
            "/users/",
            Some(json!({"first_name": "A", "last_name": "B", "password": "x"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn test_wrong_type_is_validation_error() {
        let state = test_state().await;
        let (status, body) = send(
            &state,
            Method::POST,
            "/products/",
            Some(json!({"name": "Widget", "description": "d", "price": "cheap"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_validation_error() {
        let state = test_state().await;
        let (status, body) = send(&state, Method::GET, "/orders/abc", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "id");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let state = test_state().await;
        let app = router(state);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_fails_when_pool_closed() {
        let state = test_state().await;
        state.pool().close().await;

        let response = router(state)
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let state = test_state().await;
        let app = router(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_eq!(generated.len(), 36);
    }

    #[tokio::test]
    async fn test_unknown_order_returns_not_found_for_every_method() {
        let state = test_state().await;
        let references = json!({"user_id": 1, "product_id": 1});

        for (method, body) in [
            (Method::GET, None),
            (Method::PUT, Some(references.clone())),
            (Method::DELETE, None),
        ] {
            let (status, body) = send(&state, method, "/orders/42", body).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["entity"], "order");
            assert_eq!(body["id"], 42);
        }
    }
}
