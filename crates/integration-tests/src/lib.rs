//! Integration tests for Storekeeper.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storekeeper-integration-tests
//! ```
//!
//! Each test starts its own server on `127.0.0.1:0` backed by an in-memory
//! database, so tests need no external services and never share state.
//!
//! # Test Categories
//!
//! - `users` - User creation, lookup and email uniqueness
//! - `products` - Product creation and lookup
//! - `orders` - Order lifecycle and defaulting
//! - `scenario` - End-to-end walkthrough across all three entities

use std::net::SocketAddr;

use reqwest::{Client, Response};
use serde_json::Value;
use storekeeper_server::{app, config::ServerConfig};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server running inside the test process.
pub struct TestServer {
    pub client: Client,
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestServer {
    /// Start a server with a fresh in-memory database.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn start() -> Self {
        let state = app::connect(&ServerConfig::in_memory())
            .await
            .expect("Failed to open test database");
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(app::serve(listener, state, async {
            let _ = rx.await;
        }));

        Self {
            client: Client::new(),
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// `GET path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// `POST path` with a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    /// `DELETE path`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    /// Stop the server and wait for it to finish.
    ///
    /// # Panics
    ///
    /// Panics if the server task failed.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("Server task panicked")
                .expect("Server returned an error");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: Response) -> Value {
    response.json().await.expect("Response body is not JSON")
}
