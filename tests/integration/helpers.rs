//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use stockroom_api::{AppState, build_app};
use stockroom_core::config::{AppConfig, StoreProvider};
use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_database::{MemoryProductStore, ProductStore};
use stockroom_entity::{Product, ProductDraft};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The backing store, for direct assertions
    pub store: Arc<MemoryProductStore>,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryProductStore::new());
        let router = build_app(AppState::new(test_config(), store.clone()));
        Self { router, store }
    }

    /// Create a product through the API and return its id
    pub async fn create_product(&self, name: &str) -> Uuid {
        let response = self
            .request("POST", "/api/products", Some(product_body(name)))
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );

        response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No id in create response")
    }

    /// Make an HTTP request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        send(&self.router, method, path, body).await
    }
}

/// A router whose store fails every call
pub fn broken_router() -> Router {
    build_app(AppState::new(test_config(), Arc::new(BrokenStore)))
}

/// Send one request through a router
pub async fn send(router: &Router, method: &str, path: &str, body: String) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// A complete, valid product payload
pub fn product_body(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "quantity": 10,
        "pricePerQuantity": 5,
        "costprice": 50,
        "unit": "kg",
        "shopname": "A1",
    })
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = StoreProvider::Memory;
    config
}

/// Store that is always down
#[derive(Debug)]
struct BrokenStore;

fn down() -> AppError {
    AppError::database("Store is down")
}

#[async_trait]
impl ProductStore for BrokenStore {
    async fn insert(&self, _draft: &ProductDraft) -> AppResult<Product> {
        Err(down())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Err(down())
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Product>> {
        Err(down())
    }

    async fn find_by_name(&self, _name: &str) -> AppResult<Option<Product>> {
        Err(down())
    }

    async fn replace(&self, _id: Uuid, _draft: &ProductDraft) -> AppResult<Option<Product>> {
        Err(down())
    }

    async fn delete(&self, _id: Uuid) -> AppResult<Option<Product>> {
        Err(down())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }

    async fn close(&self) {}
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of an error body
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}
