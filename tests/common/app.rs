//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use ral_palette::ReferenceTable;
use ralmatch::server::{build_router, AppState};
use ralmatch::services::TableStore;

use super::fixtures;

/// Test application with router and direct access to the table store
pub struct TestApp {
    router: axum::Router,
    pub store: Arc<TableStore>,
}

impl TestApp {
    /// Create a test application loaded with the fixture table
    pub fn new() -> Self {
        Self::with_table(fixtures::sample_table())
    }

    /// Create a test application loaded with `table`
    pub fn with_table(table: ReferenceTable) -> Self {
        Self::from_store(TableStore::with_table(table, "fixture"))
    }

    /// Create a test application whose table has not been loaded yet
    pub fn unloaded() -> Self {
        Self::from_store(TableStore::new())
    }

    fn from_store(store: TableStore) -> Self {
        let store = Arc::new(store);

        // Build router using shared server module (same as production)
        let router = build_router(AppState::new(store.clone()));

        Self { router, store }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a GET request with custom headers
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::get(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
