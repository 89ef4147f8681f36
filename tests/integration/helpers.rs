//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use bytes::Bytes;
use serde_json::Value;
use tower::ServiceExt;

use notebin_api::{AppState, build_app};
use notebin_core::config::AppConfig;
use notebin_core::error::AppError;
use notebin_core::result::AppResult;
use notebin_core::traits::blob::{BlobMeta, BlobStore};
use notebin_entity::share::Share;
use notebin_storage::{MemoryBlobStore, ShareIndex};

/// Admin credentials used by [`TestApp::login_admin`].
pub const ADMIN_USER: &str = "admin";
/// Admin password used by [`TestApp::login_admin`].
pub const ADMIN_PASS: &str = "s3cret:pass";

/// In-memory store whose reads or writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryBlobStore,
    fail_puts: AtomicBool,
    fail_gets: AtomicBool,
}

impl FlakyStore {
    /// Make every write fail (or succeed again)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    /// Make every read fail (or succeed again)
    pub fn fail_reads(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStore for FlakyStore {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn get(&self, key: &str) -> AppResult<Option<Bytes>> {
        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(AppError::storage("read failed"));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(AppError::storage("write failed"));
        }
        self.inner.put(key, data).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn list(&self, limit: usize) -> AppResult<Vec<BlobMeta>> {
        self.inner.list(limit).await
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Blob store backing the app, for direct inspection
    pub store: Arc<FlakyStore>,
    /// Share index over the same store
    pub shares: ShareIndex,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application on an in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.storage.provider = "memory".to_string();
        config.server.public_origin = Some("http://notes.test".to_string());

        let store = Arc::new(FlakyStore::default());
        let dyn_store: Arc<dyn BlobStore> = store.clone();
        let state = AppState::new(config.clone(), Arc::clone(&dyn_store));

        Self {
            router: build_app(state),
            shares: ShareIndex::new(dyn_store),
            store,
            config,
        }
    }

    /// Run setup and log in, returning the session token from the body
    pub async fn login_admin(&self) -> String {
        let creds = serde_json::json!({ "username": ADMIN_USER, "password": ADMIN_PASS });
        let setup = self.request("POST", "/api/setup", Some(creds.clone()), None).await;
        assert_eq!(setup.status, StatusCode::OK, "Setup failed: {}", setup.text);

        let response = self.request("POST", "/api/login", Some(creds), None).await;
        assert_eq!(response.status, StatusCode::OK, "Login failed: {}", response.text);

        response.body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Store a content blob directly
    pub async fn put_content(&self, id: &str, text: &str) {
        self.store
            .put(id, Bytes::from(text.to_string()))
            .await
            .expect("Failed to put content");
    }

    /// Insert a share record directly, bypassing the API
    pub async fn put_share(&self, share: &Share) {
        self.shares.put(share).await.expect("Failed to put share");
    }

    /// Create a share through the API and return its token
    pub async fn create_share(&self, session: &str, body: Value) -> String {
        let response = self
            .request("POST", "/api/share/create", Some(body), Some(session))
            .await;
        assert_eq!(response.status, StatusCode::OK, "Create failed: {}", response.text);
        response.body["token"]
            .as_str()
            .expect("No token in create response")
            .to_string()
    }

    /// Current view count of a share
    pub async fn views(&self, token: &str) -> Option<u32> {
        self.shares
            .get(token)
            .await
            .expect("Failed to read share")
            .map(|s| s.views)
    }

    /// Wait for detached view increments to land
    pub async fn wait_for_views(&self, token: &str, expected: u32) {
        for _ in 0..100 {
            if self.views(token).await == Some(expected) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "views for {token} never reached {expected}, got {:?}",
            self.views(token).await
        );
    }

    /// Make a JSON request, authenticating with the access-token header
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        session: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(session) = session {
            req = req.header(self.config.session.header_name.as_str(), session);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Submit the share page password form
    pub async fn submit_password(&self, path: &str, password: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("password={password}")))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
}

impl TestResponse {
    /// A response header as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Value of a cookie set by this response, as sent on the wire
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| key.trim() == name)
            .map(|(_, value)| value.to_string())
    }

    /// Full `Set-Cookie` header line for a cookie
    pub fn set_cookie_line(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{name}=")))
            .map(String::from)
    }
}
