//! Test helpers for integration tests
//!
//! Provides a self-contained test server and response assertions.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use confession_api::server::{create_app, create_app_state};
use confession_api::state::AppState;
use confession_common::AppConfig;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Header the server trusts for the client address
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on the in-memory store with stock limits
    pub async fn start() -> Result<Self> {
        Self::start_with_config(AppConfig::in_memory()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(&config).await?;
        let app = create_app(state.clone(), &config);

        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request builder for any method
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url(), path))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path).send().await?)
    }

    /// Make a POST request with JSON body from the given client address
    pub async fn post_as<T: Serialize>(&self, ip: &str, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(Method::POST, path)
            .header(FORWARDED_FOR, ip)
            .json(body)
            .send()
            .await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert an error response carrying exactly `{"error": message}`
pub async fn assert_error(response: Response, expected_status: StatusCode, message: &str) -> Result<()> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    if body != serde_json::json!({ "error": message }) {
        anyhow::bail!("Expected error {message:?}, got {body}");
    }
    Ok(())
}
