//! Test server harness for E2E testing
//!
//! Provides TestAuthServer for spawning real token auth server instances in
//! tests, with the clock pinned so time-dependent flows are deterministic.

use crate::crypto_fixtures::{demo_directory, fixed_clock, test_token_service};
use common::clock::FixedClock;
use std::net::SocketAddr;
use std::sync::Arc;
use token_auth::handlers::auth_handler::AppState;
use token_auth::models::LoginResponse;
use token_auth::routes;
use tokio::task::JoinHandle;

/// Test harness for spawning the token auth server in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_login_flow_e2e() -> Result<()> {
///     let server = TestAuthServer::spawn().await?;
///     let jwt = server.login("admin", "admin").await?;
///
///     server.clock().advance(3601);
///     // jwt is now expired
///     Ok(())
/// }
/// ```
pub struct TestAuthServer {
    addr: SocketAddr,
    clock: Arc<FixedClock>,
    client: reqwest::Client,
    _handle: JoinHandle<()>,
}

impl TestAuthServer {
    /// Spawn a new test server instance
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Sign with the fixed test secret
    /// - Read time from a clock pinned to `FIXED_NOW`
    /// - Serve the demo user directory
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let clock = fixed_clock();

        let state = Arc::new(AppState {
            tokens: Arc::new(test_token_service(clock.clone())),
            directory: Arc::new(demo_directory()),
        });

        let app = routes::build_routes(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            clock,
            client: reqwest::Client::new(),
            _handle: handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The server's clock; move it to age issued tokens
    pub fn clock(&self) -> &Arc<FixedClock> {
        &self.clock
    }

    /// Shared HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Exchange credentials for a signed token via `POST /auth/jwt`
    pub async fn login(&self, username: &str, password: &str) -> Result<String, anyhow::Error> {
        let response = self
            .client
            .post(format!("{}/auth/jwt", self.url()))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?
            .error_for_status()?;

        let body: LoginResponse = response.json().await?;
        Ok(body.jwt)
    }

    /// Call a `/whoami/*` endpoint with the given `Authorization` value
    pub async fn whoami(
        &self,
        scheme: &str,
        authorization: Option<&str>,
    ) -> Result<reqwest::Response, anyhow::Error> {
        let mut request = self.client.get(format!("{}/whoami/{}", self.url(), scheme));
        if let Some(value) = authorization {
            request = request.header("authorization", value);
        }
        Ok(request.send().await?)
    }
}

impl Drop for TestAuthServer {
    fn drop(&mut self) {
        self._handle.abort();
    }
}
