//! Shared world state for message lifecycle BDD scenarios.

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Request, StatusCode},
};
use pigeon::{app, http};
use rstest::fixture;
use tower::ServiceExt;

/// Status and body of the most recent response.
pub struct LastResponse {
    /// Response status.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Bytes,
}

/// Scenario world for message lifecycle behaviour tests.
pub struct MessageWorld {
    /// Router over a fresh in-memory service.
    pub router: Router,
    /// Identifier returned by the most recent successful create.
    pub created_id: Option<String>,
    /// Most recent response.
    pub last_response: Option<LastResponse>,
}

impl MessageWorld {
    /// Creates a world backed by an empty in-memory service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: http::router(app::in_memory_use_case()),
            created_id: None,
            last_response: None,
        }
    }

    /// Sends `request` through the router and records the response.
    pub fn send(&mut self, request: Request<Body>) -> Result<&LastResponse, eyre::Report> {
        let router = self.router.clone();
        let recorded = run_async(async move {
            let response = router.oneshot(request).await?;
            let status = response.status();
            let body = to_bytes(response.into_body(), 1024 * 1024).await?;
            Ok::<_, eyre::Report>(LastResponse { status, body })
        })?;
        Ok(self.last_response.insert(recorded))
    }

    /// Returns the most recent response.
    pub fn last(&self) -> Result<&LastResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been sent in this scenario"))
    }

    /// Returns the identifier of the created message.
    pub fn created_id(&self) -> Result<&str, eyre::Report> {
        self.created_id
            .as_deref()
            .ok_or_else(|| eyre::eyre!("no message has been created in this scenario"))
    }
}

impl Default for MessageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
