//! Mock awork API server.
//!
//! Provides an axum-based HTTP server that simulates the awork API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock awork API server for testing.
///
/// The server runs in the background and can be used to test the awork
/// client against a realistic API implementation. Routes live under `/v1`,
/// so pass [`url`](Self::url) to
/// [`AworkClient::with_base_url`](crate::AworkClient::with_base_url).
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows inspecting or modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    pub(crate) fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for task in scenario.tasks {
            state = state.with_task(task);
        }

        for status in scenario.project_statuses {
            state = state.with_project_status(status);
        }

        state
    }

    /// Create the axum router with all routes.
    pub(crate) fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Task routes
            .route(
                "/v1/tasks",
                get(handlers::list_tasks).post(handlers::create_task),
            )
            .route(
                "/v1/tasks/changestatuses",
                post(handlers::change_task_statuses),
            )
            .route(
                "/v1/tasks/:id",
                get(handlers::get_task).put(handlers::update_task),
            )
            // Project status routes
            .route("/v1/projectstatuses", get(handlers::list_project_statuses))
            .route(
                "/v1/projectstatuses/:id",
                get(handlers::get_project_status),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
