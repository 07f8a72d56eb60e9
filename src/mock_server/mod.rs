//! Mock awork API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the awork
//! API for integration and end-to-end testing. Unlike wiremock which mocks
//! at the HTTP level per-test, this server maintains state across requests,
//! enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use awork::mock_server::MockServer;
//! use awork::{AworkClient, Get, Task};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = AworkClient::with_base_url("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let task = Task::get(&client, "task-1".to_string()).await.unwrap();
//!     assert_eq!(task.name(), "Prepare kickoff");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
