//! awork API client library.
//!
//! A Rust library for the awork project-management REST API. Every call
//! goes through one pipeline: an authenticated request is built and sent,
//! the response is read in full, logged, and classified into either a
//! validated [`ApiResponse`] or a typed [`AworkError`].
//!
//! # Quick Start
//!
//! ```no_run
//! use awork::{AworkClient, Create, Get, List, ProjectStatus, Task, TaskParams};
//!
//! #[tokio::main]
//! async fn main() -> awork::Result<()> {
//!     // Create client from environment variables
//!     let mut client = AworkClient::from_env()?;
//!
//!     // Create a task
//!     let task = Task::create(
//!         &client,
//!         TaskParams {
//!             name: Some("Write release notes".to_string()),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!     println!("Created: {}", task.id());
//!
//!     // Fetch it again
//!     let task = Task::get(&client, task.id().to_string()).await?;
//!
//!     // Mark it done
//!     Task::change_status(&client, task.id(), "done-status-id").await?;
//!
//!     // Session filters apply to every following GET
//!     client.set_order("name").set_page_size(50);
//!     let statuses = ProjectStatus::list(&client).await?;
//!     println!("Found {} project statuses", statuses.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`AworkClient`] builds requests against `https://api.awork.com/api/v1`
//!   with a bearer token and owns the session [`QueryParameters`].
//! - [`classify`] logs each response at debug level and maps 401, 404 and
//!   other failures to [`AworkError`] variants.
//! - Resource operations are traits ([`Get`], [`Create`], [`Update`],
//!   [`List`]) implemented on model types. They take any [`Requester`].
//!
//! # Query parameters are sticky
//!
//! Filter, order, page and page size set on a client stay in effect for
//! every later GET until they are overwritten or
//! [`AworkClient::reset_query`] is called.
//!
//! # Logging
//!
//! Events are emitted with `tracing`. Without an installed subscriber they
//! are discarded.
//!
//! # Configuration
//!
//! [`AworkClient::from_env`] reads:
//!
//! - `AWORK_API_TOKEN` (required) - Your awork API token
//! - `AWORK_API_URL` (optional) - Base URL (defaults to `https://api.awork.com/api`)

mod client;
mod error;
mod models;
mod pagination;
mod query;
mod response;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{AworkClient, Requester, BASE_URL, VERSION};
pub use error::{AworkError, Result};
pub use pagination::Page;
pub use query::QueryParameters;
pub use response::{classify, json_path, ApiResponse};

// Re-export traits
pub use traits::{Create, Get, List, Update, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    // Task types
    Task,
    TaskParams,
    TaskStatusChange,
    TASKS,
    // Project status types
    ProjectStatus,
    PROJECT_STATUSES,
};

// Re-export convenience functions
pub use models::change_task_statuses;
