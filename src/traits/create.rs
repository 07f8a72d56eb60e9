//! Create trait for adding new entities.

use async_trait::async_trait;

use crate::client::Requester;
use crate::error::Result;

/// Create a new entity.
///
/// # Example
///
/// ```ignore
/// use awork::{AworkClient, Create, Task, TaskParams};
///
/// let client = AworkClient::from_env()?;
/// let task = Task::create(
///     &client,
///     TaskParams {
///         name: Some("Write release notes".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Request body for the new entity.
    type Params: Send;

    /// Create the entity and return it as stored by the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not
    /// describe an entity.
    async fn create(api: &dyn Requester, params: Self::Params) -> Result<Self>;
}
