//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::Requester;
use crate::error::Result;

/// Update an existing entity.
///
/// # Example
///
/// ```ignore
/// use awork::{AworkClient, Task, TaskParams, Update};
///
/// let client = AworkClient::from_env()?;
/// let updated = Task::update(
///     &client,
///     task_id,
///     TaskParams {
///         is_prio: Some(true),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Parameters for the update.
    type Params: Send;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(api: &dyn Requester, id: Self::Id, params: Self::Params) -> Result<Self>;
}
