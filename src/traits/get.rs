//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::Requester;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use awork::{AworkClient, Get, Task};
///
/// let client = AworkClient::from_env()?;
/// let task = Task::get(&client, "b1c3...".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`](crate::AworkError::NotFound) if the entity does
    /// not exist, or any other error the request produced.
    async fn get(api: &dyn Requester, id: Self::Id) -> Result<Self>;
}
