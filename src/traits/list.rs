//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::Requester;
use crate::error::Result;
use crate::pagination::Page;

/// Default page size for [`List::list_all`].
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List entities of a resource.
///
/// Filter and order come from the requester's session query parameters,
/// so set them on the client before listing.
///
/// # Example
///
/// ```ignore
/// use awork::{AworkClient, List, Task};
///
/// let mut client = AworkClient::from_env()?;
/// client.set_filter("isPrio eq true");
///
/// // One page, keeping the session filter
/// let page = Task::list_page(&client, 1, 50).await?;
///
/// // Every page
/// let all = Task::list_all(&client).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// List entities with the session query parameters exactly as set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(api: &dyn Requester) -> Result<Vec<Self>>;

    /// List a single page.
    ///
    /// Session filter and order still apply; `page` and `page_size`
    /// override the session paging for this call only.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_page(api: &dyn Requester, page: u32, page_size: u32) -> Result<Page<Self>>;

    /// List every entity, fetching pages until a short page comes back.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(api: &dyn Requester) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let result = Self::list_page(api, page, DEFAULT_PAGE_SIZE).await?;
            let has_more = result.has_more;
            all_items.extend(result.items);

            if !has_more {
                break;
            }
            page += 1;

            if page > MAX_PAGES {
                tracing::warn!(
                    "Reached pagination limit of {} pages, stopping",
                    MAX_PAGES
                );
                break;
            }
        }

        Ok(all_items)
    }
}
