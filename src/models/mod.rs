//! awork API model types.

mod project_status;
mod task;

pub use project_status::*;
pub use task::*;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::client::Requester;
use crate::error::Result;
use crate::pagination::Page;

/// Fetch one page of a list endpoint, keeping the session filter and order.
pub(crate) async fn fetch_page<T: DeserializeOwned + Send>(
    api: &dyn Requester,
    path: &str,
    page: u32,
    page_size: u32,
) -> Result<Page<T>> {
    let query = api
        .query_parameters()
        .clone()
        .with_page(page)
        .with_page_size(page_size);

    let items: Vec<T> = api.get_with_query(path, &query).await?.deserialize()?;
    Ok(Page::new(items, page, page_size))
}

/// Read a model from a JSON object only.
///
/// Derived struct visitors also accept arrays and fill fields by position;
/// reading into a map first turns that into a type error.
pub(crate) fn from_object<'de, D, T>(
    deserializer: D,
    read: fn(Value) -> serde_json::Result<T>,
) -> core::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = Map::<String, Value>::deserialize(deserializer)?;
    read(Value::Object(fields)).map_err(de::Error::custom)
}
