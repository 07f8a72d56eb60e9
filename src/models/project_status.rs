//! Project status model.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

use crate::client::Requester;
use crate::error::Result;
use crate::pagination::Page;
use crate::traits::{Get, List};

/// Resource path for project statuses.
pub const PROJECT_STATUSES: &str = "projectstatuses";

/// A status a project can be in, such as "In progress" or "Done".
///
/// A status may carry its own ordered list of child statuses; absent means
/// `None`, not an empty list.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct ProjectStatus {
    #[serde_as(as = "DefaultOnNull")]
    id: String,

    #[serde_as(as = "DefaultOnNull")]
    name: String,

    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    status_type: String,

    #[serde_as(as = "DefaultOnNull")]
    billable_by_default: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    project_statuses: Option<Vec<ProjectStatus>>,
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        ProjectStatus::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        super::from_object(deserializer, |value| ProjectStatus::deserialize(value))
    }
}

impl ProjectStatus {
    /// Build a status (and its children) from its JSON representation.
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(<Self as Deserialize>::deserialize(value)?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The status category, e.g. "progress" or "closed".
    pub fn status_type(&self) -> &str {
        &self.status_type
    }

    pub fn billable_by_default(&self) -> bool {
        self.billable_by_default
    }

    pub fn project_statuses(&self) -> Option<&[ProjectStatus]> {
        self.project_statuses.as_deref()
    }
}

#[async_trait]
impl Get for ProjectStatus {
    type Id = String;

    #[tracing::instrument(skip(api))]
    async fn get(api: &dyn Requester, id: String) -> Result<Self> {
        let path = format!("{PROJECT_STATUSES}/{}", urlencoding::encode(&id));
        api.get(&path).await?.deserialize()
    }
}

#[async_trait]
impl List for ProjectStatus {
    #[tracing::instrument(skip(api))]
    async fn list(api: &dyn Requester) -> Result<Vec<Self>> {
        api.get(PROJECT_STATUSES).await?.deserialize()
    }

    #[tracing::instrument(skip(api))]
    async fn list_page(api: &dyn Requester, page: u32, page_size: u32) -> Result<Page<Self>> {
        super::fetch_page(api, PROJECT_STATUSES, page, page_size).await
    }
}
