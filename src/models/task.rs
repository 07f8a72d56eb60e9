//! Task model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

use crate::client::Requester;
use crate::error::Result;
use crate::pagination::Page;
use crate::response::ApiResponse;
use crate::traits::{Create, Get, List, Update};

/// Resource path for tasks.
pub const TASKS: &str = "tasks";

/// An awork task.
///
/// Tasks are either private (`baseType` "private") or belong to a project
/// (`baseType` "projecttask", with the project in `entityId`). Missing or
/// `null` fields take their defaults: empty strings, `false`, or `None`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", default)]
pub struct Task {
    #[serde_as(as = "DefaultOnNull")]
    id: String,

    #[serde_as(as = "DefaultOnNull")]
    name: String,

    #[serde_as(as = "DefaultOnNull")]
    description: String,

    #[serde_as(as = "DefaultOnNull")]
    base_type: String,

    #[serde_as(as = "DefaultOnNull")]
    entity_id: String,

    #[serde_as(as = "DefaultOnNull")]
    is_prio: bool,

    #[serde_as(as = "DefaultOnNull")]
    task_status_id: String,

    #[serde_as(as = "DefaultOnNull")]
    type_of_work_id: String,

    /// Planned effort in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    planned_duration: Option<u64>,

    /// Remaining effort in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining_duration: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    start_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    due_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    updated_on: Option<DateTime<Utc>>,

    #[serde_as(as = "DefaultOnNull")]
    created_by: String,

    #[serde_as(as = "DefaultOnNull")]
    updated_by: String,
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        Task::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        super::from_object(deserializer, |value| Task::deserialize(value))
    }
}

impl Task {
    /// Build a task from its JSON representation.
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(<Self as Deserialize>::deserialize(value)?)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// "private" or "projecttask".
    pub fn base_type(&self) -> &str {
        &self.base_type
    }

    /// The project (or user, for private tasks) the task belongs to.
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn is_prio(&self) -> bool {
        self.is_prio
    }

    pub fn task_status_id(&self) -> &str {
        &self.task_status_id
    }

    pub fn type_of_work_id(&self) -> &str {
        &self.type_of_work_id
    }

    pub fn planned_duration(&self) -> Option<u64> {
        self.planned_duration
    }

    pub fn remaining_duration(&self) -> Option<u64> {
        self.remaining_duration
    }

    pub fn start_on(&self) -> Option<DateTime<Utc>> {
        self.start_on
    }

    pub fn due_on(&self) -> Option<DateTime<Utc>> {
        self.due_on
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    pub fn updated_on(&self) -> Option<DateTime<Utc>> {
        self.updated_on
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }

    /// Move this single task to another task status.
    pub async fn change_status(
        api: &dyn Requester,
        task_id: &str,
        status_id: &str,
    ) -> Result<ApiResponse> {
        change_task_statuses(api, &[TaskStatusChange::new(task_id, status_id)]).await
    }
}

/// Body for creating or updating a task.
///
/// Unset fields are left out of the request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_prio: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_status_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_work_id: Option<String>,

    /// Planned effort in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_duration: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
}

/// One command of a bulk task status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusChange {
    pub task_id: String,
    pub status_id: String,
}

impl TaskStatusChange {
    pub fn new(task_id: impl Into<String>, status_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status_id: status_id.into(),
        }
    }
}

/// Change the status of several tasks at once.
///
/// awork answers with no single-task body, so the validated response is
/// returned as-is.
#[tracing::instrument(skip(api))]
pub async fn change_task_statuses(
    api: &dyn Requester,
    changes: &[TaskStatusChange],
) -> Result<ApiResponse> {
    let body = serde_json::to_value(changes)?;
    api.post(&format!("{TASKS}/changestatuses"), &body).await
}

fn task_path(id: &str) -> String {
    format!("{TASKS}/{}", urlencoding::encode(id))
}

#[async_trait]
impl Get for Task {
    type Id = String;

    #[tracing::instrument(skip(api))]
    async fn get(api: &dyn Requester, id: String) -> Result<Self> {
        api.get(&task_path(&id)).await?.deserialize()
    }
}

#[async_trait]
impl Create for Task {
    type Params = TaskParams;

    #[tracing::instrument(skip(api))]
    async fn create(api: &dyn Requester, params: TaskParams) -> Result<Self> {
        let body = serde_json::to_value(&params)?;
        api.post(TASKS, &body).await?.deserialize()
    }
}

#[async_trait]
impl Update for Task {
    type Id = String;
    type Params = TaskParams;

    #[tracing::instrument(skip(api))]
    async fn update(api: &dyn Requester, id: String, params: TaskParams) -> Result<Self> {
        let body = serde_json::to_value(&params)?;
        api.put(&task_path(&id), &body).await?.deserialize()
    }
}

#[async_trait]
impl List for Task {
    #[tracing::instrument(skip(api))]
    async fn list(api: &dyn Requester) -> Result<Vec<Self>> {
        api.get(TASKS).await?.deserialize()
    }

    #[tracing::instrument(skip(api))]
    async fn list_page(api: &dyn Requester, page: u32, page_size: u32) -> Result<Page<Self>> {
        super::fetch_page(api, TASKS, page, page_size).await
    }
}
