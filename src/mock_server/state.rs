//! Mock server state management.
//!
//! Provides the in-memory data store for the mock awork API server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::{ProjectStatus, Task, TaskStatusChange};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Tasks indexed by id. Ordered so list pages are stable.
    pub tasks: BTreeMap<String, Task>,

    /// Top-level project statuses indexed by id.
    pub project_statuses: BTreeMap<String, ProjectStatus>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    /// Query strings received by list endpoints, oldest first.
    pub received_queries: Vec<HashMap<String, String>>,

    next_task_number: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a task to the state.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.insert(task.id().to_string(), task);
        self
    }

    /// Add a project status to the state.
    pub fn with_project_status(mut self, status: ProjectStatus) -> Self {
        self.project_statuses
            .insert(status.id().to_string(), status);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Check an `Authorization` header value against the required token.
    pub fn is_authorized(&self, authorization: Option<&str>) -> bool {
        match &self.required_token {
            None => true,
            Some(token) => authorization
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(|given| given == token.as_str())
                .unwrap_or(false),
        }
    }

    /// Get a task by id.
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Get a project status by id.
    pub fn get_project_status(&self, id: &str) -> Option<&ProjectStatus> {
        self.project_statuses.get(id)
    }

    /// List all tasks in id order.
    pub fn list_tasks(&self) -> Vec<&Task> {
        self.tasks.values().collect()
    }

    /// List all project statuses in id order.
    pub fn list_project_statuses(&self) -> Vec<&ProjectStatus> {
        self.project_statuses.values().collect()
    }

    /// Create a task from a request body, assigning a fresh id.
    pub fn create_task(&mut self, body: &Value) -> serde_json::Result<Task> {
        self.next_task_number += 1;
        let id = format!("created-{}", self.next_task_number);

        let mut fields = body.as_object().cloned().unwrap_or_default();
        fields.insert("id".to_string(), Value::String(id.clone()));

        let task = Task::from_json(&Value::Object(fields)).map_err(into_json_error)?;
        self.tasks.insert(id, task.clone());
        Ok(task)
    }

    /// Apply a partial update to a task.
    ///
    /// Returns `None` if the task does not exist.
    pub fn update_task(&mut self, id: &str, patch: &Value) -> Option<serde_json::Result<Task>> {
        let current = self.tasks.get(id)?;
        let updated = match merge(current, patch) {
            Ok(task) => task,
            Err(e) => return Some(Err(e)),
        };
        self.tasks.insert(id.to_string(), updated.clone());
        Some(Ok(updated))
    }

    /// Move tasks to new statuses.
    ///
    /// Nothing is changed unless every referenced task exists.
    pub fn change_statuses(&mut self, changes: &[TaskStatusChange]) -> Result<(), String> {
        if let Some(missing) = changes.iter().find(|c| !self.tasks.contains_key(&c.task_id)) {
            return Err(format!("Task {} does not exist.", missing.task_id));
        }

        for change in changes {
            let patch = serde_json::json!({ "taskStatusId": change.status_id });
            if let Some(Err(e)) = self.update_task(&change.task_id, &patch) {
                return Err(e.to_string());
            }
        }
        Ok(())
    }
}

/// Overlay the fields of `patch` onto a task. The id never changes.
fn merge(task: &Task, patch: &Value) -> serde_json::Result<Task> {
    let mut fields = match serde_json::to_value(task)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if let Some(patch) = patch.as_object() {
        for (key, value) in patch {
            if key != "id" {
                fields.insert(key.clone(), value.clone());
            }
        }
    }

    Task::from_json(&Value::Object(fields)).map_err(into_json_error)
}

fn into_json_error(err: crate::AworkError) -> serde_json::Error {
    match err {
        crate::AworkError::Parse(e) => e,
        other => serde::de::Error::custom(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;
    use serde_json::json;

    #[test]
    fn test_state_add_and_get_task() {
        let state = MockState::new().with_task(Fixtures::minimal_task("t1", "Test Task"));

        let task = state.get_task("t1");
        assert!(task.is_some());
        assert_eq!(task.unwrap().name(), "Test Task");
    }

    #[test]
    fn test_create_task_assigns_id() {
        let mut state = MockState::new();

        let first = state.create_task(&json!({"name": "A", "id": "ignored"})).unwrap();
        let second = state.create_task(&json!({"name": "B"})).unwrap();

        assert_eq!(first.id(), "created-1");
        assert_eq!(first.name(), "A");
        assert_eq!(second.id(), "created-2");
        assert_eq!(state.list_tasks().len(), 2);
    }

    #[test]
    fn test_update_task_merges_fields() {
        let mut state =
            MockState::new().with_task(Fixtures::project_task("t1", "Original", "p1", "s1"));

        let updated = state
            .update_task("t1", &json!({"name": "Renamed", "isPrio": true, "id": "other"}))
            .expect("task exists")
            .expect("patch is valid");

        assert_eq!(updated.id(), "t1");
        assert_eq!(updated.name(), "Renamed");
        assert!(updated.is_prio());
        assert_eq!(updated.entity_id(), "p1");
        assert_eq!(state.get_task("t1").unwrap().name(), "Renamed");
    }

    #[test]
    fn test_update_missing_task() {
        let mut state = MockState::new();
        assert!(state.update_task("nope", &json!({})).is_none());
    }

    #[test]
    fn test_change_statuses_is_all_or_nothing() {
        let mut state = MockState::new()
            .with_task(Fixtures::project_task("t1", "One", "p1", "todo"))
            .with_task(Fixtures::project_task("t2", "Two", "p1", "todo"));

        let err = state
            .change_statuses(&[
                TaskStatusChange::new("t1", "done"),
                TaskStatusChange::new("missing", "done"),
            ])
            .unwrap_err();
        assert!(err.contains("missing"));
        assert_eq!(state.get_task("t1").unwrap().task_status_id(), "todo");

        state
            .change_statuses(&[
                TaskStatusChange::new("t1", "done"),
                TaskStatusChange::new("t2", "done"),
            ])
            .unwrap();
        assert_eq!(state.get_task("t1").unwrap().task_status_id(), "done");
        assert_eq!(state.get_task("t2").unwrap().task_status_id(), "done");
    }

    #[test]
    fn test_authorization() {
        let open = MockState::new();
        assert!(open.is_authorized(None));

        let locked = MockState::new().with_required_token("secret");
        assert!(locked.is_authorized(Some("Bearer secret")));
        assert!(!locked.is_authorized(Some("Bearer wrong")));
        assert!(!locked.is_authorized(Some("secret")));
        assert!(!locked.is_authorized(None));
    }
}
