//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::{json, Value};

use crate::{ProjectStatus, Task};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Task Fixtures
    // =========================================================================

    /// Create a private task with only an id and a name.
    pub fn minimal_task(id: &str, name: &str) -> Task {
        Self::task_from(json!({
            "id": id,
            "name": name,
            "baseType": "private",
        }))
    }

    /// Create a project task in the given status.
    pub fn project_task(id: &str, name: &str, project_id: &str, status_id: &str) -> Task {
        Self::task_from(json!({
            "id": id,
            "name": name,
            "baseType": "projecttask",
            "entityId": project_id,
            "taskStatusId": status_id,
            "plannedDuration": 7200,
            "createdOn": "2024-04-01T08:00:00Z",
        }))
    }

    /// Create a task marked as priority.
    pub fn priority_task(id: &str, name: &str) -> Task {
        Self::task_from(json!({
            "id": id,
            "name": name,
            "baseType": "private",
            "isPrio": true,
        }))
    }

    // =========================================================================
    // Project Status Fixtures
    // =========================================================================

    /// Create a project status without children.
    pub fn project_status(id: &str, name: &str, status_type: &str) -> ProjectStatus {
        Self::status_from(json!({
            "id": id,
            "name": name,
            "type": status_type,
        }))
    }

    /// Create a project status with an ordered list of children.
    pub fn project_status_with_children(
        id: &str,
        name: &str,
        children: &[ProjectStatus],
    ) -> ProjectStatus {
        Self::status_from(json!({
            "id": id,
            "name": name,
            "type": "progress",
            "billableByDefault": true,
            "projectStatuses": children,
        }))
    }

    /// Get the default test scenario.
    ///
    /// Tasks in two project statuses plus one private priority task, and a
    /// status tree with nested children.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }

    fn task_from(value: Value) -> Task {
        Task::from_json(&value).expect("fixture task should deserialize")
    }

    fn status_from(value: Value) -> ProjectStatus {
        ProjectStatus::from_json(&value).expect("fixture project status should deserialize")
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub tasks: Vec<Task>,
    pub project_statuses: Vec<ProjectStatus>,
}

impl DefaultScenario {
    fn new() -> Self {
        let project_id = "project-1";

        let tasks = vec![
            Fixtures::project_task("task-1", "Prepare kickoff", project_id, "status-todo"),
            Fixtures::project_task("task-2", "Draft timeline", project_id, "status-todo"),
            Fixtures::project_task("task-3", "Send invoice", project_id, "status-done"),
            Fixtures::priority_task("task-4", "Renew certificates"),
        ];

        let project_statuses = vec![
            Fixtures::project_status("ps-planned", "Planned", "not-started"),
            Fixtures::project_status_with_children(
                "ps-active",
                "Active",
                &[
                    Fixtures::project_status("ps-active-design", "Design", "progress"),
                    Fixtures::project_status("ps-active-build", "Build", "progress"),
                ],
            ),
            Fixtures::project_status("ps-closed", "Closed", "closed"),
        ];

        Self {
            tasks,
            project_statuses,
        }
    }
}
