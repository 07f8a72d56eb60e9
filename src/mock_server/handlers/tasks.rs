//! Task endpoint handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;

use super::{authorize, error, paginate};
use crate::mock_server::state::MockState;
use crate::TaskStatusChange;

/// GET /v1/tasks
pub async fn list_tasks(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.write().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    state.received_queries.push(query.clone());
    let tasks = paginate(state.list_tasks(), &query);

    (StatusCode::OK, Json(tasks)).into_response()
}

/// GET /v1/tasks/{id}
pub async fn get_task(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.get_task(&id) {
        Some(task) => (StatusCode::OK, Json(task.clone())).into_response(),
        None => error(StatusCode::NOT_FOUND, format!("Task {id} does not exist.")),
    }
}

/// POST /v1/tasks
pub async fn create_task(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.write().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.create_task(&body) {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(e) => error(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// PUT /v1/tasks/{id}
pub async fn update_task(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.write().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.update_task(&id, &body) {
        Some(Ok(task)) => (StatusCode::OK, Json(task)).into_response(),
        Some(Err(e)) => error(StatusCode::BAD_REQUEST, e.to_string()),
        None => error(StatusCode::NOT_FOUND, format!("Task {id} does not exist.")),
    }
}

/// POST /v1/tasks/changestatuses
pub async fn change_task_statuses(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(changes): Json<Vec<TaskStatusChange>>,
) -> Response {
    let mut state = state.write().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.change_statuses(&changes) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(description) => error(StatusCode::BAD_REQUEST, description),
    }
}
