//! Project status endpoint handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, error, paginate};
use crate::mock_server::state::MockState;

/// GET /v1/projectstatuses
pub async fn list_project_statuses(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.write().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    state.received_queries.push(query.clone());
    let statuses = paginate(state.list_project_statuses(), &query);

    (StatusCode::OK, Json(statuses)).into_response()
}

/// GET /v1/projectstatuses/{id}
pub async fn get_project_status(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.get_project_status(&id) {
        Some(status) => (StatusCode::OK, Json(status.clone())).into_response(),
        None => error(
            StatusCode::NOT_FOUND,
            format!("Project status {id} does not exist."),
        ),
    }
}
