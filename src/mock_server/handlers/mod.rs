//! HTTP request handlers for the mock server.

pub mod project_statuses;
pub mod tasks;

pub use project_statuses::*;
pub use tasks::*;

use std::collections::HashMap;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockState;

/// Reject the request with awork's 401 body unless the bearer token matches.
pub(crate) fn authorize(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    if state.is_authorized(authorization) {
        return None;
    }

    Some(
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "message": {
                    "code": "unauthorized",
                    "description": "The access token is missing or invalid."
                }
            })),
        )
            .into_response(),
    )
}

/// awork's error body for everything but 401.
pub(crate) fn error(status: StatusCode, description: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "code": status.canonical_reason().unwrap_or("error"),
            "description": description.into()
        })),
    )
        .into_response()
}

/// Slice a list by the `page` and `pageSize` query parameters.
///
/// Without `pageSize` the whole list is returned.
pub(crate) fn paginate<T: Clone>(items: Vec<&T>, query: &HashMap<String, String>) -> Vec<T> {
    let page: usize = query
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1)
        .max(1);

    let Some(page_size) = query.get("pageSize").and_then(|s| s.parse::<usize>().ok()) else {
        return items.into_iter().cloned().collect();
    };

    items
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect()
}
