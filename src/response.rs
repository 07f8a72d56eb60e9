//! Validated API responses and status classification.
//!
//! Every request flows through [`classify`], which logs the exchange and
//! turns non-success statuses into typed [`AworkError`]s.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{AworkError, Result};

/// A fully read response from the awork API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    json: Value,
    uri: Url,
}

impl ApiResponse {
    /// Build a response from its parts.
    ///
    /// The body is parsed as JSON; an empty or non-JSON body yields
    /// [`Value::Null`].
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>, uri: Url) -> Self {
        let body = body.into();
        let json = serde_json::from_str(&body).unwrap_or(Value::Null);
        Self {
            status,
            headers,
            body,
            json,
            uri,
        }
    }

    /// Read a transport response to completion.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let uri = response.url().clone();
        let body = response.text().await?;
        Ok(Self::new(status, headers, body, uri))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed JSON body.
    pub fn json(&self) -> &Value {
        &self.json
    }

    /// The URI the request was finally sent to.
    pub fn effective_uri(&self) -> &Url {
        &self.uri
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Look up a dot-separated path such as `message.description`.
    ///
    /// See [`json_path`].
    pub fn json_path(&self, path: &str) -> String {
        json_path(&self.json, path)
    }

    /// Map the JSON body onto a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.json)?)
    }

    /// Consume the response, keeping only the parsed JSON body.
    pub fn into_json(self) -> Value {
        self.json
    }
}

/// Extract the value at a dot-separated path.
///
/// Missing segments and `null` give an empty string. String leaves are
/// returned as-is; any other leaf is rendered as JSON.
pub fn json_path(value: &Value, path: &str) -> String {
    let leaf = path
        .split('.')
        .try_fold(value, |current, segment| current.get(segment));

    match leaf {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Log a response and classify its status.
///
/// Returns the response unchanged for 2xx statuses. Otherwise:
///
/// - 401 becomes [`AworkError::Authentication`] with `message.description`
/// - 404 becomes [`AworkError::NotFound`] naming the effective URI
/// - anything else becomes [`AworkError::Api`] with `description`
///
/// The debug event is emitted before any error is returned.
pub fn classify(response: ApiResponse) -> Result<ApiResponse> {
    tracing::debug!(
        uri = %response.uri,
        status = response.status.as_u16(),
        response = %response.json,
        headers = ?response.headers,
        "Request to {}",
        response.uri
    );

    match response.status {
        StatusCode::UNAUTHORIZED => Err(AworkError::Authentication {
            message: response.json_path("message.description"),
        }),
        StatusCode::NOT_FOUND => Err(AworkError::NotFound {
            message: format!(
                "The requested resource {} could not be found.",
                response.uri
            ),
        }),
        status if !status.is_success() => {
            let mut message = response.json_path("description");
            if message.is_empty() {
                message = format!("HTTP {status}");
            }
            Err(AworkError::Api {
                message,
                status_code: status.as_u16(),
            })
        }
        _ => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use serde_json::json;

    fn response(status: u16, body: &str) -> ApiResponse {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        ApiResponse::new(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body,
            Url::parse("https://api.awork.com/api/v1/tasks/999").unwrap(),
        )
    }

    #[test]
    fn test_json_path_nested() {
        let value = json!({"message": {"description": "bad token"}});
        assert_eq!(json_path(&value, "message.description"), "bad token");
    }

    #[test]
    fn test_json_path_missing_segments_are_empty() {
        let value = json!({"message": "flat"});
        assert_eq!(json_path(&value, "message.description"), "");
        assert_eq!(json_path(&value, "description"), "");
        assert_eq!(json_path(&Value::Null, "description"), "");
        assert_eq!(json_path(&json!({"description": null}), "description"), "");
    }

    #[test]
    fn test_json_path_non_string_leaf() {
        let value = json!({"description": 42});
        assert_eq!(json_path(&value, "description"), "42");
    }

    #[test]
    fn test_non_json_body_parses_as_null() {
        let response = response(502, "<html>Bad Gateway</html>");
        assert_eq!(response.json(), &Value::Null);
        assert_eq!(response.body(), "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify(response(401, r#"{"message":{"description":"bad token"}}"#)).unwrap_err();
        match err {
            AworkError::Authentication { message } => assert_eq!(message, "bad token"),
            other => panic!("expected authentication error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unauthorized_without_description() {
        let err = classify(response(401, "")).unwrap_err();
        assert!(matches!(err, AworkError::Authentication { ref message } if message.is_empty()));
    }

    #[test]
    fn test_classify_not_found_names_uri() {
        let err = classify(response(404, r#"{"description":"ignored"}"#)).unwrap_err();
        assert_eq!(
            err.message(),
            Some("The requested resource https://api.awork.com/api/v1/tasks/999 could not be found.")
        );
    }

    #[test]
    fn test_classify_server_error() {
        let err = classify(response(500, r#"{"description":"internal failure"}"#)).unwrap_err();
        match err {
            AworkError::Api {
                message,
                status_code,
            } => {
                assert_eq!(message, "internal failure");
                assert_eq!(status_code, 500);
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_error_without_description_is_synthesized() {
        let err = classify(response(503, "")).unwrap_err();
        assert_eq!(err.message(), Some("HTTP 503 Service Unavailable"));
    }

    #[test]
    fn test_classify_client_errors_are_generic() {
        let err = classify(response(400, r#"{"description":"invalid filter"}"#)).unwrap_err();
        assert!(matches!(err, AworkError::Api { status_code: 400, .. }));
        assert_eq!(err.message(), Some("invalid filter"));
    }

    #[test]
    fn test_classify_success_is_unchanged() {
        let ok = classify(response(200, r#"{"id":"t1"}"#)).unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(ok.json(), &json!({"id": "t1"}));
        assert_eq!(ok.body(), r#"{"id":"t1"}"#);

        let created = classify(response(201, "{}")).unwrap();
        assert!(created.is_success());
    }
}
