//! Every response is logged at debug level before it is classified.

use std::io;
use std::sync::{Arc, Mutex};

use awork::{AworkClient, AworkError};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[tokio::test]
async fn test_success_is_logged_with_uri_body_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tasks/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "t1", "name": "Task A"})))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture();
    let client = AworkClient::with_base_url("test-token", &mock_server.uri()).unwrap();
    client.get("tasks/t1").await.unwrap();

    let output = logs.contents();
    let uri = format!("{}/v1/tasks/t1", mock_server.uri());
    assert!(output.contains(&format!("Request to {uri}")), "{output}");
    assert!(output.contains(r#""name":"Task A""#), "{output}");
    assert!(output.contains("content-type"), "{output}");
    assert!(output.contains("DEBUG"), "{output}");
    assert!(!output.contains("test-token"), "{output}");
}

#[tokio::test]
async fn test_failures_are_logged_before_raising() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/tasks/t1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"description": "internal failure"})),
        )
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture();
    let client = AworkClient::with_base_url("test-token", &mock_server.uri()).unwrap();
    let err = client.put("tasks/t1", &json!({"name": "x"})).await.unwrap_err();

    assert!(matches!(err, AworkError::Api { .. }));
    let output = logs.contents();
    assert!(output.contains("Request to "), "{output}");
    assert!(output.contains("internal failure"), "{output}");
    assert!(output.contains("status=500"), "{output}");
}

#[tokio::test]
async fn test_no_subscriber_is_a_valid_configuration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = AworkClient::with_base_url("test-token", &mock_server.uri()).unwrap();
    let response = client.get("tasks").await.unwrap();
    assert_eq!(response.json(), &json!([]));
}
