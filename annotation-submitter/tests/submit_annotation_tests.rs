use annotation_submitter::{ActionInputs, SubmitOutcome, submit_annotation};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANNOTATIONS_PATH: &str = "/api/projects/12345/annotations/";

fn inputs(api_host: &str, message: &str, dashboard_id: &str) -> ActionInputs {
    ActionInputs {
        project_id: "12345".into(),
        token: "test-token".into(),
        api_host: api_host.into(),
        message: message.into(),
        dashboard_id: dashboard_id.into(),
    }
}

async fn only_request_body(server: &MockServer) -> Value {
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    received[0].body_json::<Value>().unwrap()
}

#[tokio::test]
async fn project_annotation_posts_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANNOTATIONS_PATH))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 123, "content": "test annotation"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = submit_annotation(&inputs(&server.uri(), "Test annotation message", "")).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Created(json!({"id": 123, "content": "test annotation"}))
    );

    let body = only_request_body(&server).await;
    assert_eq!(body["scope"], "project");
    assert_eq!(body["content"], "Test annotation message");
    assert_eq!(body["creation_type"], "GIT");
    assert!(body.get("dashboard_id").is_none());

    let marker = body["date_marker"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(marker).is_ok());
}

#[tokio::test]
async fn dashboard_annotation_sends_integer_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANNOTATIONS_PATH))
        .and(body_partial_json(json!({"scope": "dashboard", "dashboard_id": 67890})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 124})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = submit_annotation(&inputs(&server.uri(), "Dashboard annotation", "67890")).await;
    assert!(outcome.is_created());

    let body = only_request_body(&server).await;
    assert_eq!(body["content"], "Dashboard annotation");
    assert_eq!(body["creation_type"], "GIT");
    assert_eq!(body["dashboard_id"].as_i64(), Some(67890));
}

#[tokio::test]
async fn error_status_with_json_body_is_still_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANNOTATIONS_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"type": "authentication_error", "detail": "bad key"})),
        )
        .mount(&server)
        .await;

    let outcome = submit_annotation(&inputs(&server.uri(), "Test annotation", "")).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Created(json!({"type": "authentication_error", "detail": "bad key"}))
    );
}

#[tokio::test]
async fn non_json_body_is_logged_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let outcome = submit_annotation(&inputs(&server.uri(), "Test annotation", "")).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
}

#[tokio::test]
async fn connection_refused_is_logged_not_raised() {
    // Grab a free port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let host = format!("http://127.0.0.1:{port}");

    let outcome = submit_annotation(&inputs(&host, "Test annotation", "")).await;
    match outcome {
        SubmitOutcome::Failed(msg) => assert!(msg.contains("transport error")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn custom_host_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posthog/api/projects/12345/annotations/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let host = format!("{}/posthog", server.uri());
    let outcome = submit_annotation(&inputs(&host, "Test annotation", "")).await;
    assert!(outcome.is_created());
}

#[tokio::test]
async fn dashboard_id_with_trailing_text_uses_leading_digits() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANNOTATIONS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 125})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = submit_annotation(&inputs(&server.uri(), "Test annotation", "42abc")).await;
    assert!(outcome.is_created());

    let body = only_request_body(&server).await;
    assert_eq!(body["scope"], "dashboard");
    assert_eq!(body["dashboard_id"].as_i64(), Some(42));
}

#[tokio::test]
async fn non_numeric_dashboard_id_is_sent_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANNOTATIONS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"attr": "dashboard_id"})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = submit_annotation(&inputs(&server.uri(), "Test annotation", "main-board")).await;
    assert!(outcome.is_created());

    let body = only_request_body(&server).await;
    assert_eq!(body["scope"], "dashboard");
    assert_eq!(body.get("dashboard_id"), Some(&Value::Null));
}
