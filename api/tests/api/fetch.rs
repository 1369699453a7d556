use std::time::Duration;

use echo_api::{EchoApi, FetchError, RecordBody};
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{example_records, spawn_test_app};

#[tokio::test]
async fn fetches_and_decodes_request_history() {
    let app = spawn_test_app().await;
    app.respond_with(ResponseTemplate::new(200).set_body_json(example_records()))
        .await;

    let records = app.api().fetch_requests().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, Some(2));
    assert_eq!(records[0].data.pretty(), "{\n  \"a\": 1\n}");
    assert_eq!(records[1].data, RecordBody::Text(String::from("test data")));
    assert_eq!(records[1].headers.0[1].name, "X-Test-Header");
    assert_eq!(records[1].headers.0[1].joined_values(), "test-value");
}

#[tokio::test]
async fn empty_history_is_not_an_error() {
    let app = spawn_test_app().await;
    app.respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .await;
    assert!(app.api().fetch_requests().await.unwrap().is_empty());

    app.respond_with(ResponseTemplate::new(200).set_body_string("null\n"))
        .await;
    assert!(app.api().fetch_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let app = spawn_test_app().await;
    app.respond_with(ResponseTemplate::new(500).set_body_string("Database error"))
        .await;

    let err = app.api().fetch_requests().await.unwrap_err();

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
    assert_eq!(
        err.to_string(),
        "Failed to fetch requests (HTTP 500 Internal Server Error)"
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = spawn_test_app().await;
    app.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .await;

    let err = app.api().fetch_requests().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
    assert!(err.to_string().starts_with("Failed to decode requests"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // nothing listens on a port we just released
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let api = EchoApi::new(&format!("http://127.0.0.1:{port}"), Duration::from_millis(500)).unwrap();
    let err = api.fetch_requests().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = EchoApi::new("not a url", Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

#[tokio::test]
async fn requests_go_to_echo_path_under_base() {
    let app = spawn_test_app().await;
    app.test_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/echo"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&app.test_server)
        .await;

    let records = app.api().fetch_requests().await.unwrap();

    assert!(records.is_empty());
    assert_eq!(app.api().echo_url().path(), "/echo");
    app.test_server.verify().await;
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let app = spawn_test_app().await;
    app.test_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/debug/echo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(example_records()))
        .expect(1)
        .mount(&app.test_server)
        .await;

    let api = EchoApi::new(&format!("{}/debug", app.test_server.uri()), Duration::from_secs(2)).unwrap();
    let records = api.fetch_requests().await.unwrap();

    assert_eq!(records.len(), 2);
    app.test_server.verify().await;
}
