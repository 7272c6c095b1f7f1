use serde_json::json;
use std::net::TcpListener;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn notify(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notify-alertmanager"))
        .args(args)
        .output()
        .await
        .expect("Failed to run notify-alertmanager")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn test_closed_port_exits_with_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/api/v1/alerts", port);

    let output = notify(&[
        "--hostname", "web01", "--service", "ssh", "--state", "2", "--alert-api-url", &url,
    ])
    .await;

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.starts_with("ERROR:"), "stdout: {}", stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {}", stdout);
    assert_eq!(stdout.matches("Connection refused").count(), 1, "stdout: {}", stdout);
}

#[tokio::test]
async fn test_invalid_state_rejected_before_sending() {
    let server = MockServer::start().await;
    let url = format!("{}/api/v1/alerts", server.uri());

    let output = notify(&[
        "--hostname", "web01", "--service", "ssh", "--state", "5", "--alert-api-url", &url,
    ])
    .await;

    assert_eq!(output.status.code(), Some(2));
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "unexpected requests: {}", requests.len());
}

#[tokio::test]
async fn test_delivery_is_silent_without_debug() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/api/v1/alerts", server.uri());
    let output = notify(&[
        "--hostname", "web01", "--service", "hostalive", "--state", "0", "--alert-api-url", &url,
    ])
    .await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "");
}

#[tokio::test]
async fn test_debug_prints_payload_and_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/api/v1/alerts", server.uri());
    let output = notify(&[
        "--debug", "--hostname", "barfoo", "--service", "foobar", "--state", "1",
        "--output", "WARNING - load 4.2", "--alert-api-url", &url,
    ])
    .await;

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("DEBUG"), "stdout: {}", stdout);
    assert!(stdout.contains(r#""alertname":"foobar_barfoo""#), "stdout: {}", stdout);
    assert!(stdout.contains(r#""summary":"Service foobar on barfoo is Warning""#), "stdout: {}", stdout);
    assert!(stdout.contains(r#"{"status":"success"}"#), "stdout: {}", stdout);
    assert!(!stdout.contains('\u{1b}'), "colour codes in stdout: {:?}", stdout);
}
