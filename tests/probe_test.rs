//! ProbeClient behavior tests

mod common;

use common::test_config;
use janus::http::{ProbeClient, ProbeOutcome};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server_uri: &str, timeout_secs: u64) -> ProbeClient {
    // the client never touches the wordlist
    let mut config = test_config(server_uri, "unused.txt");
    config.timeout_secs = timeout_secs;
    ProbeClient::from_config(&config).expect("client")
}

#[tokio::test]
async fn success_reports_status_and_lowercased_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Welcome To The ADMIN Area"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let url = Url::parse(&format!("{}/admin", server.uri())).unwrap();
    let result = client.probe(url.clone()).await;

    assert_eq!(result.url, url);
    match result.outcome {
        ProbeOutcome::Success { status, body } => {
            assert_eq!(status, 200);
            assert_eq!(body, "welcome to the admin area");
        }
        other => panic!("expected success, got {other:?}"),
    }
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn redirects_are_followed_to_the_final_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("admin dashboard"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 5);
    let url = Url::parse(&format!("{}/old", server.uri())).unwrap();
    let result = client.probe(url).await;

    match result.outcome {
        ProbeOutcome::Success { status, body } => {
            assert_eq!(status, 200, "redirect chain resolves to the final status");
            assert!(body.contains("admin dashboard"));
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_maps_to_network_error() {
    // nothing listens on port 1
    let client = client_for("http://127.0.0.1:1", 5);
    let url = Url::parse("http://127.0.0.1:1/admin").unwrap();

    let result = client.probe(url).await;
    assert!(
        matches!(result.outcome, ProbeOutcome::NetworkError(_)),
        "expected network error, got {:?}",
        result.outcome
    );
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("admin")
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), 1);
    let url = Url::parse(&format!("{}/slow", server.uri())).unwrap();

    let result = client.probe(url).await;
    assert!(
        matches!(result.outcome, ProbeOutcome::Timeout),
        "expected timeout, got {:?}",
        result.outcome
    );
}
