//! Heartbeat prober tests against local mock servers.

use super::*;
use std::net::SocketAddr;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binding_to(server: &MockServer, host: &str) -> TransportBinding {
    TransportBinding {
        host: host.to_string(),
        target: *server.address(),
    }
}

fn prober() -> HeartbeatProber {
    HeartbeatProber::new(80, Duration::from_secs(1))
}

#[test]
fn test_heartbeat_url() {
    let prober = HeartbeatProber::new(8080, Duration::from_secs(1));
    assert_eq!(
        prober.heartbeat_url("lancache.steamcontent.com"),
        "http://lancache.steamcontent.com/lancache-heartbeat"
    );
    assert_eq!(
        prober.heartbeat_url("10.0.0.5"),
        "http://10.0.0.5:8080/lancache-heartbeat"
    );
    assert_eq!(
        prober.heartbeat_url("fd00::5"),
        "http://[fd00::5]:8080/lancache-heartbeat"
    );
}

#[tokio::test]
async fn test_marker_header_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .and(header("host", "x.example.com"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Lancache-Processed-By", "node-7"))
        .expect(1)
        .mount(&server)
        .await;

    let result = prober()
        .probe(
            "x.example.com",
            &Resolver::System,
            vec!["1.2.3.4".parse().unwrap()],
            Some(&binding_to(&server, "x.example.com")),
        )
        .await;

    assert!(result.attempt.is_success());
    assert_eq!(result.attempt.container_id.as_deref(), Some("node-7"));
    assert_eq!(
        result.attempt.addresses,
        vec!["1.2.3.4".parse::<IpAddr>().unwrap()]
    );
    assert_eq!(result.attempt.hostname, "x.example.com");
    assert_eq!(result.failure, None);
}

#[tokio::test]
async fn test_missing_header_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let result = prober()
        .probe(
            "x.example.com",
            &Resolver::System,
            vec!["1.2.3.4".parse().unwrap()],
            Some(&binding_to(&server, "x.example.com")),
        )
        .await;

    assert!(!result.attempt.is_success());
    assert_eq!(result.attempt.container_id, None);
    assert_eq!(result.failure, Some(ErrorType::MissingLancacheHeader));
}

#[tokio::test]
async fn test_empty_header_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Lancache-Processed-By", ""))
        .mount(&server)
        .await;

    let result = prober()
        .probe(
            "x.example.com",
            &Resolver::System,
            vec!["1.2.3.4".parse().unwrap()],
            Some(&binding_to(&server, "x.example.com")),
        )
        .await;

    assert!(!result.attempt.is_success());
    assert_eq!(result.failure, Some(ErrorType::MissingLancacheHeader));
}

#[tokio::test]
async fn test_redirect_is_final_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "/elsewhere")
                .insert_header("X-Lancache-Processed-By", "node-3"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = prober()
        .probe(
            "x.example.com",
            &Resolver::System,
            vec!["1.2.3.4".parse().unwrap()],
            Some(&binding_to(&server, "x.example.com")),
        )
        .await;

    assert_eq!(result.attempt.container_id.as_deref(), Some("node-3"));
}

#[tokio::test]
async fn test_connection_refused_keeps_addresses() {
    // Port 9 (discard) is not listening on test hosts.
    let binding = TransportBinding {
        host: "x.example.com".into(),
        target: "127.0.0.1:9".parse::<SocketAddr>().unwrap(),
    };

    let result = prober()
        .probe(
            "x.example.com",
            &Resolver::System,
            vec!["127.0.0.1".parse().unwrap()],
            Some(&binding),
        )
        .await;

    assert!(!result.attempt.is_success());
    assert_eq!(
        result.attempt.addresses,
        vec!["127.0.0.1".parse::<IpAddr>().unwrap()]
    );
    assert_eq!(result.failure, Some(ErrorType::ProbeConnectError));
}

#[tokio::test]
async fn test_slow_heartbeat_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Lancache-Processed-By", "node-7")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let prober = HeartbeatProber::new(80, Duration::from_millis(200));
    let result = prober
        .probe(
            "x.example.com",
            &Resolver::System,
            vec!["1.2.3.4".parse().unwrap()],
            Some(&binding_to(&server, "x.example.com")),
        )
        .await;

    assert!(!result.attempt.is_success());
    assert_eq!(result.failure, Some(ErrorType::ProbeTimeout));
}

#[tokio::test]
async fn test_literal_address_uses_heartbeat_port() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lancache-heartbeat"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Lancache-Processed-By", "node-1"))
        .mount(&server)
        .await;

    let prober = HeartbeatProber::new(server.address().port(), Duration::from_secs(1));
    let result = prober
        .probe(
            "127.0.0.1",
            &Resolver::System,
            vec!["127.0.0.1".parse().unwrap()],
            None,
        )
        .await;

    assert_eq!(result.attempt.container_id.as_deref(), Some("node-1"));
}
