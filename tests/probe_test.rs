//! Probe behavior against a real local HTTP server.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::{Response, Server};

use prefpane::probe::{ProbeError, StatusProbe};

/// Spin up a one-shot server; returns its base URL.
fn serve_once<F>(handle: F) -> String
where
    F: FnOnce(tiny_http::Request) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            handle(request);
        }
    });
    format!("http://{addr}")
}

fn authorization_of(request: &tiny_http::Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Authorization"))
        .map(|h| h.value.as_str().to_string())
}

#[tokio::test]
async fn success_outcome_matches_the_request() {
    let seen_auth = Arc::new(Mutex::new(None));
    let seen = seen_auth.clone();
    let host = serve_once(move |request| {
        *seen.lock().unwrap() = authorization_of(&request);
        let _ = request.respond(Response::from_string(r#"{"ok":true}"#));
    });

    let probe = StatusProbe::new().unwrap();
    let body = probe.check(&host, "tok").await.unwrap();
    assert_eq!(body, serde_json::json!({"ok": true}));

    // "tok" base64-encoded, as basic auth.
    assert_eq!(
        seen_auth.lock().unwrap().as_deref(),
        Some("Basic dG9r")
    );
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    let host = serve_once(|request| {
        let _ = request.respond(Response::from_string("nope").with_status_code(500));
    });

    let probe = StatusProbe::new().unwrap();
    let err = probe.check(&host, "tok").await.unwrap_err();
    match err {
        ProbeError::Http { status, reason } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn request_settling_first_wins_even_with_a_generous_deadline() {
    let host = serve_once(|request| {
        let _ = request.respond(Response::from_string("gone").with_status_code(404));
    });

    let probe = StatusProbe::with_timeout(Duration::from_secs(5)).unwrap();
    let err = probe.check(&host, "tok").await.unwrap_err();
    assert!(matches!(err, ProbeError::Http { status: 404, .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let host = serve_once(|request| {
        thread::sleep(Duration::from_millis(500));
        // The probe gave up long ago; this response goes nowhere.
        let _ = request.respond(Response::from_string(r#"{"ok":true}"#));
    });

    let probe = StatusProbe::with_timeout(Duration::from_millis(100)).unwrap();
    let err = probe.check(&host, "tok").await.unwrap_err();
    assert!(matches!(err, ProbeError::Timeout(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Bind, learn the port, then drop the listener.
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    drop(server);

    let probe = StatusProbe::new().unwrap();
    let err = probe.check(&format!("http://{addr}"), "tok").await.unwrap_err();
    assert!(matches!(err, ProbeError::Network(_)));
}

#[tokio::test]
async fn non_json_success_body_is_a_payload_error() {
    let host = serve_once(|request| {
        let _ = request.respond(Response::from_string("pong"));
    });

    let probe = StatusProbe::new().unwrap();
    let err = probe.check(&host, "tok").await.unwrap_err();
    assert!(matches!(err, ProbeError::Payload(_)));
}
