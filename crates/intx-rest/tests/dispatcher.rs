//! Dispatcher behavior against a local canned-response HTTP server
//!
//! Each test binds a `TcpListener`, serves a fixed response, and asserts
//! the client's classification of the outcome. The captured request text
//! also lets the tests verify the exact headers and bytes that went over
//! the wire.

use intx_auth::Credentials;
use intx_rest::{ClientConfig, RestClient, RestError};
use reqwest::Method;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const SIGNING_KEY: &str = "dGVzdF9zaWduaW5nX2tleQ==";

fn test_credentials() -> Credentials {
    Credentials::new("test_access_key", "test_passphrase", SIGNING_KEY).unwrap()
}

fn test_client(addr: SocketAddr) -> RestClient {
    let config = ClientConfig::new(test_credentials())
        .with_base_url(format!("http://{}", addr))
        .with_timeout(2);
    RestClient::with_config(config)
}

/// Serve exactly one HTTP exchange; yields the raw request text
async fn serve_once(
    status: u16,
    body: &'static str,
) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (addr, rx)
}

/// Read one full HTTP request (headers plus content-length body)
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn header_value<'a>(request: &'a str, name: &str) -> Option<&'a str> {
    request.lines().find_map(|line| {
        let (header, value) = line.split_once(':')?;
        header.eq_ignore_ascii_case(name).then(|| value.trim())
    })
}

#[tokio::test]
async fn success_returns_decoded_json() {
    let (addr, _rx) = serve_once(200, r#"{"ok":true}"#).await;
    let client = test_client(addr);

    let value = client
        .request(Method::GET, "/x", None, None, None)
        .await
        .unwrap();
    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn unacceptable_status_is_api_error() {
    let (addr, _rx) = serve_once(404, r#"{"title":"portfolio not found"}"#).await;
    let client = test_client(addr);

    let err = client
        .request(Method::GET, "/portfolios/nope", None, None, None)
        .await
        .unwrap_err();
    match err {
        RestError::Api { status, message, body } => {
            assert_eq!(status, 404);
            assert_eq!(message, "portfolio not found");
            assert!(body.unwrap().contains("portfolio not found"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn allowed_status_returns_body_instead_of_error() {
    let (addr, _rx) = serve_once(404, r#"{"title":"portfolio not found"}"#).await;
    let client = test_client(addr);

    let value = client
        .request(Method::GET, "/portfolios/nope", None, None, Some(&[404]))
        .await
        .unwrap();
    assert_eq!(value["title"], "portfolio not found");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind then drop so the port is known-dead
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = test_client(addr);
    let err = client
        .request(Method::GET, "/x", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn exactly_one_attempt_per_call() {
    // Server closes every connection without answering; a retrying client
    // would connect more than once.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();

    tokio::spawn(async move {
        loop {
            let (socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            counter.fetch_add(1, Ordering::SeqCst);
            drop(socket);
        }
    });

    let client = test_client(addr);
    let err = client
        .request(Method::GET, "/x", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Transport(_)), "got {:?}", err);
    // Give any hypothetical retry a moment to show up
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn timeout_is_surfaced_distinctly() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        // Accept, then never respond
        let (mut socket, _) = listener.accept().await.unwrap();
        let _ = read_request(&mut socket).await;
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    });

    let config = ClientConfig::new(test_credentials())
        .with_base_url(format!("http://{}", addr))
        .with_timeout(1);
    let client = RestClient::with_config(config);

    let err = client
        .request(Method::GET, "/x", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Timeout), "got {:?}", err);
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let (addr, _rx) = serve_once(200, "{not json").await;
    let client = test_client(addr);

    let err = client
        .request(Method::GET, "/x", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn empty_success_body_decodes_to_empty_object() {
    let (addr, _rx) = serve_once(200, "").await;
    let client = test_client(addr);

    let value = client
        .request(Method::POST, "/x", None, Some(&json!({"enabled": true})), None)
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn signature_covers_exact_transmitted_bytes() {
    let (addr, rx) = serve_once(200, "{}").await;
    let client = test_client(addr);

    let body = json!({"portfolio": "p1", "size": "0.5"});
    client
        .request(Method::POST, "/orders", Some("foo=bar"), Some(&body), None)
        .await
        .unwrap();

    let request = rx.await.unwrap();
    let (request_line, _) = request.split_once("\r\n").unwrap();
    assert_eq!(request_line, "POST /orders?foo=bar HTTP/1.1");

    let wire_body = request.split("\r\n\r\n").nth(1).unwrap();
    assert_eq!(header_value(&request, "content-type"), Some("application/json"));
    assert_eq!(header_value(&request, "cb-access-key"), Some("test_access_key"));
    assert_eq!(
        header_value(&request, "cb-access-passphrase"),
        Some("test_passphrase")
    );

    // Recompute the signature over what actually crossed the wire: the
    // query must be excluded, the body covered byte for byte.
    let timestamp: i64 = header_value(&request, "cb-access-timestamp")
        .unwrap()
        .parse()
        .unwrap();
    let expected = test_credentials().sign("POST", "/orders", wire_body, timestamp);
    assert_eq!(
        header_value(&request, "cb-access-sign"),
        Some(expected.signature.as_str())
    );
}

#[tokio::test]
async fn get_carries_no_content_type_or_body() {
    let (addr, rx) = serve_once(200, "[]").await;
    let client = test_client(addr);

    client
        .request(Method::GET, "/assets", None, None, None)
        .await
        .unwrap();

    let request = rx.await.unwrap();
    assert!(header_value(&request, "content-type").is_none());
    let wire_body = request.split("\r\n\r\n").nth(1).unwrap();
    assert!(wire_body.is_empty());
}
