//! Fetch tests against a throwaway loopback HTTP responder.

use ohlcdash_fetch::{ChartClient, ClientConfig, FetchError};
use ohlcdash_types::Interval;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const BODY: &str = r#"{"chart":{"result":[{"meta":{"symbol":"AAPL"},
"timestamp":[1704205800,1704292200],
"indicators":{"quote":[{"open":[187.15,184.22],"high":[188.44,185.88],
"low":[183.89,183.43],"close":[185.64,184.25],"volume":[82488700,58414500]}]}}],"error":null}}"#;

/// Serves a single connection with the given status line and body, and
/// reports the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{addr}"), rx)
}

fn client_for(endpoint: String, timeout: Duration) -> ChartClient {
    ChartClient::new(ClientConfig {
        endpoint,
        timeout,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_parses_successful_response() {
    let (endpoint, request) = serve_once("200 OK", BODY).await;
    let client = client_for(endpoint, Duration::from_secs(5));

    let raw = client.fetch(Some(Interval::Hour1)).await.unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.close, vec![Some(185.64), Some(184.25)]);
    assert_eq!(raw.meta.unwrap().symbol.as_deref(), Some("AAPL"));

    let request_line = request.await.unwrap();
    assert_eq!(request_line, "GET /api/finance-chart?interval=1h HTTP/1.1");
}

#[tokio::test]
async fn fetch_without_interval_omits_query() {
    let (endpoint, request) = serve_once("200 OK", BODY).await;
    let client = client_for(endpoint, Duration::from_secs(5));

    client.fetch(None).await.unwrap();
    assert_eq!(request.await.unwrap(), "GET /api/finance-chart HTTP/1.1");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (endpoint, _request) = serve_once("500 Internal Server Error", "{}").await;
    let client = client_for(endpoint, Duration::from_secs(5));

    let err = client.fetch(Some(Interval::Day1)).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let (endpoint, _request) = serve_once("200 OK", r#"{"chart":{"result":[]}}"#).await;
    let client = client_for(endpoint, Duration::from_secs(5));

    let err = client.fetch(None).await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let client = client_for(format!("http://{addr}"), Duration::from_millis(200));
    let err = client.fetch(None).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err}");
}
