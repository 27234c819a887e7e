//! Tests for `ReqwestClient`.
//!
//! Construction and error-mapping tests run without a network; the live
//! tests drive the client against a local `TcpListener` speaking just
//! enough HTTP/1.1 to exercise the real request path.

use super::*;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Spawns a one-shot local server that reads one request and writes the
/// given raw response. Returns the base URL.
async fn spawn_server(response: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let _ = stream.read(&mut buf).await;
        stream.write_all(response).await.unwrap();
        let _ = stream.shutdown().await;
    });

    format!("http://{addr}/hook")
}

mod construction {
    use super::*;

    #[test]
    fn new_creates_client() {
        let client = ReqwestClient::new();
        let _ = format!("{client:?}");
    }

    #[test]
    fn default_creates_same_as_new() {
        let client1 = ReqwestClient::new();
        let client2 = ReqwestClient::default();

        let _ = format!("{client1:?}");
        let _ = format!("{client2:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .user_agent("notify-webhook-test")
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }
}

mod error_mapping {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_invalid_url() {
        let client = ReqwestClient::new();
        let req = HttpRequest::post("not a valid url").with_body(b"{}".to_vec());

        let result = client.request(req).await;

        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn unreachable_host_fails_within_the_timeout() {
        // TEST-NET-1, reserved for documentation; nothing listens there.
        let client = ReqwestClient::new();
        let req = HttpRequest::post("http://192.0.2.1:8888/hook")
            .with_body(b"{}".to_vec())
            .with_timeout(Duration::from_secs(1));

        let result = client.request(req).await;

        // Depending on the network, the connect attempt is either refused
        // outright or hangs until the request timeout fires.
        assert!(matches!(
            result,
            Err(HttpError::Connection(_) | HttpError::Timeout)
        ));
    }

    #[tokio::test]
    async fn silent_server_trips_the_request_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            // Hold the connection open without ever responding.
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(stream);
        });

        let client = ReqwestClient::new();
        let req = HttpRequest::post(format!("http://{addr}/hook"))
            .with_body(b"{}".to_vec())
            .with_timeout(Duration::from_millis(200));

        let result = client.request(req).await;

        assert!(matches!(result, Err(HttpError::Timeout)));
    }
}

mod live_requests {
    use super::*;

    #[tokio::test]
    async fn reads_status_and_drains_body() {
        let url =
            spawn_server(b"HTTP/1.1 200 OK\r\ncontent-length: 11\r\n\r\n{\"ok\":true}").await;

        let client = ReqwestClient::new();
        let req = HttpRequest::post(url).with_body(b"{}".to_vec());

        let response = client.request(req).await.unwrap();

        assert_eq!(response.status, ::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn surfaces_non_success_status() {
        let url = spawn_server(b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n").await;

        let client = ReqwestClient::new();
        let req = HttpRequest::post(url).with_body(b"{}".to_vec());

        let response = client.request(req).await.unwrap();

        assert_eq!(response.status, ::http::StatusCode::NOT_FOUND);
    }
}

mod end_to_end {
    use super::*;
    use crate::notifier::Notifier;
    use crate::webhook::{SendError, WebhookSender};
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn sender_delivers_through_a_real_socket() {
        let url = spawn_server(b"HTTP/1.1 204 No Content\r\ncontent-length: 0\r\n\r\n").await;

        let sender = WebhookSender::new(url, 5);
        let result = sender
            .send(&CancellationToken::new(), "Subject", r#"{"data":"test"}"#)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn sender_reports_status_text_from_a_real_socket() {
        let url = spawn_server(
            b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n",
        )
        .await;

        let sender = WebhookSender::new(url, 5);
        let err = sender
            .send(&CancellationToken::new(), "Subject", r#"{"data":"test"}"#)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "webhook returned status 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn sender_surfaces_invalid_endpoint_at_send_time() {
        let sender = WebhookSender::new("invalid://[::1]invalid", 5);

        let result = sender
            .send(&CancellationToken::new(), "", r#"{"data":"test"}"#)
            .await;

        assert!(matches!(result, Err(SendError::Http(_))));
    }
}
