//! Single-shot webhook sender.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::notifier::Notifier;

use super::{HttpClient, HttpRequest, ReqwestClient, SendError};

/// Webhook delivery mechanism: one HTTP POST per send.
///
/// Holds a target endpoint and a timeout, both stored verbatim at
/// construction with no validation. A malformed endpoint surfaces as a
/// send-time error. The sender keeps no other state, so one instance may
/// serve any number of concurrent sends without coordination.
///
/// The message body is caller-supplied and opaque: it is transmitted
/// byte-for-byte with `Content-Type: application/json`, whether or not
/// it is valid JSON. The `subject` argument of [`Notifier::send`] is
/// accepted for interface uniformity and discarded.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```
/// use notify_webhook::webhook::WebhookSender;
///
/// let sender = WebhookSender::new("https://example.com/hook", 10);
/// assert_eq!(sender.endpoint(), "https://example.com/hook");
/// ```
#[derive(Debug)]
pub struct WebhookSender<H = ReqwestClient> {
    client: H,
    endpoint: String,
    timeout_secs: u64,
}

impl WebhookSender<ReqwestClient> {
    /// Creates a sender for the given endpoint with a fresh HTTP client.
    ///
    /// `timeout_secs` bounds each send; zero disables the client-side
    /// timeout, leaving cancellation as the only bound. Construction
    /// never fails; nothing is validated here.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self::with_client(ReqwestClient::new(), endpoint, timeout_secs)
    }
}

impl<H> WebhookSender<H> {
    /// Creates a sender with a caller-supplied HTTP client.
    ///
    /// This is the injection point for mock clients in tests and for a
    /// shared `reqwest::Client` with custom configuration.
    #[must_use]
    pub fn with_client(client: H, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout_secs,
        }
    }

    /// Returns the configured endpoint, exactly as given.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured timeout in seconds.
    #[must_use]
    pub const fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl<H: HttpClient> WebhookSender<H> {
    fn build_request(&self, message: &str) -> HttpRequest {
        let mut request = HttpRequest::post(self.endpoint.clone())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(message.as_bytes().to_vec());

        if self.timeout_secs > 0 {
            request = request.with_timeout(Duration::from_secs(self.timeout_secs));
        }

        request
    }

    async fn execute(&self, request: HttpRequest) -> Result<(), SendError> {
        let response = self.client.request(request).await?;

        if response.is_success() {
            return Ok(());
        }

        Err(SendError::Status(response.status))
    }
}

impl<H: HttpClient> Notifier for WebhookSender<H> {
    type Error = SendError;

    /// Performs one POST to the endpoint and classifies the outcome.
    ///
    /// 2xx responses succeed; any other status is a [`SendError::Status`].
    /// The caller's token and the configured timeout race: whichever
    /// fires first determines the error, and either way the in-flight
    /// request is dropped promptly.
    async fn send(
        &self,
        cancel: &CancellationToken,
        _subject: &str,
        message: &str,
    ) -> Result<(), SendError> {
        let request = self.build_request(message);

        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = message.len(),
            "dispatching webhook"
        );

        // biased: an already-cancelled token aborts before the request
        // future is ever polled.
        tokio::select! {
            biased;

            () = cancel.cancelled() => Err(SendError::Cancelled),
            result = self.execute(request) => result,
        }
    }
}
