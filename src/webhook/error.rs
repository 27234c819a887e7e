//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the network layer without dictating
/// recovery strategy; the caller decides what to do with the failure.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures, and other network-level errors.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response was not fully received within the configured
    /// client-side timeout.
    #[error("request timed out")]
    Timeout,

    /// The endpoint string could not be turned into a request.
    ///
    /// Endpoints are stored unvalidated, so a malformed URL only
    /// surfaces here, at send time.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a single webhook send.
///
/// Cancellation and timeout are distinct variants: [`SendError::Cancelled`]
/// means the caller's token fired, [`HttpError::Timeout`] (under
/// [`SendError::Http`]) means the configured duration elapsed.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request failed at the transport layer.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The caller's cancellation token fired before or during the call.
    #[error("webhook send cancelled")]
    Cancelled,

    /// The endpoint responded with a status code outside 2xx.
    ///
    /// `http::StatusCode` displays as `<code> <canonical reason>`, so the
    /// message reads e.g. `webhook returned status 404 Not Found`.
    #[error("webhook returned status {0}")]
    Status(http::StatusCode),
}
