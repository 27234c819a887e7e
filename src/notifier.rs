//! The delivery-mechanism capability shared by all notification channels.

use tokio_util::sync::CancellationToken;

/// Trait for delivering a single notification to an external service.
///
/// A dispatcher holds one implementation per channel (webhook, email,
/// chat, ...) and invokes each with the same subject and message. Every
/// call is single-shot: no retries, no deduplication, no state carried
/// between calls.
///
/// # Implementation Notes
///
/// Mechanisms that have no use for `subject` (the webhook sender, for
/// one) must ignore it entirely rather than fold it into the payload.
///
/// Implementations must honor `cancel`: when the token is cancelled
/// before or during the call, the send aborts promptly and reports an
/// error attributable to cancellation.
pub trait Notifier: Send + Sync {
    /// Error type reported by this mechanism.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when delivery fails for any reason;
    /// the dispatcher decides whether other channels still run.
    fn send(
        &self,
        cancel: &CancellationToken,
        subject: &str,
        message: &str,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}
