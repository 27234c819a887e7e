//! Webhook delivery over HTTP.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-shot webhook delivery ([`WebhookSender`])

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::WebhookSender;
