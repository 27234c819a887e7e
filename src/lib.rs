//! Webhook delivery mechanism for a multi-channel notification dispatcher.
//!
//! A dispatcher fans a single notification out to a set of delivery
//! mechanisms, each implementing the [`notifier::Notifier`] capability.
//! This crate provides the webhook mechanism: one HTTP POST per send,
//! classified strictly by response status code.

pub mod notifier;
pub mod webhook;
