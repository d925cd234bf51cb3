//! # webhook-client
//!
//! Outbound delivery for webhook. Implements the
//! [`Notifier`](webhook_core::traits::Notifier) trait on top of `reqwest`,
//! shaping the JSON body for each supported chat application.

pub mod notifier;
pub mod payload;

pub use notifier::WebhookNotifier;
