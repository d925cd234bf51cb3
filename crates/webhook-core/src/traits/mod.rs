//! Core traits defined in `webhook-core` and implemented by other crates.

pub mod notifier;

pub use notifier::Notifier;
