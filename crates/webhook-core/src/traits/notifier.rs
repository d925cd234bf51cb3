//! Delivery of a message through a hook.

use async_trait::async_trait;

use crate::hook::HookRecord;
use crate::result::AppResult;

/// Sends a text message through a configured hook.
///
/// The trait is defined here in `webhook-core` and implemented in
/// `webhook-client`, so the command layer never depends on the HTTP stack.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post `message` to the chat application behind `hook`.
    async fn post(&self, hook: &HookRecord, message: &str) -> AppResult<()>;
}
