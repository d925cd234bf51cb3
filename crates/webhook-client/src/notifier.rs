//! HTTP webhook notifier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use webhook_core::error::{AppError, ErrorKind};
use webhook_core::traits::Notifier;
use webhook_core::{AppResult, HookRecord};

use crate::payload::build_payload;

/// Posts messages to incoming-webhook endpoints over HTTP.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
}

impl WebhookNotifier {
    /// Create a notifier whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build HTTP client: {e}"),
                e,
            )
        })?;

        Ok(Self::with_client(client))
    }

    /// Use an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn post(&self, hook: &HookRecord, message: &str) -> AppResult<()> {
        let app = hook.chat_app()?;
        let payload = build_payload(app, hook, message);

        let response = self
            .client
            .post(&hook.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("{app} webhook request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if status.is_success() {
            info!(hook = %hook.name, %app, %status, "message posted");
            Ok(())
        } else {
            warn!(hook = %hook.name, %app, %status, "webhook rejected message");
            Err(AppError::external_service(format!(
                "{app} webhook returned error status: {status}"
            )))
        }
    }
}
