//! Outbound notifications.
//!
//! [`Notifier::dispatch`] hands the message to a detached task and returns at
//! once. Whatever happens to the delivery afterwards is only logged.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use folio_core::traits::Notifier;

use crate::error::NotifyError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Where to POST notifications. Without one, messages are only logged.
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { endpoint: None, timeout_ms: 5_000 }
    }
}

/// JSON body exchanged with the notification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyPayload {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpNotifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into(), timeout }
    }

    /// One delivery attempt. Only `200 OK` counts as success.
    pub async fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&NotifyPayload { message: message.to_string() })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { NotifyError::Timeout(self.timeout) } else { NotifyError::Transport(e) })?;

        let status = resp.status();
        if status == StatusCode::OK { Ok(()) } else { Err(NotifyError::Status(status.as_u16())) }
    }
}

impl Notifier for HttpNotifier {
    fn dispatch(&self, message: String) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(endpoint = %self.endpoint, "no async runtime; notification dropped");
            return;
        };
        let notifier = self.clone();
        runtime.spawn(async move {
            match notifier.deliver(&message).await {
                Ok(()) => tracing::info!(endpoint = %notifier.endpoint, "notification delivered"),
                Err(e) => tracing::warn!(endpoint = %notifier.endpoint, error = %e, "notification failed"),
            }
        });
    }
}

/// Stand-in used when no endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn dispatch(&self, message: String) {
        tracing::info!(%message, "notification (no endpoint configured)");
    }
}

pub fn notifier_from_config(config: &NotifyConfig) -> Arc<dyn Notifier> {
    match config.endpoint.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        Some(endpoint) => Arc::new(HttpNotifier::new(endpoint, Duration::from_millis(config.timeout_ms))),
        None => Arc::new(LogNotifier),
    }
}
