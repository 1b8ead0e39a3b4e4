//! Notify service: best-effort chat webhook messages.
//!
//! DESIGN
//! ======
//! Status messages are posted as a single Discord embed. `notify` spawns the
//! post and returns immediately; failures are logged and dropped. There is
//! no retry and no delivery guarantee. When no webhook URL is configured the
//! notifier is disabled and every message is only logged at debug level.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, warn};

use crate::config::NotifyConfig;

pub const EMBED_TITLE: &str = "CampusPay Monitoring System";
pub const DEFAULT_EMBED_COLOR: u32 = 0x00ff_d5;
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("webhook request failed: {0}")]
    Request(String),
    #[error("webhook responded with status {status}")]
    Response { status: u16 },
    #[error("timestamp formatting failed: {0}")]
    Timestamp(String),
}

struct WebhookSink {
    http: reqwest::Client,
    url: String,
}

#[derive(Clone)]
pub struct Notifier {
    sink: Option<Arc<WebhookSink>>,
    user: String,
}

impl Notifier {
    /// Build a notifier from config. A missing URL yields a disabled notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let Some(url) = config.webhook_url.clone() else {
            return Ok(Self::disabled(&config.user));
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| NotifyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { sink: Some(Arc::new(WebhookSink { http, url })), user: config.user.clone() })
    }

    #[must_use]
    pub fn disabled(user: &str) -> Self {
        Self { sink: None, user: user.to_owned() }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Fire-and-forget post with the default color.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        if !self.is_enabled() {
            debug!(message_len = message.len(), "notify: webhook disabled, message dropped");
            return;
        }
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&message, DEFAULT_EMBED_COLOR).await {
                warn!(error = %e, "notify: webhook delivery failed");
            }
        });
    }

    /// Post one message and wait for the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the webhook answers non-2xx.
    pub async fn send(&self, message: &str, color: u32) -> Result<(), NotifyError> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| NotifyError::Timestamp(e.to_string()))?;
        let body = build_payload(message, color, &self.user, &timestamp);

        let response = sink
            .http
            .post(&sink.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Response { status: status.as_u16() });
        }
        debug!("notify: webhook delivered");
        Ok(())
    }
}

/// Build the webhook JSON body.
#[must_use]
pub fn build_payload(message: &str, color: u32, user: &str, timestamp: &str) -> serde_json::Value {
    json!({
        "embeds": [{
            "title": EMBED_TITLE,
            "description": message,
            "color": color,
            "timestamp": timestamp,
            "footer": { "text": format!("Active User: {user}") },
        }]
    })
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
