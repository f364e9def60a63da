use crate::config::RelayConfig;
use crate::domain::notification::NotificationPayload;
use crate::domain::ports::NotificationSink;
use crate::error::{RegistrationError, Result};
use async_trait::async_trait;

/// Posts completed registrations to the configured workflow endpoint
/// (a Power Automate "HTTP request received" trigger in production).
/// One shot per registration, no retry, no queue.
pub struct FlowNotifier {
    url: String,
    secret: Option<String>,
    client: reqwest::Client,
}

impl FlowNotifier {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            url: config.url.clone(),
            secret: config.secret.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSink for FlowNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> Result<()> {
        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(payload);
        if let Some(secret) = &self.secret {
            request = request.header("x-api-key", secret);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RegistrationError::Relay(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RegistrationError::Relay(format!(
                "endpoint returned HTTP {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }
}
