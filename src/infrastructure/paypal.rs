use crate::config::PayPalConfig;
use crate::domain::payment::{OrderRequest, PaymentCapture};
use crate::domain::ports::PaymentGateway;
use crate::error::{RegistrationError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// PayPal Orders API (v2) over REST. Only the two calls the registration
/// flow needs: create an order for the fixed fee, capture it on approval.
pub struct PayPalGateway {
    base_url: String,
    client_id: String,
    secret: String,
    client: reqwest::Client,
}

impl PayPalGateway {
    pub fn new(config: &PayPalConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            secret: config.secret.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_json(&self, url: String, body: serde_json::Value) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.client_id, Some(&self.secret))
            .json(&body)
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RegistrationError::Gateway("provider timeout".to_string())
                } else {
                    RegistrationError::Gateway(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail: String = body.chars().take(200).collect();
            return Err(RegistrationError::Gateway(format!(
                "HTTP_{}: {detail}",
                status.as_u16()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RegistrationError::Gateway(e.to_string()))
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<String> {
        let body = json!({
            "intent": "CAPTURE",
            "purchase_units": [
                {
                    "amount": {
                        "currency_code": request.currency,
                        "value": request.amount.to_string(),
                    },
                    "description": request.description,
                }
            ],
        });
        let value = self
            .post_json(format!("{}/v2/checkout/orders", self.base_url), body)
            .await?;

        value
            .get("id")
            .and_then(|id| id.as_str())
            .map(ToString::to_string)
            .ok_or_else(|| RegistrationError::Gateway("order response missing id".to_string()))
    }

    async fn capture_order(&self, order_id: &str) -> Result<PaymentCapture> {
        let value = self
            .post_json(
                format!("{}/v2/checkout/orders/{order_id}/capture", self.base_url),
                json!({}),
            )
            .await?;

        match value.get("status").and_then(|s| s.as_str()) {
            Some("COMPLETED") => {}
            other => {
                return Err(RegistrationError::Gateway(format!(
                    "capture not completed: {}",
                    other.unwrap_or("unknown")
                )));
            }
        }

        // Prefer the id in the capture response, falling back to the one
        // we were approved with.
        let captured_id = value
            .get("id")
            .and_then(|id| id.as_str())
            .unwrap_or(order_id)
            .to_string();

        Ok(PaymentCapture {
            order_id: captured_id,
        })
    }
}
