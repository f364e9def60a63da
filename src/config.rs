use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Per-participant training fee. Rendered in site copy and sent verbatim
/// as the order amount; the two must never drift apart.
pub const TRAINING_FEE: Decimal = dec!(70);

pub const FEE_CURRENCY: &str = "USD";
pub const ORDER_DESCRIPTION: &str = "CPR Training Registration";

#[derive(Debug, Clone)]
pub struct PayPalConfig {
    pub client_id: String,
    pub secret: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub url: String,
    /// Optional shared secret, sent as `x-api-key`.
    pub secret: Option<String>,
}

/// Explicit configuration handed to the controller and gateways at
/// construction time. Library code never reads the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fee: Decimal,
    pub currency: String,
    pub order_description: String,
    pub site_name: String,
    pub paypal: Option<PayPalConfig>,
    pub relay: Option<RelayConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let paypal = std::env::var("PAYPAL_CLIENT_ID").ok().map(|client_id| PayPalConfig {
            client_id,
            secret: std::env::var("PAYPAL_SECRET").unwrap_or_default(),
            base_url: std::env::var("PAYPAL_BASE_URL")
                .unwrap_or_else(|_| "https://api-m.sandbox.paypal.com".to_string()),
        });
        let relay = std::env::var("FLOW_URL").ok().map(|url| RelayConfig {
            url,
            secret: std::env::var("FLOW_SECRET").ok().filter(|s| !s.is_empty()),
        });

        Self {
            fee: TRAINING_FEE,
            currency: FEE_CURRENCY.to_string(),
            order_description: ORDER_DESCRIPTION.to_string(),
            site_name: std::env::var("SITE_NAME")
                .unwrap_or_else(|_| "Harborview Home Health".to_string()),
            paypal,
            relay,
        }
    }

    /// True when a payment provider client id is available. When false the
    /// UI shows a persistent "payment not configured" banner.
    pub fn payment_configured(&self) -> bool {
        self.paypal.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fee: TRAINING_FEE,
            currency: FEE_CURRENCY.to_string(),
            order_description: ORDER_DESCRIPTION.to_string(),
            site_name: "Harborview Home Health".to_string(),
            paypal: None,
            relay: None,
        }
    }
}
