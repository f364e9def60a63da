use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order-creation request for the fixed training fee. No line items, no
/// tax, no discounts; the amount and description are configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
}

/// Result of finalizing a previously authorized payment. The provider is
/// the system of record; locally we only keep its order identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCapture {
    pub order_id: String,
}

/// Payment widget outcomes, normalized into a tagged event stream so the
/// controller's state machine stays free of provider vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentEvent {
    Captured { order_id: String },
    Failed { message: String },
    Cancelled,
}
