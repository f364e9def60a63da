use super::notification::NotificationPayload;
use super::payment::{OrderRequest, PaymentCapture};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// External payment provider. The hosted widget itself is not
/// reimplemented; these are the two calls the flow makes against it.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates an order for the fixed fee and returns the provider's id.
    async fn create_order(&self, request: &OrderRequest) -> Result<String>;
    /// Captures a previously approved order, securing the funds.
    async fn capture_order(&self, order_id: &str) -> Result<PaymentCapture>;
}

/// External record-keeping endpoint for completed registrations.
/// Delivery is best-effort; callers log failures and move on.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, payload: &NotificationPayload) -> Result<()>;
}

pub type GatewayRef = Arc<dyn PaymentGateway>;
pub type NotifierRef = Arc<dyn NotificationSink>;
