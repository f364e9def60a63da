use crate::domain::draft::RegistrationSnapshot;
use crate::domain::notification::NotificationPayload;
use crate::domain::payment::{OrderRequest, PaymentEvent};
use crate::domain::ports::{GatewayRef, NotifierRef};
use crate::error::{RegistrationError, Result};

/// Boundary between the hosted payment widget's imperative callbacks and
/// the controller's event stream. Holds the frozen snapshot read-only for
/// the duration of the payment phase; gateway failures are converted to
/// events here and never propagate further.
pub struct PaymentSession {
    gateway: GatewayRef,
    notifier: Option<NotifierRef>,
    request: OrderRequest,
    snapshot: RegistrationSnapshot,
}

impl PaymentSession {
    pub fn new(
        gateway: GatewayRef,
        notifier: Option<NotifierRef>,
        request: OrderRequest,
        snapshot: RegistrationSnapshot,
    ) -> Self {
        Self {
            gateway,
            notifier,
            request,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &RegistrationSnapshot {
        &self.snapshot
    }

    /// Click guard run before the widget opens. Rejects the interaction
    /// when a required field is somehow missing, aborting before any
    /// money movement.
    pub fn check_ready(&self) -> Result<()> {
        if self.snapshot.has_required_fields() {
            Ok(())
        } else {
            Err(RegistrationError::Incomplete)
        }
    }

    /// Creates a provider order for the fixed fee. The caller converts an
    /// error into a `Failed` event; nothing here reaches the user raw.
    pub async fn create_order(&self) -> Result<String> {
        self.gateway.create_order(&self.request).await
    }

    /// The widget's approval callback: capture funds, then hand off to
    /// the relay without blocking the UI transition on its outcome.
    pub async fn approve(&self, order_id: &str) -> PaymentEvent {
        match self.gateway.capture_order(order_id).await {
            Ok(capture) => {
                self.dispatch_notification(NotificationPayload::new(
                    &self.snapshot,
                    self.request.amount,
                    &capture.order_id,
                ));
                PaymentEvent::Captured {
                    order_id: capture.order_id,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "payment capture failed");
                PaymentEvent::Failed {
                    message: "Payment failed. Please try again.".to_string(),
                }
            }
        }
    }

    /// Fire-and-forget dispatch to the external record keeper. At most
    /// once, no retry: the provider's receipt is the system of record and
    /// this copy is a convenience. Skipped entirely when no endpoint is
    /// configured.
    fn dispatch_notification(&self, payload: NotificationPayload) {
        let Some(notifier) = self.notifier.clone() else {
            return;
        };
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&payload).await {
                tracing::warn!(error = %e, order_id = %payload.order_id, "registration relay failed");
            }
        });
    }
}
