use crate::domain::draft::{RegistrationDraft, RegistrationSnapshot};
use crate::domain::payment::PaymentEvent;
use crate::domain::validate::{ValidationErrors, validate};

/// Registration flow phases. One-way: once the payment section is shown
/// there is no route back to editing (matching the shipped product; see
/// DESIGN.md for the open-question record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    AwaitingPayment,
    Submitted,
}

/// View-side effects emitted by state transitions. The controller never
/// touches the page itself; the host decides how to honor these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSignal {
    ScrollToPayment,
    ScrollToTop,
}

/// Owns the draft and drives the two-phase flow: data entry, then
/// payment. Exactly one logical writer (the user, serialized through UI
/// events), so no interior synchronization is needed.
pub struct RegistrationController {
    phase: Phase,
    draft: RegistrationDraft,
    errors: ValidationErrors,
    snapshot: Option<RegistrationSnapshot>,
    order_id: Option<String>,
    payment_error: Option<String>,
    payment_configured: bool,
}

impl RegistrationController {
    pub fn new(payment_configured: bool) -> Self {
        Self {
            phase: Phase::Entering,
            draft: RegistrationDraft::default(),
            errors: ValidationErrors::new(),
            snapshot: None,
            order_id: None,
            payment_error: None,
            payment_configured,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mutable access to the draft for field edits. Edits made after the
    /// snapshot is frozen have no effect on the payment flow.
    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Errors from the most recent validation pass, for inline display.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The frozen snapshot, present from `AwaitingPayment` onward.
    pub fn snapshot(&self) -> Option<&RegistrationSnapshot> {
        self.snapshot.as_ref()
    }

    /// The provider's order identifier, stored on capture for display.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Transient, dismissable payment failure message.
    pub fn payment_error(&self) -> Option<&str> {
        self.payment_error.as_deref()
    }

    pub fn dismiss_payment_error(&mut self) {
        self.payment_error = None;
    }

    /// Persistent banner when the payment provider is not configured.
    /// Session-permanent, unlike the dismissable failure message.
    pub fn config_banner(&self) -> Option<&'static str> {
        if self.payment_configured {
            None
        } else {
            Some("Payment is not configured. Set PAYPAL_CLIENT_ID and reload the page.")
        }
    }

    /// The "continue to pay" click. Runs the validator; on success
    /// freezes the snapshot and reveals the payment section.
    pub fn continue_to_payment(&mut self) -> Option<UiSignal> {
        if self.phase != Phase::Entering {
            return None;
        }

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }

        self.snapshot = Some(self.draft.freeze());
        self.phase = Phase::AwaitingPayment;
        Some(UiSignal::ScrollToPayment)
    }

    /// Feeds a normalized payment event into the state machine.
    ///
    /// Capture success is terminal; failure and cancellation keep the
    /// frozen snapshot so the user can retry without re-entering data.
    pub fn handle_payment(&mut self, event: PaymentEvent) -> Option<UiSignal> {
        if self.phase != Phase::AwaitingPayment {
            return None;
        }

        match event {
            PaymentEvent::Captured { order_id } => {
                self.order_id = Some(order_id);
                self.payment_error = None;
                self.phase = Phase::Submitted;
                Some(UiSignal::ScrollToTop)
            }
            PaymentEvent::Failed { message } => {
                self.payment_error = Some(message);
                None
            }
            PaymentEvent::Cancelled => {
                self.payment_error = Some("Payment was cancelled.".to_string());
                None
            }
        }
    }
}
