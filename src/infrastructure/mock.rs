use crate::domain::payment::{OrderRequest, PaymentCapture};
use crate::domain::ports::PaymentGateway;
use crate::error::{RegistrationError, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    Approve,
    FailCreate,
    FailCapture,
}

/// Scriptable gateway for tests and the offline demo CLI. Counts order
/// creations so tests can observe that a retry re-invokes creation.
pub struct MockGateway {
    behavior: MockBehavior,
    created: AtomicU32,
    requests: Mutex<Vec<OrderRequest>>,
}

impl MockGateway {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            created: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn orders_created(&self) -> u32 {
        self.created.load(Ordering::SeqCst)
    }

    /// Every order request seen so far, in creation order.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<String> {
        if self.behavior == MockBehavior::FailCreate {
            return Err(RegistrationError::Gateway("mock create declined".to_string()));
        }
        let n = self.created.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        Ok(format!("MOCK-{}-{n}", request.currency))
    }

    async fn capture_order(&self, order_id: &str) -> Result<PaymentCapture> {
        if self.behavior == MockBehavior::FailCapture {
            return Err(RegistrationError::Gateway("mock capture declined".to_string()));
        }
        Ok(PaymentCapture {
            order_id: order_id.to_string(),
        })
    }
}
