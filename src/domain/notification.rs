use crate::domain::draft::RegistrationSnapshot;
use rust_decimal::Decimal;
use serde::Serialize;

/// Denormalized merge of the frozen snapshot, the fixed fee, and the
/// provider's order id. Built once, after a successful capture, and sent
/// at most once. Flat camelCase fields, no nesting.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub date: String,
    pub time_slot: String,
    pub amount: Decimal,
    pub order_id: String,
}

impl NotificationPayload {
    pub fn new(snapshot: &RegistrationSnapshot, amount: Decimal, order_id: &str) -> Self {
        Self {
            first_name: snapshot.first_name.clone(),
            last_name: snapshot.last_name.clone(),
            email: snapshot.email.clone(),
            phone: snapshot.phone.clone(),
            organization: snapshot.organization.clone(),
            date: snapshot.date.clone(),
            time_slot: snapshot.time_slot.clone(),
            amount,
            order_id: order_id.to_string(),
        }
    }
}
