#![allow(dead_code)]

use async_trait::async_trait;
use caresite::domain::notification::NotificationPayload;
use caresite::domain::ports::NotificationSink;
use caresite::error::{RegistrationError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Notification sink that forwards every payload to a channel, so tests
/// can await the fire-and-forget dispatch deterministically.
pub struct RecordingNotifier {
    sender: UnboundedSender<NotificationPayload>,
}

impl RecordingNotifier {
    pub fn channel() -> (Arc<Self>, UnboundedReceiver<NotificationPayload>) {
        let (sender, receiver) = unbounded_channel();
        (Arc::new(Self { sender }), receiver)
    }
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> Result<()> {
        self.sender
            .send(payload.clone())
            .map_err(|e| RegistrationError::Relay(e.to_string()))
    }
}

/// Sink that always fails, for asserting the relay never blocks the
/// success path.
pub struct FailingNotifier;

#[async_trait]
impl NotificationSink for FailingNotifier {
    async fn notify(&self, _payload: &NotificationPayload) -> Result<()> {
        Err(RegistrationError::Relay("endpoint returned HTTP 500".to_string()))
    }
}

/// Writes a registrations CSV with `rows` identical valid entries.
pub fn generate_registrations_csv(path: &Path, rows: usize) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "firstName",
        "lastName",
        "email",
        "phone",
        "organization",
        "date",
        "timeSlot",
        "agreeTerms",
        "agreeCancel",
    ])?;
    for i in 1..=rows {
        wtr.write_record([
            "Jane",
            "Doe",
            &format!("jane{i}@example.com"),
            "",
            "",
            "2024-06-01",
            "10-12",
            "true",
            "true",
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
