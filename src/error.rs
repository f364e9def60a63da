use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrationError>;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Click-guard rejection: the frozen snapshot is missing a required field.
    #[error("registration is incomplete")]
    Incomplete,
    /// Recoverable provider failure; the user may retry without data loss.
    #[error("payment gateway error: {0}")]
    Gateway(String),
    /// Non-fatal relay failure; logged and never surfaced to the user.
    #[error("notification relay error: {0}")]
    Relay(String),
    /// Session-permanent condition, shown as a banner rather than a
    /// dismissable message.
    #[error("payment is not configured: {0}")]
    NotConfigured(String),
}
