use serde::Deserialize;

/// The in-memory, unsaved contents of the registration form.
///
/// Fields hold raw submitted values; whitespace is preserved until the
/// draft is frozen. The draft is page-scoped: created on first input,
/// mutated on every field change, discarded on navigation or submission.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub date: String,
    /// `10-12` or `1-3`, matching the site's session options.
    pub time_slot: String,
    pub agree_terms: bool,
    pub agree_cancel: bool,
}

impl RegistrationDraft {
    /// Freezes the draft into an immutable snapshot with trimmed fields.
    ///
    /// Only called once validation has passed; the snapshot is what the
    /// payment flow sees for the rest of the page visit.
    pub fn freeze(&self) -> RegistrationSnapshot {
        RegistrationSnapshot {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            organization: self.organization.trim().to_string(),
            date: self.date.trim().to_string(),
            time_slot: self.time_slot.trim().to_string(),
        }
    }
}

/// An immutable copy of the draft taken at the moment validation succeeds.
///
/// The payment adapter reads it and never mutates it; consent flags are
/// not carried because they gate progression and are not forwarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub date: String,
    pub time_slot: String,
}

impl RegistrationSnapshot {
    /// Defensive re-check used by the payment click guard. The snapshot is
    /// immutable, so this should always hold once frozen, but the guard
    /// runs before any money movement regardless.
    pub fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && (!self.email.is_empty() || !self.phone.is_empty())
            && !self.date.is_empty()
            && !self.time_slot.is_empty()
    }
}
