use crate::domain::draft::RegistrationDraft;
use std::collections::BTreeMap;

/// Field key → human-readable message, recomputed wholesale on each pass.
/// Keys are the form field names; an empty map signals "valid".
pub type ValidationErrors = BTreeMap<&'static str, &'static str>;

/// Validates the registration draft. Pure and deterministic: same draft,
/// same result.
pub fn validate(draft: &RegistrationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.first_name.trim().is_empty() {
        errors.insert("firstName", "Required");
    }
    if draft.last_name.trim().is_empty() {
        errors.insert("lastName", "Required");
    }
    // At least one way to reach the participant. Keyed to a combined
    // "contactAny" field rather than email or phone individually.
    if draft.email.trim().is_empty() && draft.phone.trim().is_empty() {
        errors.insert("contactAny", "Provide an email or phone number.");
    }
    if draft.date.trim().is_empty() {
        errors.insert("date", "Required");
    }
    if draft.time_slot.trim().is_empty() {
        errors.insert("timeSlot", "Required");
    }
    if !draft.agree_terms || !draft.agree_cancel {
        errors.insert(
            "consent",
            "You must accept the terms and the cancellation policy.",
        );
    }

    errors
}
