//! Validators for the site's other client-side forms (referral intake,
//! general inquiry, contact). Same contract as the registration
//! validator: pure functions returning a field → message map, empty when
//! the form may be submitted.

use crate::domain::validate::ValidationErrors;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralForm {
    pub client_first_name: String,
    pub client_last_name: String,
    pub dob: String,
    pub address: String,
    pub preferred_contact: String,
    pub email: String,
    pub phone: String,
    pub consent_share: bool,
    pub consent_understand: bool,
}

pub fn validate_referral(form: &ReferralForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let required: [(&'static str, &str); 5] = [
        ("clientFirstName", &form.client_first_name),
        ("clientLastName", &form.client_last_name),
        ("dob", &form.dob),
        ("address", &form.address),
        ("preferredContact", &form.preferred_contact),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            errors.insert(key, "Required");
        }
    }
    if form.email.trim().is_empty() && form.phone.trim().is_empty() {
        errors.insert("contactAny", "Provide an email or phone number.");
    }
    if !form.consent_share || !form.consent_understand {
        errors.insert("consent", "You must accept the consent statements.");
    }
    errors
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryForm {
    pub name: String,
    pub preferred_contact: String,
    pub subject: String,
    pub message: String,
    pub email: String,
    pub phone: String,
    pub consent_share: bool,
    pub consent_understand: bool,
}

pub fn validate_inquiry(form: &InquiryForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let required: [(&'static str, &str); 4] = [
        ("name", &form.name),
        ("preferredContact", &form.preferred_contact),
        ("subject", &form.subject),
        ("message", &form.message),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            errors.insert(key, "Required");
        }
    }
    if form.email.trim().is_empty() && form.phone.trim().is_empty() {
        errors.insert("contactAny", "Provide an email or phone number.");
    }
    if !form.consent_share || !form.consent_understand {
        errors.insert("consent", "You must accept the consent statements.");
    }
    errors
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub county: String,
    pub topic: String,
    pub message: String,
    pub consent: bool,
    /// Honeypot. Humans leave it empty; a filled value means the
    /// submission should be dropped without feedback.
    pub honey: String,
}

#[derive(Debug, PartialEq)]
pub enum ContactOutcome {
    Accept,
    Reject(ValidationErrors),
    /// Honeypot tripped: pretend success, discard the submission.
    DropSilently,
}

pub fn screen_contact(form: &ContactForm) -> ContactOutcome {
    if !form.honey.is_empty() {
        return ContactOutcome::DropSilently;
    }

    let mut errors = ValidationErrors::new();
    if form.full_name.trim().is_empty() {
        errors.insert("fullName", "Please enter your full name.");
    }
    if !looks_like_email(&form.email) {
        errors.insert("email", "Enter a valid email address.");
    }
    if form.message.trim().is_empty() {
        errors.insert("message", "Please enter a brief message.");
    }
    if !form.consent {
        errors.insert("consent", "Please confirm you agree to be contacted.");
    }

    if errors.is_empty() {
        ContactOutcome::Accept
    } else {
        ContactOutcome::Reject(errors)
    }
}

/// Shape check only: something@something.tld, no whitespace. Deliverability
/// is the mail provider's problem.
fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referral_requires_client_identity() {
        let form = ReferralForm {
            email: "ref@example.com".to_string(),
            consent_share: true,
            consent_understand: true,
            ..Default::default()
        };
        let errors = validate_referral(&form);
        assert!(errors.contains_key("clientFirstName"));
        assert!(errors.contains_key("dob"));
        assert!(errors.contains_key("preferredContact"));
        assert!(!errors.contains_key("contactAny"));
    }

    #[test]
    fn test_inquiry_accepts_complete_form() {
        let form = InquiryForm {
            name: "Jane Doe".to_string(),
            preferred_contact: "email".to_string(),
            subject: "Scheduling".to_string(),
            message: "When is the next class?".to_string(),
            email: "jane@example.com".to_string(),
            consent_share: true,
            consent_understand: true,
            ..Default::default()
        };
        assert!(validate_inquiry(&form).is_empty());
    }

    #[test]
    fn test_contact_honeypot_drops_silently() {
        let form = ContactForm {
            honey: "gotcha".to_string(),
            ..Default::default()
        };
        assert_eq!(screen_contact(&form), ContactOutcome::DropSilently);
    }

    #[test]
    fn test_contact_rejects_bad_email() {
        let form = ContactForm {
            full_name: "Jane Doe".to_string(),
            email: "not-an-email".to_string(),
            message: "Hello".to_string(),
            consent: true,
            ..Default::default()
        };
        match screen_contact(&form) {
            ContactOutcome::Reject(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains_key("email"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_email_shape_check() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.co"));
    }
}
