use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    constants::{CONTACT_RECEIVED_MESSAGE, CONTACT_SENT_MESSAGE, VALIDATION_FALLBACK_MESSAGE},
    errors::ContactError,
};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 80;
const MIN_MESSAGE_LENGTH: usize = 10;
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Fields in the order their violations are reported.
const FIELD_ORDER: [&str; 4] = ["name", "email", "message", "honeypot"];

// ───── Input ─────────────────────────────────────────────────────────

/// Contact form as posted by the site. Unknown fields are ignored.
///
/// Text fields that are missing or not strings are `None` and fail the
/// `required` rule at their own position.
#[derive(Debug, Validate)]
pub struct ContactForm {
    #[validate(required, custom(function = "validate_name"))]
    pub name: Option<String>,

    #[validate(required, email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(required, custom(function = "validate_message"))]
    pub message: Option<String>,

    /// Kept raw so a non-string value, `null` included, can be rejected.
    #[validate(custom(function = "validate_honeypot"))]
    pub honeypot: Option<Value>,
}

/// A submission that passed validation and is ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_raw(raw: &Value) -> Self {
        let text = |field: &str| raw.get(field).and_then(Value::as_str).map(str::to_owned);
        ContactForm {
            name: text("name"),
            email: text("email"),
            message: text("message"),
            honeypot: raw.get("honeypot").cloned(),
        }
    }

    /// Validates a decoded JSON body, surfacing only the first violation.
    pub fn parse(raw: Value) -> Result<ContactSubmission, ContactError> {
        let form = ContactForm::from_raw(&raw);

        form.validate()
            .map_err(|errors| ContactError::ValidationFailed(first_violation(&errors)))?;

        match (form.name, form.email, form.message) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission { name, email, message }),
            _ => Err(ContactError::ValidationFailed(VALIDATION_FALLBACK_MESSAGE.to_string())),
        }
    }
}

/// True when the hidden honeypot field carries anything a human would not
/// have filled in.
pub fn is_bot(raw: &Value) -> bool {
    match raw.get("honeypot") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(_) => true,
    }
}

// ───── Outcome ───────────────────────────────────────────────────────

/// Successful end states of a contact request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactReceipt {
    /// Email handed to the provider.
    Delivered,
    /// Honeypot tripped; acknowledged but dropped.
    Discarded,
}

impl ContactReceipt {
    pub fn message(&self) -> &'static str {
        match self {
            ContactReceipt::Delivered => CONTACT_SENT_MESSAGE,
            ContactReceipt::Discarded => CONTACT_RECEIVED_MESSAGE,
        }
    }
}

pub type ContactOutcome = Result<ContactReceipt, ContactError>;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl ContactResponse {
    pub fn success(message: &str) -> Self {
        ContactResponse { ok: true, error: None, message: Some(message.to_string()) }
    }

    pub fn failure(error: &str) -> Self {
        ContactResponse { ok: false, error: Some(error.to_string()), message: None }
    }
}

// ───── Validation Helpers ───────────────────────────────────────────
fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < MIN_NAME_LENGTH {
        return Err(new_validation_error(
            "name_too_short",
            format!("Name must be at least {MIN_NAME_LENGTH} characters"),
        ));
    }
    if len > MAX_NAME_LENGTH {
        return Err(new_validation_error(
            "name_too_long",
            format!("Name must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn validate_message(message: &str) -> Result<(), ValidationError> {
    let len = message.chars().count();
    if len < MIN_MESSAGE_LENGTH {
        return Err(new_validation_error(
            "message_too_short",
            format!("Message must be at least {MIN_MESSAGE_LENGTH} characters"),
        ));
    }
    if len > MAX_MESSAGE_LENGTH {
        return Err(new_validation_error(
            "message_too_long",
            format!("Message must be at most {MAX_MESSAGE_LENGTH} characters"),
        ));
    }
    Ok(())
}

fn validate_honeypot(honeypot: &Value) -> Result<(), ValidationError> {
    if honeypot.is_string() {
        Ok(())
    } else {
        Err(ValidationError::new("honeypot_not_string"))
    }
}

fn new_validation_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn first_violation(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .find_map(|field| field_errors.get(*field).and_then(|errs| errs.first()))
        .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| VALIDATION_FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(name: &str, email: &str, message: &str) -> Value {
        json!({ "name": name, "email": email, "message": message })
    }

    fn rejection(raw: Value) -> String {
        match ContactForm::parse(raw) {
            Err(ContactError::ValidationFailed(reason)) => reason,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_valid_submission() {
        let submission = ContactForm::parse(form(
            "Ann Lee",
            "ann@example.com",
            "Hello, I'd like to discuss a project with you.",
        ))
        .unwrap();

        assert_eq!(submission.name, "Ann Lee");
        assert_eq!(submission.email, "ann@example.com");
    }

    #[test]
    fn name_length_boundaries() {
        assert_eq!(
            rejection(form("A", "ann@example.com", "long enough message")),
            "Name must be at least 2 characters"
        );
        assert!(ContactForm::parse(form("Al", "ann@example.com", "long enough message")).is_ok());
        assert!(ContactForm::parse(form(&"n".repeat(80), "ann@example.com", "long enough message")).is_ok());
        assert_eq!(
            rejection(form(&"n".repeat(81), "ann@example.com", "long enough message")),
            "Name must be at most 80 characters"
        );
    }

    #[test]
    fn message_length_boundaries() {
        assert_eq!(
            rejection(form("Ann", "ann@example.com", &"m".repeat(9))),
            "Message must be at least 10 characters"
        );
        assert!(ContactForm::parse(form("Ann", "ann@example.com", &"m".repeat(10))).is_ok());
        assert!(ContactForm::parse(form("Ann", "ann@example.com", &"m".repeat(2000))).is_ok());
        assert_eq!(
            rejection(form("Ann", "ann@example.com", &"m".repeat(2001))),
            "Message must be at most 2000 characters"
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert!(ContactForm::parse(form("Zoë", "zoe@example.com", &"é".repeat(2000))).is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert_eq!(
            rejection(form("Ann", "not-an-email", "long enough message")),
            "Invalid email address"
        );
    }

    #[test]
    fn reports_only_the_first_violation_in_field_order() {
        assert_eq!(
            rejection(form("A", "not-an-email", "short")),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            rejection(form("Ann", "not-an-email", "short")),
            "Invalid email address"
        );
    }

    #[test]
    fn wrong_shape_falls_back_to_generic_message() {
        assert_eq!(rejection(json!({ "name": 42, "email": "a@b.co" })), "Validation error");
        assert_eq!(rejection(json!(["not", "an", "object"])), "Validation error");
    }

    #[test]
    fn ignores_unknown_fields() {
        let mut raw = form("Ann", "ann@example.com", "long enough message");
        raw["company"] = json!("Acme");
        assert!(ContactForm::parse(raw).is_ok());
    }

    #[test]
    fn honeypot_must_be_a_string() {
        for honeypot in [json!(false), json!(0), json!(null), json!([])] {
            let mut raw = form("Ann", "ann@example.com", "long enough message");
            raw["honeypot"] = honeypot;
            assert_eq!(rejection(raw), "Validation error");
        }

        let mut raw = form("Ann", "ann@example.com", "long enough message");
        raw["honeypot"] = json!("");
        assert!(ContactForm::parse(raw).is_ok());
    }

    #[test]
    fn earlier_violation_wins_over_later_wrong_type() {
        assert_eq!(
            rejection(json!({ "name": "A", "email": "ann@example.com", "message": 12345 })),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            rejection(json!({ "name": "Ann", "email": "nope", "honeypot": false })),
            "Invalid email address"
        );
    }

    #[test]
    fn missing_or_mistyped_field_reports_at_its_position() {
        assert_eq!(
            rejection(json!({ "email": "nope", "message": "short" })),
            "Validation error"
        );
        assert_eq!(
            rejection(json!({ "name": "Ann", "email": 7, "message": "short" })),
            "Validation error"
        );
    }

    #[test]
    fn honeypot_detection() {
        assert!(is_bot(&json!({ "honeypot": "x" })));
        assert!(is_bot(&json!({ "honeypot": 1 })));
        assert!(is_bot(&json!({ "honeypot": true })));
        assert!(!is_bot(&json!({ "honeypot": "" })));
        assert!(!is_bot(&json!({ "honeypot": null })));
        assert!(!is_bot(&json!({ "name": "Ann" })));
        assert!(!is_bot(&json!("honeypot")));
    }

    #[test]
    fn response_omits_absent_fields() {
        let body = serde_json::to_value(ContactResponse::success(CONTACT_RECEIVED_MESSAGE)).unwrap();
        assert_eq!(body, json!({ "ok": true, "message": "Message received" }));
    }
}
