use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Rate-limit bucket shared by every client without a resolvable address.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Fits the longest valid form even when every character is sent as a
/// `\uXXXX` surrogate pair (12 bytes each).
pub const MAX_CONTACT_BODY_BYTES: usize = 64 * 1024;

// ───── Contact responses ─────────────────────────────────────────────
pub const CONTACT_SENT_MESSAGE: &str =
    "Thanks for reaching out! I will get back to you within 2 business days.";
pub const CONTACT_RECEIVED_MESSAGE: &str = "Message received";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const VALIDATION_FALLBACK_MESSAGE: &str = "Validation error";
pub const DISPATCH_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const UNEXPECTED_FAULT_MESSAGE: &str = "An unexpected error occurred. Please try again.";
