use std::time::Duration;

use actix_web::{
    error::ResponseError,
    http::{header::{self, ContentType}, StatusCode},
    HttpResponse
};
use derive_more::Display;

use crate::{
    constants::{
        DISPATCH_FAILED_MESSAGE, INVALID_BODY_MESSAGE, RATE_LIMITED_MESSAGE,
        UNEXPECTED_FAULT_MESSAGE,
    },
    entities::contact::ContactResponse,
};

/// Errors raised by the content endpoints.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Not found: {_0}")]
    NotFound(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::NotFound(msg) => msg.as_str(),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({ "error": message }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Terminal failures of the contact pipeline.
///
/// Every variant renders as `{ ok: false, error }`. Detail carried by a
/// variant is for the server log only; clients get the fixed message.
#[derive(Debug, Display)]
pub enum ContactError {
    #[display("Rate limit exceeded, window resets in {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[display("Malformed request body: {_0}")]
    MalformedRequest(String),

    #[display("Validation failed: {_0}")]
    ValidationFailed(String),

    #[display("Email dispatch failed")]
    DispatchFailed,

    #[display("Unexpected fault: {_0}")]
    UnexpectedFault(String),
}

impl ContactError {
    pub fn client_message(&self) -> &str {
        match self {
            ContactError::RateLimited { .. } => RATE_LIMITED_MESSAGE,
            ContactError::MalformedRequest(_) => INVALID_BODY_MESSAGE,
            ContactError::ValidationFailed(reason) => reason.as_str(),
            ContactError::DispatchFailed => DISPATCH_FAILED_MESSAGE,
            ContactError::UnexpectedFault(_) => UNEXPECTED_FAULT_MESSAGE,
        }
    }
}

impl ResponseError for ContactError {
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let ContactError::RateLimited { retry_after } = self {
            builder.insert_header((header::RETRY_AFTER, retry_after_secs(*retry_after).to_string()));
        }
        builder.json(ContactResponse::failure(self.client_message()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ContactError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ContactError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ContactError::DispatchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ContactError::UnexpectedFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Whole seconds, rounded up, never zero.
fn retry_after_secs(retry_after: Duration) -> u64 {
    let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
    secs.max(1)
}

/// Failure to hand a message to the email provider.
#[derive(Debug, Display)]
pub enum DispatchError {
    #[display("Email provider did not answer in time")]
    Timeout,

    #[display("Email transport error: {_0}")]
    Transport(String),

    #[display("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout
        } else {
            DispatchError::Transport(err.to_string())
        }
    }
}
