use serde_json::Value;

use crate::{
    entities::contact::{is_bot, ContactForm, ContactOutcome, ContactReceipt},
    errors::ContactError,
    repositories::{email::EmailServiceRepository, rate_limit::RateLimitRepository},
};

/// Runs contact submissions through rate limiting, bot filtering,
/// validation and email dispatch, stopping at the first failure.
pub struct ContactHandler<L, E>
where
    L: RateLimitRepository,
    E: EmailServiceRepository,
{
    pub rate_limiter: L,
    pub mailer: E,
}

impl<L, E> ContactHandler<L, E>
where
    L: RateLimitRepository,
    E: EmailServiceRepository,
{
    pub fn new(rate_limiter: L, mailer: E) -> Self {
        ContactHandler {
            rate_limiter,
            mailer,
        }
    }

    /// Handles one submission from `client_id`. `body` is the raw payload,
    /// or the error hit while reading it; either way the attempt is counted
    /// against the client's quota first.
    pub async fn submit(
        &self,
        client_id: &str,
        body: Result<&[u8], ContactError>,
    ) -> ContactOutcome {
        let decision = self.rate_limiter.check(client_id);
        if !decision.allowed {
            tracing::warn!(client = client_id, "Contact rate limit exceeded");
            return Err(ContactError::RateLimited {
                retry_after: decision.reset_after,
            });
        }

        let raw: Value = serde_json::from_slice(body?)
            .map_err(|e| ContactError::MalformedRequest(e.to_string()))?;

        if is_bot(&raw) {
            tracing::info!(client = client_id, "Honeypot filled, discarding submission");
            return Ok(ContactReceipt::Discarded);
        }

        let submission = ContactForm::parse(raw)?;

        self.mailer.send(&submission).await.map_err(|e| {
            tracing::error!(client = client_id, error = %e, "Failed to dispatch contact email");
            ContactError::DispatchFailed
        })?;

        tracing::info!(
            client = client_id,
            remaining = decision.remaining,
            "Contact message dispatched"
        );
        Ok(ContactReceipt::Delivered)
    }
}
