use std::{sync::Arc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;
use url::Url;
use zeroize::Zeroizing;

use crate::{
    entities::{contact::ContactSubmission, email::OutboundEmail},
    errors::DispatchError,
    repositories::email::EmailServiceRepository,
    settings::AppConfig,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends contact notifications through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    endpoint: Url,
    api_key: Arc<Zeroizing<String>>,
    sender: String,
    recipient: String,
}

impl ResendMailer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let endpoint = format!("{}/emails", config.email_api_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("invalid email API URL: {}", config.email_api_url))?;

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(Duration::from_secs(config.email_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build email HTTP client")?;

        if config.resend_api_key.is_empty() {
            tracing::warn!("No email provider API key configured; contact messages will be rejected");
        }

        Ok(ResendMailer {
            client,
            endpoint,
            api_key: Arc::new(Zeroizing::new(config.resend_api_key.clone())),
            sender: config.email_from.clone(),
            recipient: config.email_to.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailServiceRepository for ResendMailer {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DispatchError> {
        let email = OutboundEmail::compose(submission, &self.sender, &self.recipient);

        let response = self.client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.as_str())
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Email provider accepted message");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
