use std::{path::Path, sync::Arc};

use anyhow::Context;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod telemetry;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{content, email, limiter, utils};

use content::static_content::StaticContentRepo;
use email::resend::ResendMailer;
use limiter::rate_limiter::InMemoryRateLimiter;
use repositories::email::EmailServiceRepository;
use use_cases::{contact::ContactHandler, content::ContentHandler};

pub struct AppState {
    pub contact_handler: AppContactHandler,
    pub content_handler: AppContentHandler,
}

pub type AppContactHandler = ContactHandler<InMemoryRateLimiter, Arc<dyn EmailServiceRepository>>;
pub type AppContentHandler = ContentHandler<StaticContentRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> anyhow::Result<Self> {
        let mailer = ResendMailer::new(config).context("failed to build email client")?;
        let content = StaticContentRepo::load(config.content_path.as_deref().map(Path::new))?;

        Ok(Self::with_services(
            InMemoryRateLimiter::from_config(config),
            Arc::new(mailer),
            content,
        ))
    }

    pub fn with_services(
        rate_limiter: InMemoryRateLimiter,
        mailer: Arc<dyn EmailServiceRepository>,
        content: StaticContentRepo,
    ) -> Self {
        AppState {
            contact_handler: ContactHandler::new(rate_limiter, mailer),
            content_handler: ContentHandler::new(content),
        }
    }
}
