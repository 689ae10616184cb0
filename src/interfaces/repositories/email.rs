use std::sync::Arc;

use async_trait::async_trait;

use crate::{entities::contact::ContactSubmission, errors::DispatchError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailServiceRepository: Send + Sync {
    /// Hands one notification to the transactional-email provider.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DispatchError>;
}

#[async_trait]
impl<T> EmailServiceRepository for Arc<T>
where
    T: EmailServiceRepository + ?Sized,
{
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DispatchError> {
        (**self).send(submission).await
    }
}
