use crate::entities::rate_limit::RateLimitDecision;

/// Per-client admission counter consulted before any contact work is done.
#[cfg_attr(test, mockall::automock)]
pub trait RateLimitRepository: Send + Sync {
    /// Records one attempt for `identifier` and reports whether it is admitted.
    /// A denied attempt must leave the stored state untouched.
    fn check(&self, identifier: &str) -> RateLimitDecision;
}
