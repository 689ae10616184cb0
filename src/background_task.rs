use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::limiter::rate_limiter::InMemoryRateLimiter;

/// Sweeps expired rate-limit entries once per window, forever. The caller
/// owns the returned task and aborts it on shutdown.
pub async fn start_rate_limit_sweep(limiter: InMemoryRateLimiter) {
    let period = limiter.window();
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let removed = limiter.sweep();
        tracing::debug!(
            removed,
            tracked = limiter.tracked(),
            "Swept expired rate-limit entries"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::repositories::rate_limit::RateLimitRepository;

    #[tokio::test(start_paused = true)]
    async fn sweep_task_clears_abandoned_identifiers() {
        let window = Duration::from_secs(60);
        let limiter = InMemoryRateLimiter::new(3, window);
        limiter.check("198.51.100.1");
        limiter.check("198.51.100.2");

        let task = tokio::spawn(start_rate_limit_sweep(limiter.clone()));

        // First tick lands exactly on reset_at, so the entries survive it.
        tokio::time::sleep(window + Duration::from_millis(1)).await;
        assert_eq!(limiter.tracked(), 2);

        tokio::time::sleep(window).await;
        tokio::task::yield_now().await;
        assert_eq!(limiter.tracked(), 0);

        task.abort();
    }
}
