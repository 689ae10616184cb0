use std::{sync::Arc, time::Duration};

use dashmap::{DashMap, mapref::entry::Entry};
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::{
    entities::rate_limit::RateLimitDecision,
    repositories::rate_limit::RateLimitRepository,
    settings::AppConfig,
};

/// Fixed window for one client identifier.
#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    reset_at: Instant,
}

impl RateLimitEntry {
    fn open(now: Instant, window: Duration) -> Self {
        Self {
            count: 1,
            reset_at: now + window,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now > self.reset_at
    }
}

/// Process-local fixed-window limiter.
///
/// Entries expire passively: an expired entry is replaced on its next
/// check, and [`InMemoryRateLimiter::sweep`] drops the ones nobody comes
/// back for. Clones share the same map.
#[derive(Clone)]
pub struct InMemoryRateLimiter {
    entries: Arc<DashMap<String, RateLimitEntry>>,
    sweep_lock: Arc<Mutex<()>>,
    max_requests: u32,
    window: Duration,
}

impl InMemoryRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            sweep_lock: Arc::new(Mutex::new(())),
            max_requests,
            window,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.contact_rate_limit,
            Duration::from_secs(config.contact_rate_window_secs),
        )
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of identifiers currently holding an entry.
    pub fn tracked(&self) -> usize {
        self.entries.len()
    }

    /// Removes every expired entry and returns how many were dropped.
    /// Returns 0 without touching the map if another sweep is running.
    pub fn sweep(&self) -> usize {
        let Some(_guard) = self.sweep_lock.try_lock() else {
            tracing::debug!("Rate-limit sweep already in progress");
            return 0;
        };

        let now = Instant::now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    fn admitted(&self, count: u32, reset_after: Duration) -> RateLimitDecision {
        RateLimitDecision {
            allowed: true,
            remaining: self.max_requests.saturating_sub(count),
            reset_after,
        }
    }
}

impl RateLimitRepository for InMemoryRateLimiter {
    fn check(&self, identifier: &str) -> RateLimitDecision {
        let now = Instant::now();

        // The entry guard holds the shard lock for the whole read-decide-write.
        match self.entries.entry(identifier.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitEntry::open(now, self.window));
                self.admitted(1, self.window)
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                if entry.is_expired(now) {
                    *entry = RateLimitEntry::open(now, self.window);
                    return self.admitted(1, self.window);
                }

                let reset_after = entry.reset_at.saturating_duration_since(now);
                if entry.count < self.max_requests {
                    entry.count += 1;
                    self.admitted(entry.count, reset_after)
                } else {
                    RateLimitDecision {
                        allowed: false,
                        remaining: 0,
                        reset_after,
                    }
                }
            }
        }
    }
}
