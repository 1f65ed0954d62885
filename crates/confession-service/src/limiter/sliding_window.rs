//! Sliding-window request counter
//!
//! Every key maps to the timestamps of its recently allowed requests. A call
//! first drops timestamps that have aged out of the window, then allows the
//! request only if fewer than `max_requests` remain.
//!
//! State is process-local; each instance of the service enforces its own
//! limits.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use confession_common::RateLimitRule;
use confession_core::traits::RateLimiter;
use dashmap::DashMap;

pub struct SlidingWindowLimiter {
    window: Duration,
    max_requests: usize,
    entries: DashMap<String, VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests: max_requests as usize,
            entries: DashMap::new(),
        }
    }

    pub fn from_rule(rule: &RateLimitRule) -> Self {
        Self::new(rule.window(), rule.max_requests)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Decide for `key` as of `now`.
    ///
    /// A timestamp `t` still counts while `now - t < window`. The shard lock
    /// held by the entry guard makes prune, check and record one atomic step
    /// per key.
    pub fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut timestamps = self.entries.entry(key.to_owned()).or_default();

        while let Some(&oldest) = timestamps.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= self.max_requests {
            return false;
        }

        timestamps.push_back(now);
        true
    }

    /// Requests still counted against `key` as of `now`
    pub fn in_window_at(&self, key: &str, now: Instant) -> usize {
        self.entries.get(key).map_or(0, |timestamps| {
            timestamps
                .iter()
                .filter(|&&t| now.saturating_duration_since(t) < self.window)
                .count()
        })
    }

    /// Drop keys whose newest timestamp has left the window.
    ///
    /// Such keys would be pruned to empty on their next call anyway, so this
    /// never changes a decision. Returns the number of keys removed.
    pub fn sweep_at(&self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, timestamps| {
            timestamps
                .back()
                .is_some_and(|&newest| now.saturating_duration_since(newest) < self.window)
        });
        before.saturating_sub(self.entries.len())
    }

    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }

    /// Forget every key
    pub fn reset(&self) {
        self.entries.clear();
    }
}

impl RateLimiter for SlidingWindowLimiter {
    fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }
}

impl std::fmt::Debug for SlidingWindowLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingWindowLimiter")
            .field("window", &self.window)
            .field("max_requests", &self.max_requests)
            .field("tracked_keys", &self.entries.len())
            .finish()
    }
}
