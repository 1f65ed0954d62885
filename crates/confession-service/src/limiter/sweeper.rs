//! Background eviction of idle rate-limit keys

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use super::SlidingWindowLimiter;

/// Sweep every limiter once per `every` until the task is aborted
pub fn spawn_sweeper(limiters: Vec<Arc<SlidingWindowLimiter>>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed: usize = limiters.iter().map(|limiter| limiter.sweep()).sum();
            if removed > 0 {
                debug!(removed, "Swept idle rate-limit keys");
            }
        }
    })
}
