//! Application state
//!
//! Holds the service context plus concrete handles on the rate limiters,
//! which the background sweeper and the tests need.

use std::sync::Arc;

use confession_service::{ServiceContext, SlidingWindowLimiter};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    limiters: Arc<[Arc<SlidingWindowLimiter>]>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, limiters: Vec<Arc<SlidingWindowLimiter>>) -> Self {
        Self {
            service_context: Arc::new(service_context),
            limiters: limiters.into(),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Rate limiters owned by this instance
    pub fn limiters(&self) -> &[Arc<SlidingWindowLimiter>] {
        &self.limiters
    }

    /// Forget every rate-limit window
    pub fn reset_limits(&self) {
        for limiter in self.limiters.iter() {
            limiter.reset();
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("limiters", &self.limiters.len())
            .finish()
    }
}
