//! Rate limiter port

/// Decides whether an action identified by `key` may proceed right now.
///
/// An allowed call is recorded against the key; a rejected call is not.
pub trait RateLimiter: Send + Sync {
    fn allow(&self, key: &str) -> bool;
}
