//! In-process rate limiting

mod sliding_window;
mod sweeper;

pub use sliding_window::SlidingWindowLimiter;
pub use sweeper::spawn_sweeper;
