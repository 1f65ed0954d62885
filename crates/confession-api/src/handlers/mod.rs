//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod confessions;
pub mod fallback;
pub mod health;
pub mod reactions;
