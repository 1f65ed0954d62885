//! Ports - the interfaces the service layer depends on

mod content_filter;
mod rate_limit;
mod repositories;

pub use content_filter::ContentFilter;
pub use rate_limit::RateLimiter;
pub use repositories::{
    ConfessionPage, ConfessionQuery, ConfessionRepository, RepoResult, SortOrder,
};
