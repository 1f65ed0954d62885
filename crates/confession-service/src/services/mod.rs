//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates rate limiting, validation, filtering and storage.

pub mod confession;
pub mod context;
pub mod error;
pub mod reaction;

pub use confession::ConfessionService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
