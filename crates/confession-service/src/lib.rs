//! # confession-service
//!
//! Application layer: the confession and reaction use cases, the in-process
//! sliding-window rate limiter, the word-list content filter, and DTOs.

pub mod dto;
pub mod filter;
pub mod limiter;
pub mod services;

pub use dto::{
    ConfessionResponse, CreateConfessionRequest, HealthChecks, HealthResponse,
    ListConfessionsQuery, ListConfessionsResponse, ReactRequest, ReadinessResponse,
};
pub use filter::WordListFilter;
pub use limiter::{spawn_sweeper, SlidingWindowLimiter};
pub use services::{
    ConfessionService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
