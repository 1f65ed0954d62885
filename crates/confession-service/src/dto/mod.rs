//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs, deserialized leniently so the services decide what is missing
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateConfessionRequest, ListConfessionsQuery, ReactRequest};
pub use responses::{
    ConfessionResponse, HealthChecks, HealthResponse, ListConfessionsResponse, ReadinessResponse,
};
