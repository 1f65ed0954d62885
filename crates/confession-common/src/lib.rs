//! # confession-common
//!
//! Shared utilities including configuration, error handling, telemetry, and
//! client identity hashing.

pub mod config;
pub mod error;
pub mod identity;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    MessageConfig, RateLimitConfig, RateLimitRule, ServerConfig, SnowflakeConfig, StorageBackend,
    StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use identity::{hash_identifier, short_hash, UNKNOWN_CLIENT};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
