//! # confession-db
//!
//! Storage layer implementing [`ConfessionRepository`](confession_core::ConfessionRepository).
//!
//! ## Overview
//!
//! - Connection pool management and migrations for PostgreSQL
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgConfessionRepository`, the production store
//! - `MemoryConfessionRepository`, a process-local store for tests and
//!   `STORAGE_BACKEND=memory`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use confession_core::SnowflakeGenerator;
//! use confession_db::{create_pool, run_migrations, PgConfessionRepository, PoolConfig};
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new(url)).await?;
//!     run_migrations(&pool).await?;
//!     let repo = PgConfessionRepository::new(pool, Arc::new(SnowflakeGenerator::new(0)));
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{MemoryConfessionRepository, PgConfessionRepository};
