//! Repository implementations
//!
//! Two implementations of the `ConfessionRepository` port from confession-core:
//! PostgreSQL for production and a process-local store for tests and demos.

mod confession;
mod error;
mod memory;

pub use confession::PgConfessionRepository;
pub use memory::MemoryConfessionRepository;
