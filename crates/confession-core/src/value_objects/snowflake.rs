//! Snowflake ID - time-ordered 64-bit confession identifier
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker id (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! Ordering by id therefore matches creation order, which lets the
//! stores break `created_at` ties deterministically.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Confession identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// 2025-01-01 00:00:00 UTC, in milliseconds
    pub const EPOCH: i64 = 1_735_689_600_000;

    const WORKER_BITS: u32 = 10;
    const SEQUENCE_BITS: u32 = 12;
    const MAX_SEQUENCE: i64 = (1 << Self::SEQUENCE_BITS) - 1;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch encoded in the id
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> (Self::WORKER_BITS + Self::SEQUENCE_BITS)) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> Self::SEQUENCE_BITS) & ((1 << Self::WORKER_BITS) - 1)) as u16
    }

    /// Creation time encoded in the id, if representable
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_millis()).single()
    }

    /// Parse the decimal string form used on the wire.
    ///
    /// Only strictly positive values are valid ids.
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        match s.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(SnowflakeParseError::InvalidFormat),
        }
    }

    fn compose(timestamp: i64, worker_id: u16, sequence: i64) -> Self {
        Self(
            ((timestamp - Self::EPOCH) << (Self::WORKER_BITS + Self::SEQUENCE_BITS))
                | (i64::from(worker_id) << Self::SEQUENCE_BITS)
                | sequence,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Always a JSON string so browsers never lose precision
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Snowflake::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Default)]
struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

/// Thread-safe id generator producing strictly increasing ids per worker.
///
/// When the wall clock steps backwards the generator keeps using the last
/// timestamp it issued. When the sequence for a millisecond runs out it
/// moves on to the next millisecond instead of spinning.
#[derive(Debug)]
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// Highest accepted worker id
    pub const MAX_WORKER_ID: u16 = 1023;

    /// # Panics
    /// Panics if `worker_id` is above [`Self::MAX_WORKER_ID`]
    pub fn new(worker_id: u16) -> Self {
        assert!(
            worker_id <= Self::MAX_WORKER_ID,
            "Worker ID must be < 1024"
        );
        Self {
            worker_id,
            state: Mutex::new(GeneratorState::default()),
        }
    }

    pub fn generate(&self) -> Snowflake {
        let now = current_millis();
        let mut state = self.state.lock();

        let timestamp = now.max(state.last_timestamp);
        if timestamp == state.last_timestamp {
            if state.sequence >= Snowflake::MAX_SEQUENCE {
                state.last_timestamp += 1;
                state.sequence = 0;
            } else {
                state.sequence += 1;
            }
        } else {
            state.last_timestamp = timestamp;
            state.sequence = 0;
        }

        Snowflake::compose(state.last_timestamp, self.worker_id, state.sequence)
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(Snowflake::EPOCH)
}
