//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub storage: StorageConfig,
    pub database: Option<DatabaseConfig>,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub message: MessageConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which confession store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Database configuration, present only for the Postgres backend
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// One sliding-window rule: at most `max_requests` per `window_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimitRule {
    pub window_ms: u64,
    pub max_requests: u32,
}

impl RateLimitRule {
    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub confession: RateLimitRule,
    pub reaction: RateLimitRule,
    /// Idle-key sweep period in seconds; 0 disables sweeping
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl RateLimitConfig {
    #[must_use]
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            confession: default_confession_rule(),
            reaction: default_reaction_rule(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// CORS configuration; an empty list allows any origin
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_message_max_length")]
    pub max_length: usize,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "confession-board".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_confession_rule() -> RateLimitRule {
    RateLimitRule {
        window_ms: 60_000,
        max_requests: 5,
    }
}

fn default_reaction_rule() -> RateLimitRule {
    RateLimitRule {
        window_ms: 30_000,
        max_requests: 20,
    }
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_message_max_length() -> usize {
    confession_core::Confession::MAX_MESSAGE_LENGTH
}

const MAX_WORKER_ID: u16 = 1023;

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let env = match vars.get("APP_ENV") {
            Some(raw) => raw
                .parse()
                .map_err(|()| ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        let backend = match vars.get("STORAGE_BACKEND").as_deref() {
            None | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue(
                    "STORAGE_BACKEND",
                    other.to_string(),
                ))
            }
        };

        let database = match backend {
            StorageBackend::Postgres => Some(DatabaseConfig {
                url: vars
                    .get("DATABASE_URL")
                    .ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: vars
                    .parse("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: vars
                    .parse("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: vars
                    .parse("DATABASE_RUN_MIGRATIONS")?
                    .unwrap_or_else(default_true),
            }),
            StorageBackend::Memory => None,
        };

        let defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            confession: RateLimitRule {
                window_ms: vars
                    .parse("CONFESSION_RATE_LIMIT_WINDOW_MS")?
                    .unwrap_or(defaults.confession.window_ms),
                max_requests: vars
                    .parse("CONFESSION_RATE_LIMIT_MAX")?
                    .unwrap_or(defaults.confession.max_requests),
            },
            reaction: RateLimitRule {
                window_ms: vars
                    .parse("REACTION_RATE_LIMIT_WINDOW_MS")?
                    .unwrap_or(defaults.reaction.window_ms),
                max_requests: vars
                    .parse("REACTION_RATE_LIMIT_MAX")?
                    .unwrap_or(defaults.reaction.max_requests),
            },
            sweep_interval_secs: vars
                .parse("RATE_LIMIT_SWEEP_INTERVAL_SECS")?
                .unwrap_or(defaults.sweep_interval_secs),
        };
        for (key, rule) in [
            ("CONFESSION_RATE_LIMIT_WINDOW_MS", rate_limit.confession),
            ("REACTION_RATE_LIMIT_WINDOW_MS", rate_limit.reaction),
        ] {
            if rule.window_ms == 0 {
                return Err(ConfigError::InvalidValue(key, "0".to_string()));
            }
        }

        let worker_id: u16 = vars.parse("WORKER_ID")?.unwrap_or(0);
        if worker_id > MAX_WORKER_ID {
            return Err(ConfigError::InvalidValue("WORKER_ID", worker_id.to_string()));
        }

        let max_length: usize = vars
            .parse("MESSAGE_MAX_LENGTH")?
            .unwrap_or_else(default_message_max_length);
        if max_length == 0 {
            return Err(ConfigError::InvalidValue("MESSAGE_MAX_LENGTH", "0".to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: vars.get("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: vars.get("API_HOST").unwrap_or_else(default_host),
                port: vars.parse("API_PORT")?.unwrap_or_else(default_port),
            },
            storage: StorageConfig { backend },
            database,
            rate_limit,
            cors: CorsConfig {
                allowed_origins: vars
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            message: MessageConfig { max_length },
            snowflake: SnowflakeConfig { worker_id },
        })
    }

    /// In-memory configuration with default limits, used by tests and local runs
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
            },
            database: None,
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
            message: MessageConfig {
                max_length: default_message_max_length(),
            },
            snowflake: SnowflakeConfig { worker_id: 0 },
        }
    }
}

/// Non-empty variable access over a lookup function
struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn parse<T: FromStr>(&self, key: &'static str) -> Result<Option<T>, ConfigError> {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|_| ConfigError::InvalidValue(key, raw))
            })
            .transpose()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
