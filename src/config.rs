//! Application configuration management
//!
//! Configuration is read from the process environment once at startup and
//! handed to [`AppState`](crate::state::AppState) explicitly.

use std::env;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub hashing: HashingConfig,
    pub policy: PolicyConfig,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT signing configuration
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig").field("secret", &"<redacted>").finish()
    }
}

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

/// Access rules that tighten the default trust model.
///
/// Every flag defaults to `false`, which keeps the permissive behavior:
/// anonymous uploads, any admin may act on any assignment, and status
/// changes overwrite unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyConfig {
    /// Route `/user/upload` through the auth gate
    pub require_authenticated_upload: bool,
    /// Only the assignment's own admin may accept or reject it
    pub enforce_assignment_ownership: bool,
    /// Only `Pending` assignments may be accepted or rejected
    pub guard_status_transitions: bool,
}

/// Admin account provisioned at startup
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            hashing: HashingConfig::from_env()?,
            policy: PolicyConfig::from_env()?,
            bootstrap_admin: BootstrapAdmin::from_env(),
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_or("PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?;
        if secret.is_empty() {
            return Err(ConfigError::InvalidValue("JWT_SECRET".to_string()));
        }
        Ok(Self { secret })
    }
}

impl HashingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            memory_kib: parse_or("PASSWORD_HASH_MEMORY_KIB", DEFAULT_HASH_MEMORY_KIB)?,
            iterations: parse_or("PASSWORD_HASH_ITERATIONS", DEFAULT_HASH_ITERATIONS)?,
            parallelism: parse_or("PASSWORD_HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM)?,
        })
    }
}

impl PolicyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            require_authenticated_upload: parse_flag("REQUIRE_AUTHENTICATED_UPLOAD")?,
            enforce_assignment_ownership: parse_flag("ENFORCE_ASSIGNMENT_OWNERSHIP")?,
            guard_status_transitions: parse_flag("GUARD_STATUS_TRANSITIONS")?,
        })
    }
}

impl BootstrapAdmin {
    fn from_env() -> Option<Self> {
        match (env::var("ADMIN_USERNAME"), env::var("ADMIN_PASSWORD")) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Self { username, password })
            }
            _ => None,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &str) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(false),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
