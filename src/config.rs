//! Application configuration
//!
//! Built once in `main` from the environment and handed to the components
//! that need it. Every value has a default; the store defaults are
//! placeholders, real credentials come from `DB_*` variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;
use warp::http::uri::Authority;

use crate::store::StoreConfig;

/// Browser origins allowed by default
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://fact-check-system-static.onrender.com",
    "http://localhost:3000",
    "http://localhost:5173",
];

/// Default upper bound for the `limit` query parameter
pub const DEFAULT_MAX_LIST_LIMIT: i64 = 1000;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid CORS origin '{0}': expected scheme://host[:port]")]
    InvalidOrigin(String),
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Origins that receive CORS headers
    pub allowed_origins: Vec<String>,

    /// `limit` values above this are clamped
    pub max_list_limit: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8000),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            max_list_limit: DEFAULT_MAX_LIST_LIMIT,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_defaults = StoreConfig::default();
        let server_defaults = ServerConfig::default();

        let store = StoreConfig {
            host: lookup("DB_HOST").unwrap_or(store_defaults.host),
            port: parse_or("DB_PORT", &lookup, store_defaults.port)?,
            database: lookup("DB_NAME").unwrap_or(store_defaults.database),
            user: lookup("DB_USER").unwrap_or(store_defaults.user),
            password: lookup("DB_PASS").unwrap_or(store_defaults.password),
            connect_timeout_ms: parse_or(
                "DB_CONNECT_TIMEOUT_MS",
                &lookup,
                store_defaults.connect_timeout_ms,
            )?,
            statement_timeout_ms: parse_or(
                "DB_STATEMENT_TIMEOUT_MS",
                &lookup,
                store_defaults.statement_timeout_ms,
            )?,
            max_pool_size: parse_or("DB_POOL_SIZE", &lookup, store_defaults.max_pool_size)?,
        };

        if store.max_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_POOL_SIZE",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let host: IpAddr = parse_or("HOST", &lookup, server_defaults.bind_addr.ip())?;
        let port: u16 = parse_or("PORT", &lookup, server_defaults.bind_addr.port())?;

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => server_defaults.allowed_origins,
        };

        let max_list_limit = parse_or("MESSAGES_MAX_LIMIT", &lookup, server_defaults.max_list_limit)?;
        if max_list_limit < 1 {
            return Err(ConfigError::InvalidValue {
                name: "MESSAGES_MAX_LIMIT",
                value: max_list_limit.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            store,
            server: ServerConfig {
                bind_addr: SocketAddr::new(host, port),
                allowed_origins,
                max_list_limit,
            },
        })
    }
}

fn parse_or<T, F>(name: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::InvalidValue {
                name,
                reason: e.to_string(),
                value,
            }),
        },
        None => Ok(default),
    }
}

/// Parse a comma-separated origin list, skipping blank entries
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            validate_origin(origin)?;
            Ok(origin.trim_end_matches('/').to_string())
        })
        .collect()
}

fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidOrigin(origin.to_string());

    let (scheme, rest) = origin.split_once("://").ok_or_else(invalid)?;
    if scheme != "http" && scheme != "https" {
        return Err(invalid());
    }

    let authority = rest.trim_end_matches('/');
    if authority.is_empty() || authority.contains('/') {
        return Err(invalid());
    }

    Authority::from_str(authority).map_err(|_| invalid())?;
    Ok(())
}
