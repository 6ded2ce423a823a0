//! Server configuration
//!
//! Values come from environment variables (optionally via a `.env` file) with
//! defaults suitable for local development.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Server configuration loaded from environment variables.
#[derive(Clone)]
pub struct ServerConfig {
    /// HTTP bind address
    pub host: IpAddr,
    /// HTTP port (default: 3000)
    pub port: u16,
    /// PostgreSQL connection string; `None` runs on the in-memory store
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections
    pub max_pool_size: usize,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            database_url: None,
            max_pool_size: 16,
            log_level: String::from("info"),
        }
    }
}

// The connection string carries a password
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("max_pool_size", &self.max_pool_size)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `HOST`: bind address (default: 0.0.0.0)
    /// - `PORT`: port (default: 3000)
    /// - `DATABASE_URL`: PostgreSQL connection string (default: unset)
    /// - `DB_MAX_POOL_SIZE`: pool size (default: 16)
    /// - `LOG_LEVEL`: log filter used when `RUST_LOG` is unset (default: info)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("HOST") {
            config.host = parse_var("HOST", val)?;
        }

        if let Some(val) = lookup("PORT") {
            config.port = parse_var("PORT", val)?;
        }

        if let Some(val) = lookup("DATABASE_URL") {
            if !val.trim().is_empty() {
                config.database_url = Some(val);
            }
        }

        if let Some(val) = lookup("DB_MAX_POOL_SIZE") {
            config.max_pool_size = parse_var("DB_MAX_POOL_SIZE", val)?;
            if config.max_pool_size == 0 {
                return Err(ConfigError::InvalidValue {
                    name: "DB_MAX_POOL_SIZE",
                    value: "0".to_string(),
                });
            }
        }

        if let Some(val) = lookup("LOG_LEVEL") {
            config.log_level = val;
        }

        Ok(config)
    }

    /// Socket address the HTTP server binds to
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}
