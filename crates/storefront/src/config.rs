//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOP_HOST` - Bind address (default: 0.0.0.0)
//! - `SHOP_PORT` - Listen port (default: 8080)
//! - `SHOP_ORDER_LOG` - Path of the append-only order log (default: ecommerce.log)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_ORDER_LOG: &str = "ecommerce.log";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Order log file, opened in append mode at startup
    pub order_log_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get("SHOP_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_HOST".to_string(), e.to_string()))?;
        let port = get("SHOP_PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_PORT".to_string(), e.to_string()))?;
        let order_log_path =
            PathBuf::from(get("SHOP_ORDER_LOG").unwrap_or_else(|| DEFAULT_ORDER_LOG.to_string()));

        Ok(Self {
            host,
            port,
            order_log_path,
            sentry_dsn: get("SENTRY_DSN"),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
