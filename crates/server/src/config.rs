//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WC_API_URL` - WooCommerce REST base URL (e.g. `https://shop.example/wp-json/wc/v3`)
//! - `WC_CONSUMER_KEY` - WooCommerce REST consumer key
//! - `WC_CONSUMER_SECRET` - WooCommerce REST consumer secret
//!
//! ## Optional
//! - `ORDERDESK_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDERDESK_PORT` - Listen port (default: 3000)
//! - `WC_MAX_PAGES` - Pagination safety cap per fetch (default: 200)
//! - `WC_TIMEOUT_SECS` - Per-page request timeout (default: 30)
//! - `WC_CACHE_TTL_SECS` - Fetch cache time-to-live (default: 300)
//!
//! Missing required variables are a fatal startup condition, never a runtime
//! fallback.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// WooCommerce REST API configuration
    pub woo: WooConfig,
}

/// WooCommerce REST API configuration.
///
/// Implements `Debug` manually to redact the consumer secret.
#[derive(Clone)]
pub struct WooConfig {
    /// REST base URL, without a trailing slash
    pub base_url: String,
    /// Consumer key (acts as the basic-auth username)
    pub consumer_key: String,
    /// Consumer secret (acts as the basic-auth password)
    pub consumer_secret: SecretString,
    /// Maximum pages fetched per date range before aborting
    pub max_pages: u32,
    /// Per-page request timeout
    pub timeout: Duration,
    /// Time-to-live of the per-range fetch cache
    pub cache_ttl: Duration,
}

impl std::fmt::Debug for WooConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WooConfig")
            .field("base_url", &self.base_url)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("max_pages", &self.max_pages)
            .field("timeout", &self.timeout)
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDERDESK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERDESK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ORDERDESK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERDESK_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            woo: WooConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl WooConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_required_env("WC_API_URL")?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            base_url,
            consumer_key: get_required_env("WC_CONSUMER_KEY")?,
            consumer_secret: get_required_secret("WC_CONSUMER_SECRET")?,
            max_pages: parse_env_or_default("WC_MAX_PAGES", 200)?,
            timeout: Duration::from_secs(parse_env_or_default("WC_TIMEOUT_SECS", 30)?),
            cache_ttl: Duration::from_secs(parse_env_or_default("WC_CACHE_TTL_SECS", 300)?),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable into a number, with a default when unset.
fn parse_env_or_default<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_woo_config_debug_redacts_secret() {
        let config = WooConfig {
            base_url: "https://shop.example/wp-json/wc/v3".to_string(),
            consumer_key: "ck_test".to_string(),
            consumer_secret: SecretString::from("cs_supersecret"),
            max_pages: 200,
            timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(300),
        };

        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("cs_supersecret"));
    }

    #[test]
    fn test_parse_env_or_default_uses_default_when_unset() {
        let value: u32 =
            parse_env_or_default("ORDERDESK_TEST_UNSET_VAR", 42).expect("default applies");
        assert_eq!(value, 42);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 8080,
            woo: WooConfig {
                base_url: String::new(),
                consumer_key: String::new(),
                consumer_secret: SecretString::from(""),
                max_pages: 1,
                timeout: Duration::from_secs(1),
                cache_ttl: Duration::from_secs(1),
            },
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }
}
