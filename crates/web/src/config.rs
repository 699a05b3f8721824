//! Funnel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRAMEFIT_HOST` - Bind address (default: 127.0.0.1)
//! - `FRAMEFIT_PORT` - Listen port (default: 3000)
//! - `FRAMEFIT_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `FRAMEFIT_ANALYSIS_DELAY_MS` - Simulated analysis latency (default: 3000)
//! - `FRAMEFIT_TRYON_DELAY_MS` - Simulated try-on latency (default: 2500)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Funnel application configuration.
#[derive(Debug, Clone)]
pub struct FunnelConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the funnel
    pub base_url: String,
    /// Simulated facial-analysis latency in milliseconds
    pub analysis_delay_ms: u64,
    /// Simulated try-on generation latency in milliseconds
    pub tryon_delay_ms: u64,
}

impl FunnelConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("FRAMEFIT_HOST", "127.0.0.1")?;
        let port = parse_env("FRAMEFIT_PORT", "3000")?;
        let base_url = get_env_or_default("FRAMEFIT_BASE_URL", "http://localhost:3000");
        let analysis_delay_ms = parse_env("FRAMEFIT_ANALYSIS_DELAY_MS", "3000")?;
        let tryon_delay_ms = parse_env("FRAMEFIT_TRYON_DELAY_MS", "2500")?;

        Ok(Self {
            host,
            port,
            base_url,
            analysis_delay_ms,
            tryon_delay_ms,
        })
    }

    /// Configuration for tests: bind anywhere, zero simulated latency.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            base_url: "http://localhost".to_owned(),
            analysis_delay_ms: 0,
            tryon_delay_ms: 0,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Simulated analysis latency.
    #[must_use]
    pub const fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Simulated try-on generation latency.
    #[must_use]
    pub const fn tryon_delay(&self) -> Duration {
        Duration::from_millis(self.tryon_delay_ms)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable (or its default) parsed to `T`.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_falls_back_to_default() {
        // A key nothing sets, so the default path is what gets exercised
        // regardless of the ambient environment.
        let port: u16 = parse_env("FRAMEFIT_TEST_UNSET_PORT", "3000").unwrap();
        assert_eq!(port, 3000);
        assert_eq!(
            get_env_or_default("FRAMEFIT_TEST_UNSET_URL", "http://localhost:3000"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let result: Result<u16, _> = parse_env("FRAMEFIT_TEST_UNSET_PORT", "not-a-port");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "FRAMEFIT_TEST_UNSET_PORT"));
    }

    #[test]
    fn test_socket_addr() {
        let config = FunnelConfig::for_tests();
        assert_eq!(config.socket_addr().ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_test_config_has_zero_latency() {
        let config = FunnelConfig::for_tests();
        assert_eq!(config.analysis_delay(), Duration::ZERO);
        assert_eq!(config.tryon_delay(), Duration::ZERO);
    }
}
