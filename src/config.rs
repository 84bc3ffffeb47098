//! Configuration for the SendPulse API client
//!
//! Configuration is loaded from the environment (with `.env` support) or
//! built explicitly. Credentials are the OAuth2 client-credentials pair
//! issued in the SendPulse account settings.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_BURST_SIZE, DEFAULT_MAX_REQUESTS, DEFAULT_PERIOD_SECONDS,
    DEFAULT_REST_TIMEOUT,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// OAuth2 client-credentials pair for the SendPulse API
pub struct Credentials {
    /// Client ID from the SendPulse account settings
    pub client_id: String,
    /// Client secret from the SendPulse account settings
    pub client_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the SendPulse REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the SendPulse API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds a configuration from environment variables, loading `.env`
    /// first when present.
    ///
    /// Recognized variables: `SENDPULSE_CLIENT_ID`, `SENDPULSE_CLIENT_SECRET`,
    /// `SENDPULSE_BASE_URL`, `SENDPULSE_REST_TIMEOUT`,
    /// `SENDPULSE_RATE_LIMIT_MAX_REQUESTS`, `SENDPULSE_RATE_LIMIT_PERIOD_SECONDS`,
    /// `SENDPULSE_RATE_LIMIT_BURST_SIZE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("SENDPULSE_CLIENT_ID", String::new());
        let client_secret = get_env_or_default("SENDPULSE_CLIENT_SECRET", String::new());

        if client_id.is_empty() {
            error!("SENDPULSE_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret.is_empty() {
            error!("SENDPULSE_CLIENT_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SENDPULSE_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("SENDPULSE_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "SENDPULSE_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "SENDPULSE_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "SENDPULSE_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_BURST_SIZE,
                ),
            },
        }
    }

    /// Builds a configuration with explicit credentials and defaults for
    /// everything else
    pub fn with_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            rate_limiter: RateLimiterConfig {
                max_requests: DEFAULT_MAX_REQUESTS,
                period_seconds: DEFAULT_PERIOD_SECONDS,
                burst_size: DEFAULT_BURST_SIZE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_credentials_uses_defaults() {
        let config = Config::with_credentials("id", "secret");
        assert_eq!(config.credentials.client_id, "id");
        assert_eq!(config.credentials.client_secret, "secret");
        assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT);
        assert_eq!(config.rate_limiter.max_requests, DEFAULT_MAX_REQUESTS);
    }
}
