//! Bearer-token cache and OAuth2 client-credentials grant
//!
//! The SendPulse API authorizes every call with a short-lived bearer token
//! obtained from `POST /oauth/access_token`. One `TokenManager` is shared by
//! all requests of a client instance; the cached token lives behind a
//! read/write lock so concurrent requests read it without contention while
//! refresh and invalidation take the write lock.
//!
//! Two tasks that both observe an empty cache may both fetch a token. That
//! race is tolerated: both grants succeed and the last write wins.

use crate::config::Config;
use crate::constants::TOKEN_PATH;
use crate::error::AppError;
use crate::model::token::TokenResponse;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Safety margin in seconds before the reported expiry
const EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Cached bearer token with expiry bookkeeping
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    /// Unix timestamp of the grant
    created_at: i64,
    /// Lifetime in seconds as reported by the token endpoint
    expires_in: u64,
}

impl CachedToken {
    fn new(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            created_at: Utc::now().timestamp(),
            expires_in,
        }
    }

    /// Checks if the token is expired or will expire within the safety margin
    fn is_expired(&self) -> bool {
        let expires_at = self.created_at + self.expires_in as i64;
        Utc::now().timestamp() >= expires_at - EXPIRY_MARGIN_SECONDS
    }
}

/// Cached-credential manager for one client instance
pub struct TokenManager {
    config: Arc<Config>,
    client: Client,
    token: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    /// Creates a token manager sharing the client's HTTP connection pool
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: RwLock::new(None),
        }
    }

    /// Returns a bearer token, fetching one via the client-credentials grant
    /// when the cache is empty or the cached token is about to expire
    pub async fn bearer(&self) -> Result<String, AppError> {
        {
            let token = self.token.read().await;
            if let Some(t) = token.as_ref() {
                if !t.is_expired() {
                    return Ok(t.access_token.clone());
                }
                info!("Cached token is about to expire, refreshing");
            }
        }

        self.fetch().await
    }

    /// Performs the client-credentials grant and stores the result
    pub async fn fetch(&self) -> Result<String, AppError> {
        let url = format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            TOKEN_PATH
        );

        let body = json!({
            "grant_type": "client_credentials",
            "client_id": self.config.credentials.client_id,
            "client_secret": self.config.credentials.client_secret,
        });

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::transport(e, TOKEN_PATH))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status != StatusCode::OK {
            warn!("Token request failed with status {}: {}", status, text);
            return Err(AppError::Http {
                status,
                path: TOKEN_PATH.to_string(),
                body: text,
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&text).map_err(|e| AppError::Deserialization {
                path: TOKEN_PATH.to_string(),
                message: e.to_string(),
                body: text.clone(),
            })?;

        if parsed.access_token.is_empty() {
            return Err(AppError::InvalidResponse {
                path: TOKEN_PATH.to_string(),
                message: "empty access_token".to_string(),
            });
        }

        debug!("Token obtained, expires in {} seconds", parsed.expires_in);

        let expires_in = if parsed.expires_in == 0 {
            3600
        } else {
            parsed.expires_in
        };

        let mut token = self.token.write().await;
        *token = Some(CachedToken::new(parsed.access_token.clone(), expires_in));

        Ok(parsed.access_token)
    }

    /// Drops the cached token; the next authenticated request fetches a
    /// fresh one
    pub async fn invalidate(&self) {
        let mut token = self.token.write().await;
        *token = None;
    }

    /// Seeds the cache with a previously obtained token, assuming the
    /// default one-hour lifetime
    pub async fn prime(&self, token: impl Into<String>) {
        let mut slot = self.token.write().await;
        *slot = Some(CachedToken::new(token.into(), 3600));
    }

    /// Returns the cached token without triggering a fetch
    pub async fn cached(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn manager() -> TokenManager {
        let config = Arc::new(Config::with_credentials("id", "secret"));
        TokenManager::new(config, Client::new())
    }

    #[test]
    fn cache_starts_empty() {
        let manager = manager();
        block_on(async {
            assert_eq!(manager.cached().await, None);
        });
    }

    #[test]
    fn prime_and_invalidate_round_trip() {
        let manager = manager();
        block_on(async {
            manager.prime("abc").await;
            assert_eq!(manager.cached().await.as_deref(), Some("abc"));
            assert_eq!(manager.bearer().await.expect("cached"), "abc");

            manager.invalidate().await;
            assert_eq!(manager.cached().await, None);
        });
    }

    #[test]
    fn token_expiry_honors_margin() {
        let fresh = CachedToken::new("t".to_string(), 3600);
        assert!(!fresh.is_expired());

        let stale = CachedToken {
            access_token: "t".to_string(),
            created_at: Utc::now().timestamp() - 3600,
            expires_in: 3600,
        };
        assert!(stale.is_expired());

        // Within the safety margin counts as expired
        let closing = CachedToken {
            access_token: "t".to_string(),
            created_at: Utc::now().timestamp(),
            expires_in: 30,
        };
        assert!(closing.is_expired());
    }
}
