//! Token-cached HTTP request wrapper
//!
//! This is the one shared mechanism of the crate: every resource service
//! funnels through [`HttpClient::request`], which attaches the cached bearer
//! token, executes the call, and on a 401 invalidates the cache and retries
//! exactly once with a freshly fetched token. The retry is a bounded loop,
//! not recursion; a second 401 surfaces as [`AppError::Unauthorized`].

use crate::auth::TokenManager;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::rate_limiter::RateLimiter;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpInternalClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport seam between resource services and the HTTP layer.
///
/// Services are generic over this trait so tests can substitute a mock
/// transport without a network.
#[async_trait]
pub trait SendPulseTransport: Send + Sync {
    /// Performs an API call and decodes the JSON response.
    ///
    /// When `auth` is set, a bearer token is attached; a 401 response
    /// invalidates the cached token and the call is retried once.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: bool,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;

    /// Uploads a file as `multipart/form-data`.
    ///
    /// Accepts 200 and 201 as success. The file bytes are kept so the form
    /// can be rebuilt for the single 401-triggered retry.
    async fn post_multipart<T>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned;
}

/// HTTP client for the SendPulse API with automatic authentication
pub struct HttpClient {
    http_client: HttpInternalClient,
    auth: Arc<TokenManager>,
    config: Arc<Config>,
    rate_limiter: Arc<RateLimiter>,
}

impl HttpClient {
    /// Creates a new client. No token is fetched until the first
    /// authenticated request.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));
        let auth = Arc::new(TokenManager::new(config.clone(), http_client.clone()));

        Self {
            http_client,
            auth,
            config,
            rate_limiter,
        }
    }

    /// Gets the current configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Gets the token manager
    pub fn auth(&self) -> &TokenManager {
        &self.auth
    }

    /// Makes an authenticated GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request::<(), T>(Method::GET, path, None, true).await
    }

    /// Makes an authenticated POST request
    pub async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body), true).await
    }

    /// Makes an authenticated PUT request
    pub async fn put<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body), true).await
    }

    /// Makes an authenticated DELETE request, optionally with a body
    pub async fn delete<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::DELETE, path, body, true).await
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path
        )
    }

    /// Executes one HTTP call and reads the response as text
    async fn send_once<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<(StatusCode, String), AppError> {
        self.rate_limiter.wait().await;

        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method, &url);

        if let Some(t) = token {
            request = request.bearer_auth(t);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::transport(e, path))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await.unwrap_or_default();
        Ok((status, text))
    }

    fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, AppError> {
        serde_json::from_str(body).map_err(|e| AppError::Deserialization {
            path: path.to_string(),
            message: e.to_string(),
            body: body.to_string(),
        })
    }
}

#[async_trait]
impl SendPulseTransport for HttpClient {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: bool,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut refreshed = false;

        loop {
            let token = if auth {
                Some(self.auth.bearer().await?)
            } else {
                None
            };

            let (status, text) = self
                .send_once(method.clone(), path, body, token.as_deref())
                .await?;

            if status == StatusCode::UNAUTHORIZED {
                if auth && !refreshed {
                    warn!("Bearer token rejected, refreshing and retrying {}", path);
                    self.auth.invalidate().await;
                    refreshed = true;
                    continue;
                }
                return Err(AppError::Unauthorized {
                    path: path.to_string(),
                    body: text,
                });
            }

            if status != StatusCode::OK {
                return Err(AppError::Http {
                    status,
                    path: path.to_string(),
                    body: text,
                });
            }

            return Self::decode(path, &text);
        }
    }

    async fn post_multipart<T>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let mut refreshed = false;

        loop {
            let token = self.auth.bearer().await?;

            self.rate_limiter.wait().await;

            let url = self.url(path);
            debug!("POST {} (multipart, {} bytes)", url, bytes.len());

            let part = Part::bytes(bytes.clone()).file_name(file_name.to_string());
            let form = Form::new().part(field.to_string(), part);

            let response = self
                .http_client
                .post(&url)
                .bearer_auth(&token)
                .multipart(form)
                .send()
                .await
                .map_err(|e| AppError::transport(e, path))?;

            let status = response.status();
            debug!("Response status: {}", status);

            let text = response.text().await.unwrap_or_default();

            if status == StatusCode::UNAUTHORIZED {
                if !refreshed {
                    warn!("Bearer token rejected, refreshing and retrying {}", path);
                    self.auth.invalidate().await;
                    refreshed = true;
                    continue;
                }
                return Err(AppError::Unauthorized {
                    path: path.to_string(),
                    body: text,
                });
            }

            if status != StatusCode::OK && status != StatusCode::CREATED {
                return Err(AppError::Http {
                    status,
                    path: path.to_string(),
                    body: text,
                });
            }

            return Self::decode(path, &text);
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
