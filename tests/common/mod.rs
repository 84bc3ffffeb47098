use mockito::{Mock, ServerGuard};
use sendpulse_client::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Token endpoint response used by every test
pub const TOKEN_BODY: &str =
    r#"{"access_token":"test-token","token_type":"Bearer","expires_in":3600}"#;

/// Builds a configuration pointing at the mock server, with a rate limiter
/// generous enough to never block a test
pub fn test_config(base_url: String) -> Config {
    Config {
        credentials: Credentials {
            client_id: "test-id".to_string(),
            client_secret: "test-secret".to_string(),
        },
        rest_api: RestApiConfig {
            base_url,
            timeout: 5,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 1000,
            period_seconds: 1,
            burst_size: 100,
        },
    }
}

/// Mounts the token endpoint returning `TOKEN_BODY` exactly `hits` times
pub async fn mock_token(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/oauth/access_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_BODY)
        .expect(hits)
        .create_async()
        .await
}
