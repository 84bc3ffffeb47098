/// Default base URL for the SendPulse REST API
pub const DEFAULT_BASE_URL: &str = "https://api.sendpulse.com";
/// Path of the OAuth2 client-credentials token endpoint, relative to the base URL
pub const TOKEN_PATH: &str = "oauth/access_token";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Default maximum number of requests per rate-limit period
pub const DEFAULT_MAX_REQUESTS: u32 = 10;
/// Default rate-limit period in seconds
pub const DEFAULT_PERIOD_SECONDS: u64 = 1;
/// Default burst size for the rate limiter
pub const DEFAULT_BURST_SIZE: u32 = 10;
/// User agent string sent with every request to identify this client
pub const USER_AGENT: &str = concat!("sendpulse-client/", env!("CARGO_PKG_VERSION"));
