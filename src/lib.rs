//! # SendPulse Client
//!
//! Async Rust client for the SendPulse marketing-automation REST API: email
//! campaigns, mailing lists, templates, SMS, web push, messenger bots,
//! blacklists, Automation360 events, and account balance.
//!
//! Authentication uses the OAuth2 client-credentials grant. The bearer token
//! is cached behind a read/write lock shared by all requests of one client
//! instance; a 401 response invalidates the cache and the request is retried
//! exactly once with a fresh token.
//!
//! ## Quick start
//!
//! ```ignore
//! use sendpulse_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let api = SendPulse::new(Config::with_credentials("id", "secret"));
//!     let balance = api.balance.common(None).await?;
//!     println!("{} {}", balance.amount, balance.currency);
//!     Ok(())
//! }
//! ```

/// High-level facade bundling all resource services
pub mod api;
/// Bearer-token cache and client-credentials grant
pub mod auth;
/// Token-cached HTTP request wrapper
pub mod client;
/// Client configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Typed request and response models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Request rate limiting
pub mod rate_limiter;
/// Per-resource services
pub mod services;
/// Environment and logging helpers
pub mod utils;

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
