/// Environment variable helpers for configuration
pub mod config;
/// Logging setup
pub mod logger;
