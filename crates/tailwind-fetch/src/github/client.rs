//! HTTP client construction for GitHub interactions

use reqwest::blocking::Client;
use std::time::Duration;

/// Default timeout for GitHub requests (5 minutes, release binaries are large)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// User agent sent with every request (the GitHub API rejects requests without one)
pub const USER_AGENT: &str = concat!("tailwind-shim/", env!("CARGO_PKG_VERSION"));

/// Builds HTTP client with appropriate settings for GitHub
///
/// # Arguments
///
/// * `timeout` - Request timeout duration
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Builds HTTP client with [`DEFAULT_TIMEOUT`]
pub fn build_default_client() -> Result<Client, reqwest::Error> {
    build_client(DEFAULT_TIMEOUT)
}
