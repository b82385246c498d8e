//! Shared GitHub interaction utilities
//!
//! - HTTP client construction with a user agent and timeout
//! - Safe URL construction helpers for the API and release downloads

pub mod client;
pub mod url;

pub use client::{DEFAULT_TIMEOUT, USER_AGENT, build_client, build_default_client};
pub use url::{UrlError, add_path_segments, github_api_base_url, github_base_url};
