//! Wrapper configuration from environment variables

use crate::github::DEFAULT_TIMEOUT;
use crate::version::LATEST;
use std::time::Duration;

/// Requested version: `latest` or an explicit version, with or without `v`
pub const VERSION_VAR: &str = "TAILWIND_VERSION";

/// Full download URL used verbatim instead of the GitHub release URL
pub const DOWNLOAD_URL_VAR: &str = "TAILWIND_DOWNLOAD_URL";

/// HTTP timeout in seconds for both the release lookup and the download
pub const TIMEOUT_VAR: &str = "TAILWIND_HTTP_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub version: String,
    pub download_url: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: LATEST.to_string(),
            download_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let defaults = Self::default();

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        TIMEOUT_VAR,
                        raw,
                        defaults.timeout.as_secs()
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            version: get(VERSION_VAR).unwrap_or(defaults.version),
            download_url: get(DOWNLOAD_URL_VAR),
            timeout,
        }
    }
}
