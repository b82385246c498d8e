//! Version resolution
//!
//! Turns a requested version (`latest`, `v4.1.15`, `4.1.15`) into a concrete
//! [`ResolvedVersion`]. Explicit versions are handled syntactically; only
//! `latest` touches the network, through the GitHub "latest release" endpoint.

use crate::error::{FetchError, Result};
use crate::github::{add_path_segments, github_api_base_url};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Sentinel requesting the newest published release
pub const LATEST: &str = "latest";

/// Upstream repository owner
pub const DEFAULT_OWNER: &str = "tailwindlabs";

/// Upstream repository name
pub const DEFAULT_REPO: &str = "tailwindcss";

/// A concrete version string: no leading `v`, never `latest`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedVersion(String);

impl ResolvedVersion {
    /// Strips one leading `v`; no validation against published releases
    pub fn explicit(raw: &str) -> Self {
        Self(raw.strip_prefix('v').unwrap_or(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequest {
    Latest,
    Explicit(String),
}

impl VersionRequest {
    pub fn parse(raw: &str) -> Self {
        if raw == LATEST {
            VersionRequest::Latest
        } else {
            VersionRequest::Explicit(raw.to_string())
        }
    }
}

/// GitHub Release metadata from API (only the fields we read)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Release {
    /// Release tag name (e.g., "v4.1.15")
    pub tag_name: String,
}

/// Where "latest release" lookups go
#[derive(Debug, Clone)]
pub struct ReleaseSource {
    pub api_base: Url,
    pub owner: String,
    pub repo: String,
}

impl ReleaseSource {
    pub fn new(api_base: Url, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            api_base,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `<api_base>/repos/<owner>/<repo>/releases/latest`
    pub fn latest_release_url(&self) -> Result<Url> {
        let mut url = self.api_base.clone();
        add_path_segments(
            &mut url,
            &["repos", &self.owner, &self.repo, "releases", "latest"],
        )?;
        Ok(url)
    }

    /// The public `tailwindlabs/tailwindcss` repository on api.github.com
    pub fn github() -> Result<Self> {
        let api_base = github_api_base_url().map_err(|e| FetchError::InvalidUrl {
            url: "https://api.github.com".to_string(),
            source: e,
        })?;
        Ok(Self::new(api_base, DEFAULT_OWNER, DEFAULT_REPO))
    }
}

/// Resolves a requested version string
///
/// # Errors
///
/// Only `latest` can fail:
/// - `Network` on transport failure
/// - `Upstream` on a non-success status
/// - `Parse` on a malformed body or empty `tag_name`
pub fn resolve_version(
    client: &Client,
    source: &ReleaseSource,
    requested: &str,
) -> Result<ResolvedVersion> {
    match VersionRequest::parse(requested) {
        VersionRequest::Explicit(raw) => Ok(ResolvedVersion::explicit(&raw)),
        VersionRequest::Latest => fetch_latest_version(client, source),
    }
}

fn fetch_latest_version(client: &Client, source: &ReleaseSource) -> Result<ResolvedVersion> {
    let url = source.latest_release_url()?;
    tracing::debug!("Resolving latest Tailwind CSS release via {}", url);

    let response = client
        .get(url.as_str())
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e.without_url(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Upstream {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(|e| FetchError::Network {
        url: url.to_string(),
        source: e.without_url(),
    })?;

    let release: Release = serde_json::from_str(&body).map_err(|e| FetchError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let version = ResolvedVersion::explicit(release.tag_name.trim());
    if version.as_str().is_empty() {
        return Err(FetchError::Parse {
            url: url.to_string(),
            reason: "release has an empty tag_name".to_string(),
        });
    }

    tracing::debug!("Latest Tailwind CSS release is {}", version);
    Ok(version)
}
