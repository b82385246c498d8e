//! Binary acquisition: resolve, check the cache, download, install
//!
//! # Flow
//!
//! ```text
//! acquire()
//!     ↓
//! 1. Platform fragment (fails before any I/O on unsupported hosts)
//!     ↓
//! 2. Resolve version (`latest` → GitHub API)
//!     ↓
//! 3. Cache path: <project>/.tools/tailwind/<fragment>-v<version>[.exe]
//!     ↓ (file exists → return it)
//! 4. Download URL: override, or <release-base>/v<version>/<asset>
//!     ↓
//! 5. Stream into same-directory temp file, chmod, rename into place
//! ```

use crate::cache::CacheLayout;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::github::{add_path_segments, build_client, github_base_url};
use crate::install::install_atomically;
use crate::platform::{LddProbe, LibcProbe, PlatformInfo};
use crate::version::{DEFAULT_OWNER, DEFAULT_REPO, ReleaseSource, ResolvedVersion, resolve_version};
use reqwest::blocking::Client;
use std::path::PathBuf;
use url::Url;

/// Where a binary is fetched from and where it ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: Url,
    pub destination: PathBuf,
}

/// Outcome of [`Acquirer::acquire`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    /// Absolute path of the cached binary
    pub path: PathBuf,
    pub version: ResolvedVersion,
    /// `true` if no download was needed
    pub cache_hit: bool,
}

/// Default release download base: `https://github.com/tailwindlabs/tailwindcss/releases/download`
pub fn default_download_base() -> Result<Url> {
    let mut url = github_base_url().map_err(|e| FetchError::InvalidUrl {
        url: "https://github.com".to_string(),
        source: e,
    })?;
    add_path_segments(&mut url, &[DEFAULT_OWNER, DEFAULT_REPO, "releases", "download"])?;
    Ok(url)
}

pub struct Acquirer {
    client: Client,
    release_source: ReleaseSource,
    download_base: Url,
    cache: CacheLayout,
    probe: Box<dyn LibcProbe>,
}

impl Acquirer {
    /// Acquirer against the public GitHub releases, probing libc with `ldd`
    pub fn new(client: Client, cache: CacheLayout) -> Result<Self> {
        Ok(Self {
            client,
            release_source: ReleaseSource::github()?,
            download_base: default_download_base()?,
            cache,
            probe: Box::new(LddProbe),
        })
    }

    /// Acquirer using the configured timeout and a cache under the current directory
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_client(config.timeout).map_err(FetchError::Client)?;
        Self::new(client, CacheLayout::from_current_dir()?)
    }

    pub fn with_release_source(mut self, source: ReleaseSource) -> Self {
        self.release_source = source;
        self
    }

    pub fn with_download_base(mut self, base: Url) -> Self {
        self.download_base = base;
        self
    }

    pub fn with_probe(mut self, probe: impl LibcProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn cache(&self) -> &CacheLayout {
        &self.cache
    }

    /// Returns the path of a binary for `requested`, downloading it on a cache miss
    ///
    /// # Errors
    ///
    /// Every failure aborts the acquisition unchanged: `UnsupportedPlatform`,
    /// resolution errors, `Network`, `Download`, `InvalidUrl`, or `Io`.
    pub fn acquire(
        &self,
        requested: &str,
        platform: &PlatformInfo,
        override_url: Option<&str>,
    ) -> Result<Acquired> {
        // Probed once; the same fragment names the cache file and the asset
        let fragment = platform.fragment(self.probe.as_ref())?;

        let version = resolve_version(&self.client, &self.release_source, requested)?;

        let path = self
            .cache
            .path_for(&platform.binary_file_name(&fragment, &version))?;

        if path.exists() {
            tracing::debug!("Cache hit: {}", path.display());
            return Ok(Acquired {
                path,
                version,
                cache_hit: true,
            });
        }

        let target = self.download_target(platform, &fragment, &version, path, override_url)?;

        eprintln!(
            "Downloading Tailwind CSS v{} for {}...",
            version, platform
        );
        self.download(&target)?;
        eprintln!("Downloaded to: {}", target.destination.display());

        Ok(Acquired {
            path: target.destination,
            version,
            cache_hit: false,
        })
    }

    /// Builds the download URL: a non-empty override verbatim, otherwise
    /// `<download_base>/v<version>/<asset>`
    pub fn download_target(
        &self,
        platform: &PlatformInfo,
        fragment: &str,
        version: &ResolvedVersion,
        destination: PathBuf,
        override_url: Option<&str>,
    ) -> Result<DownloadTarget> {
        let url = match override_url.filter(|url| !url.is_empty()) {
            Some(raw) => Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
                url: raw.to_string(),
                source: e,
            })?,
            None => {
                let mut url = self.download_base.clone();
                let tag = format!("v{}", version);
                add_path_segments(&mut url, &[&tag, &platform.asset_name(fragment)])?;
                url
            }
        };

        Ok(DownloadTarget { url, destination })
    }

    fn download(&self, target: &DownloadTarget) -> Result<()> {
        tracing::debug!(
            "Downloading {} to {}",
            target.url,
            target.destination.display()
        );

        let response = self
            .client
            .get(target.url.as_str())
            .send()
            .map_err(|e| FetchError::Network {
                url: target.url.to_string(),
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Download {
                url: target.url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = install_atomically(response, &target.destination)?;
        tracing::debug!("Installed {} bytes", bytes);

        Ok(())
    }
}
