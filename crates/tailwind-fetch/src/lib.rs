//! Version-pinned Tailwind CSS standalone binary fetcher.
//!
//! Resolves the requested Tailwind CSS version, downloads the build for the
//! host platform into a project-local cache if it is not already there, and
//! hands back a path the caller can execute.
//!
//! # Architecture
//!
//! - [`platform`]: host OS/arch mapping to Tailwind's release names, musl probe
//! - [`version`]: `latest` / explicit version resolution
//! - [`cache`]: `<project>/.tools/tailwind/` layout
//! - [`install`]: same-directory temp file + atomic rename
//! - [`acquire`]: the orchestration of all of the above
//! - [`exec`]: running the acquired binary with inherited stdio
//! - [`config`]: `TAILWIND_*` environment variables
//!
//! # Example
//!
//! ```no_run
//! use tailwind_fetch::{Acquirer, Config, PlatformInfo, run_binary};
//!
//! # fn main() -> tailwind_fetch::Result<()> {
//! let config = Config::from_env();
//! let acquirer = Acquirer::from_config(&config)?;
//! let acquired = acquirer.acquire(
//!     &config.version,
//!     &PlatformInfo::detect(),
//!     config.download_url.as_deref(),
//! )?;
//!
//! let code = run_binary(&acquired.path, ["--help"])?;
//! println!("Exit code: {}", code);
//! # Ok(())
//! # }
//! ```
//!
//! # Cache Structure
//!
//! - `<project>/.tools/tailwind/tailwindcss-macos-arm64-v4.1.15`
//! - `<project>/.tools/tailwind/tailwindcss-linux-x64-musl-v3.4.1`
//! - `<project>\.tools\tailwind\tailwindcss-windows-x64-v4.0.0.exe`

pub mod acquire;
pub mod cache;
pub mod config;
pub mod error;
pub mod exec;
pub mod github;
pub mod install;
pub mod platform;
pub mod version;

pub use acquire::{Acquired, Acquirer, DownloadTarget};
pub use cache::{CacheLayout, cache_path};
pub use config::Config;
pub use error::{FetchError, Result};
pub use exec::run_binary;
pub use platform::{Arch, LddProbe, LibcProbe, Os, PlatformInfo};
pub use version::{ReleaseSource, ResolvedVersion, VersionRequest, resolve_version};
