//! Project-local binary cache
//!
//! Binaries live in `<project>/.tools/tailwind/`, one file per
//! (version, platform) pair. A file at the computed path is trusted as a
//! complete download: nothing is re-verified and nothing is ever evicted.

use crate::error::{FetchError, Result};
use crate::platform::{LibcProbe, PlatformInfo};
use crate::version::ResolvedVersion;
use std::fs;
use std::path::{Path, PathBuf};

pub const TOOLS_DIR: &str = ".tools";
pub const TAILWIND_DIR: &str = "tailwind";

/// Location of the cache root for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    /// Cache rooted under `project_root`; relative roots are resolved against the cwd
    pub fn in_project(project_root: &Path) -> Result<Self> {
        let base = if project_root.is_absolute() {
            project_root.to_path_buf()
        } else {
            current_dir()?.join(project_root)
        };

        Ok(Self {
            root: base.join(TOOLS_DIR).join(TAILWIND_DIR),
        })
    }

    /// Cache rooted under the process working directory
    pub fn from_current_dir() -> Result<Self> {
        Self::in_project(&current_dir()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the cache root and any missing parents
    pub fn ensure(&self) -> Result<&Path> {
        fs::create_dir_all(&self.root).map_err(|e| {
            FetchError::io(
                format!("create tools directory {}", self.root.display()),
                e,
            )
        })?;
        Ok(&self.root)
    }

    /// Path of `file_name` inside the cache root, creating the root first
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf> {
        Ok(self.ensure()?.join(file_name))
    }
}

/// Absolute cache path for a version/platform pair under the current directory
///
/// The file name is computed before anything touches the disk, so an
/// unsupported platform leaves no directories behind.
pub fn cache_path(
    version: &ResolvedVersion,
    platform: &PlatformInfo,
    probe: &dyn LibcProbe,
) -> Result<PathBuf> {
    let file_name = platform.binary_name(version, probe)?;
    CacheLayout::from_current_dir()?.path_for(&file_name)
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| FetchError::io("get working directory", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailwind_testkit::with_isolated_cwd;
    use tempfile::TempDir;

    fn glibc() -> bool {
        false
    }

    #[test]
    fn test_in_project_root_layout() {
        let temp = TempDir::new().unwrap();
        let layout = CacheLayout::in_project(temp.path()).unwrap();
        assert_eq!(
            layout.root(),
            temp.path().join(".tools").join("tailwind").as_path()
        );
        // Nothing is created until asked
        assert!(!layout.root().exists());
    }

    #[test]
    fn test_path_for_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let layout = CacheLayout::in_project(temp.path()).unwrap();

        let path = layout.path_for("tailwindcss-macos-arm64-v4.1.15").unwrap();

        assert!(path.is_absolute());
        assert!(layout.root().is_dir(), "Cache root should be created");
        assert_eq!(path.parent(), Some(layout.root()));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let layout = CacheLayout::in_project(temp.path()).unwrap();
        layout.ensure().unwrap();
        layout.ensure().unwrap();
        assert!(layout.root().is_dir());
    }

    #[test]
    fn test_ensure_fails_when_tools_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".tools"), b"not a directory").unwrap();

        let layout = CacheLayout::in_project(temp.path()).unwrap();
        match layout.ensure() {
            Err(FetchError::Io { operation, .. }) => {
                assert!(operation.contains("create tools directory"))
            }
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[test]
    fn test_cache_path_under_current_dir() {
        with_isolated_cwd(|cwd| {
            let platform = PlatformInfo::new("darwin", "arm64");
            let version = ResolvedVersion::explicit("4.1.15");

            let path = cache_path(&version, &platform, &glibc).unwrap();

            assert!(path.is_absolute(), "Cache path should be absolute: {:?}", path);
            assert!(path.starts_with(cwd.join(".tools").join("tailwind")));
            assert!(path.to_string_lossy().contains("v4.1.15"));
            assert_eq!(
                path.file_name().unwrap(),
                "tailwindcss-macos-arm64-v4.1.15"
            );
            assert!(path.parent().unwrap().is_dir(), "Directory should be created");
        });
    }

    #[test]
    fn test_cache_path_is_stable_for_same_key() {
        with_isolated_cwd(|_cwd| {
            let platform = PlatformInfo::new("windows", "amd64");
            let version = ResolvedVersion::explicit("v4.0.0");

            let first = cache_path(&version, &platform, &glibc).unwrap();
            let second = cache_path(&version, &platform, &glibc).unwrap();

            assert_eq!(first, second);
            assert!(first.to_string_lossy().ends_with("tailwindcss-windows-x64-v4.0.0.exe"));
        });
    }

    #[test]
    fn test_cache_path_unsupported_platform_touches_nothing() {
        with_isolated_cwd(|cwd| {
            let platform = PlatformInfo::new("freebsd", "amd64");
            let version = ResolvedVersion::explicit("4.1.15");

            assert!(matches!(
                cache_path(&version, &platform, &glibc),
                Err(FetchError::UnsupportedPlatform { .. })
            ));
            assert!(!cwd.join(".tools").exists());
        });
    }
}
