//! Host platform identification and Tailwind CSS release naming
//!
//! Tailwind publishes standalone binaries named `tailwindcss-{os}-{arch}[-musl][.exe]`,
//! using its own labels (`macos`, `x64`) rather than the host's (`darwin`, `x86_64`).

use crate::error::{FetchError, Result};
use crate::version::ResolvedVersion;
use std::fmt;
use std::process::Command;

/// Product prefix shared by every published asset
pub const PRODUCT: &str = "tailwindcss";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Os {
    MacOS,
    Linux,
    Windows,
    Unsupported(String),
}

impl Os {
    /// Parses a host OS label (Go-style `darwin` or Rust-style `macos`)
    pub fn parse(raw: &str) -> Self {
        match raw {
            "darwin" | "macos" => Os::MacOS,
            "linux" => Os::Linux,
            "windows" => Os::Windows,
            other => Os::Unsupported(other.to_string()),
        }
    }

    /// Label used in published release names
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Os::MacOS => Some("macos"),
            Os::Linux => Some("linux"),
            Os::Windows => Some("windows"),
            Os::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Unsupported(raw) => write!(f, "{}", raw),
            supported => write!(f, "{}", supported.label().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
    /// Not published upstream, but not rejected locally either
    X86,
    Unsupported(String),
}

impl Arch {
    /// Parses a host architecture label (Go-style `amd64` or Rust-style `x86_64`)
    pub fn parse(raw: &str) -> Self {
        match raw {
            "amd64" | "x86_64" | "x64" => Arch::X64,
            "arm64" | "aarch64" => Arch::Arm64,
            "386" | "x86" => Arch::X86,
            other => Arch::Unsupported(other.to_string()),
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Arch::X64 => Some("x64"),
            Arch::Arm64 => Some("arm64"),
            Arch::X86 => Some("x86"),
            Arch::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::Unsupported(raw) => write!(f, "{}", raw),
            supported => write!(f, "{}", supported.label().unwrap_or_default()),
        }
    }
}

/// Detects whether the host C library is musl
///
/// Implemented by [`LddProbe`] for real hosts and by any `Fn() -> bool` so
/// tests can pin the outcome without running system tools.
pub trait LibcProbe {
    fn is_musl(&self) -> bool;
}

impl<F> LibcProbe for F
where
    F: Fn() -> bool,
{
    fn is_musl(&self) -> bool {
        self()
    }
}

/// Probes libc by running `ldd --version`
///
/// musl's `ldd` prints its banner on stderr and exits non-zero, so both
/// streams are inspected whatever the exit status. A missing `ldd` means glibc.
#[derive(Debug, Clone, Copy, Default)]
pub struct LddProbe;

impl LibcProbe for LddProbe {
    fn is_musl(&self) -> bool {
        match Command::new("ldd").arg("--version").output() {
            Ok(output) => is_musl_output(&output.stderr) || is_musl_output(&output.stdout),
            Err(e) => {
                tracing::debug!("ldd --version unavailable, assuming glibc: {}", e);
                false
            }
        }
    }
}

/// Checks whether `ldd --version` output identifies musl libc
///
/// musl prints `musl libc (x86_64)`; glibc prints `ldd (GNU libc) 2.31`.
pub fn is_musl_output(output: &[u8]) -> bool {
    output.starts_with(b"musl")
}

/// Host OS and architecture, as seen by the release naming rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformInfo {
    pub fn new(os: &str, arch: &str) -> Self {
        Self {
            os: Os::parse(os),
            arch: Arch::parse(arch),
        }
    }

    /// Platform of the running process
    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn is_windows(&self) -> bool {
        self.os == Os::Windows
    }

    /// Release name fragment, e.g. `tailwindcss-linux-x64-musl`
    ///
    /// The probe is consulted only on Linux.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPlatform` if the OS or architecture has no published label
    pub fn fragment(&self, probe: &dyn LibcProbe) -> Result<String> {
        let (Some(os), Some(arch)) = (self.os.label(), self.arch.label()) else {
            return Err(FetchError::UnsupportedPlatform {
                os: self.os.to_string(),
                arch: self.arch.to_string(),
            });
        };

        let mut name = format!("{}-{}-{}", PRODUCT, os, arch);
        if self.os == Os::Linux && probe.is_musl() {
            name.push_str("-musl");
        }

        Ok(name)
    }

    /// Published asset name: the fragment plus `.exe` on Windows
    pub fn asset_name(&self, fragment: &str) -> String {
        format!("{}{}", fragment, self.exe_suffix())
    }

    /// Cached binary file name: `<fragment>-v<version>[.exe]`
    pub fn binary_file_name(&self, fragment: &str, version: &ResolvedVersion) -> String {
        format!("{}-v{}{}", fragment, version, self.exe_suffix())
    }

    /// Convenience for [`fragment`](Self::fragment) followed by
    /// [`binary_file_name`](Self::binary_file_name)
    pub fn binary_name(&self, version: &ResolvedVersion, probe: &dyn LibcProbe) -> Result<String> {
        let fragment = self.fragment(probe)?;
        Ok(self.binary_file_name(&fragment, version))
    }

    fn exe_suffix(&self) -> &'static str {
        if self.is_windows() { ".exe" } else { "" }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
