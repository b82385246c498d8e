//! Atomic installation of a downloaded binary
//!
//! The payload is streamed into a temporary file created in the destination's
//! own directory, marked executable, then renamed over the final path. The
//! rename is the only step that makes the final path appear, so concurrent
//! readers see either no file or a complete one. The `NamedTempFile` guard
//! removes the temporary file on every failure path.

use crate::error::{FetchError, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Temporary files look like `tailwindcss-XXXXXX.tmp`
pub const TEMP_PREFIX: &str = "tailwindcss-";
pub const TEMP_SUFFIX: &str = ".tmp";

/// Streams `reader` into `destination` via a same-directory temp file
///
/// # Returns
///
/// Number of bytes written
///
/// # Errors
///
/// Returns `Io` if the temp file cannot be created or written, the
/// permissions cannot be set, or the final rename fails
pub fn install_atomically<R: Read>(mut reader: R, destination: &Path) -> Result<u64> {
    let dest_dir = destination.parent().ok_or_else(|| {
        FetchError::io(
            format!("get parent directory of {}", destination.display()),
            io::Error::other("no parent directory"),
        )
    })?;

    let mut temp_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dest_dir)
        .map_err(|e| {
            FetchError::io(format!("create temp file in {}", dest_dir.display()), e)
        })?;

    let mut written: u64 = 0;
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| FetchError::io("read binary from HTTP response", e))?;

        if bytes_read == 0 {
            break;
        }

        temp_file
            .write_all(&buffer[..bytes_read])
            .map_err(|e| FetchError::io("write binary", e))?;

        written += bytes_read as u64;
    }

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| FetchError::io("sync temporary file", e))?;

    #[cfg(unix)]
    set_executable_permissions(temp_file.path())?;

    // Atomic within the directory; replaces a file a concurrent run may have installed
    temp_file.persist(destination).map_err(|e| {
        FetchError::io(
            format!("move binary to final location {}", destination.display()),
            e.error,
        )
    })?;

    Ok(written)
}

/// Makes the file `rwxr-xr-x` on top of its current mode
#[cfg(unix)]
fn set_executable_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path)
        .map_err(|e| FetchError::io(format!("get metadata for {}", path.display()), e))?;

    let mut permissions = metadata.permissions();
    let mode = permissions.mode();
    permissions.set_mode(mode | 0o755);

    fs::set_permissions(path, permissions)
        .map_err(|e| FetchError::io("make binary executable", e))
}
