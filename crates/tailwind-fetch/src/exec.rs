use crate::error::{FetchError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Runs `binary` with `args`, inheriting stdin, stdout and stderr
///
/// # Returns
///
/// The child's exit code. A child killed by a signal reports `128 + signal`
/// on Unix, like a shell would.
///
/// # Errors
///
/// Returns `Io` if the binary cannot be spawned
pub fn run_binary<I, S>(binary: &Path, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!("Executing {}", binary.display());

    let status = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| FetchError::io(format!("run Tailwind CSS at {}", binary.display()), e))?;

    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
