//! Environment isolation utilities for testing
//!
//! The working directory and environment variables are process-wide, so every
//! helper here holds [`ENV_LOCK`] while it changes them and restores them
//! before returning.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Static mutex to serialize tests that modify the environment or cwd
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    // A panicking test poisons the lock; the guarded state is restored
    // by the panicking helper's own cleanup, so the lock is still usable
    ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run a test with the working directory set to a fresh temporary directory
///
/// The closure receives the canonicalized directory, which is what
/// `std::env::current_dir()` reports inside it. The original working
/// directory is restored afterwards, even if the closure panics.
///
/// # Examples
///
/// ```no_run
/// use tailwind_testkit::with_isolated_cwd;
///
/// with_isolated_cwd(|cwd| {
///     std::fs::create_dir_all(cwd.join(".tools")).unwrap();
/// });
/// ```
pub fn with_isolated_cwd<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = lock_env();

    let original = std::env::current_dir().expect("Failed to get current directory");
    let temp = TempDir::new().expect("Failed to create temporary directory");
    let cwd: PathBuf = temp
        .path()
        .canonicalize()
        .expect("Failed to canonicalize temporary directory");

    std::env::set_current_dir(&cwd).expect("Failed to enter temporary directory");
    let _restore = RestoreCwd(original);

    f(&cwd)
}

struct RestoreCwd(PathBuf);

impl Drop for RestoreCwd {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

/// Run a test with environment variables set (`Some`) or removed (`None`)
///
/// Original values are restored afterwards, even if the closure panics.
pub fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = lock_env();

    let _restore = RestoreVars(
        vars.iter()
            .map(|(key, _)| (key.to_string(), std::env::var_os(key)))
            .collect(),
    );

    // SAFETY: We hold ENV_LOCK, so no other helper mutates the environment concurrently.
    unsafe {
        for (key, value) in vars {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }

    f()
}

struct RestoreVars(Vec<(String, Option<std::ffi::OsString>)>);

impl Drop for RestoreVars {
    fn drop(&mut self) {
        // SAFETY: Dropped while ENV_LOCK is still held (declared after the guard).
        unsafe {
            for (key, value) in &self.0 {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
