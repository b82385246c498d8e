//! Test utilities for tailwind-shim
//!
//! Shared helpers used across the workspace's test suites:
//! - [`env`]: serialized, restorable changes to env vars and the working directory
//! - [`fixtures`]: fake executables standing in for a Tailwind CSS binary

pub mod env;
pub mod fixtures;

pub use env::{ENV_LOCK, with_env_vars, with_isolated_cwd};
pub use fixtures::fake_tailwind_script;
#[cfg(unix)]
pub use fixtures::write_fake_executable;
