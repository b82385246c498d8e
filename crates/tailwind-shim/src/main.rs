//! Tailwind CSS shim: fetches the pinned standalone binary and runs it.
//!
//! Every argument is forwarded verbatim; the shim takes no flags of its own.
//! Configuration comes from `TAILWIND_VERSION`, `TAILWIND_DOWNLOAD_URL` and
//! `TAILWIND_HTTP_TIMEOUT`.

use anyhow::{Context, Result};
use std::ffi::OsString;
use tailwind_fetch::{Acquirer, Config, PlatformInfo, run_binary};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log filter variable; stdout belongs to Tailwind, so logs go to stderr
const LOG_ENV: &str = "TAILWIND_SHIM_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Vec<OsString>) -> Result<i32> {
    let config = Config::from_env();
    let platform = PlatformInfo::detect();
    tracing::debug!("Config: {:?}, platform: {}", config, platform);

    let acquirer = Acquirer::from_config(&config)?;
    let acquired = acquirer
        .acquire(&config.version, &platform, config.download_url.as_deref())
        .context("failed to obtain Tailwind CSS binary")?;

    let code = run_binary(&acquired.path, args)?;
    tracing::debug!("Tailwind CSS exited with {}", code);

    Ok(code)
}
