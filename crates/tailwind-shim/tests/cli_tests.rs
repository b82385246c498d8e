//! Integration tests for the shim binary
//!
//! A mockito server stands in for the release download; the "binary" it serves
//! is a shell script, so these run on Unix hosts with a published build only.

#![cfg(all(unix, any(target_arch = "x86_64", target_arch = "aarch64")))]
#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tailwind_testkit::fake_tailwind_script;
use tempfile::TempDir;

/// Shim command rooted in `project`, pinned to 4.1.15 and downloading from `url`
fn shim(project: &Path, download_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("tailwind-shim").unwrap();
    cmd.current_dir(project)
        .env("TAILWIND_VERSION", "4.1.15")
        .env("TAILWIND_DOWNLOAD_URL", download_url)
        .env_remove("TAILWIND_HTTP_TIMEOUT")
        .env_remove("TAILWIND_SHIM_LOG");
    cmd
}

fn cached_binaries(project: &Path) -> Vec<PathBuf> {
    let root = project.join(".tools").join("tailwind");
    match fs::read_dir(root) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn test_downloads_and_forwards_args_and_exit_code() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/mirror/tailwindcss")
        .with_status(200)
        .with_body(fake_tailwind_script(7))
        .expect(1)
        .create();

    let project = TempDir::new().unwrap();
    let url = format!("{}/mirror/tailwindcss", server.url());

    shim(project.path(), &url)
        .args(["-i", "input.css", "--minify"])
        .assert()
        .code(7)
        .stdout("tailwindcss -i input.css --minify\n")
        .stderr(predicate::str::contains("Downloading Tailwind CSS v4.1.15"))
        .stderr(predicate::str::contains("Downloaded to:"))
        .stderr(predicate::str::contains("fake tailwind stderr"));

    mock.assert();

    let cached = cached_binaries(project.path());
    assert_eq!(cached.len(), 1, "Exactly one cached binary: {:?}", cached);
    let name = cached[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("tailwindcss-"), "{}", name);
    assert!(name.ends_with("-v4.1.15"), "{}", name);
}

#[test]
fn test_second_run_uses_cache() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/cached/tailwindcss")
        .with_status(200)
        .with_body(fake_tailwind_script(0))
        .expect(1)
        .create();

    let project = TempDir::new().unwrap();
    let url = format!("{}/cached/tailwindcss", server.url());

    shim(project.path(), &url).arg("--help").assert().success();

    shim(project.path(), &url)
        .arg("--help")
        .assert()
        .success()
        .stdout("tailwindcss --help\n")
        .stderr(predicate::str::contains("Downloading").not());

    mock.assert();
}

#[test]
fn test_download_failure_exits_one() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .create();

    let project = TempDir::new().unwrap();
    let url = format!("{}/missing/tailwindcss", server.url());

    shim(project.path(), &url)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error: failed to obtain Tailwind CSS binary"))
        .stderr(predicate::str::contains("404"));

    let leftovers: Vec<_> = cached_binaries(project.path())
        .into_iter()
        .filter(|p| p.is_file())
        .collect();
    assert!(leftovers.is_empty(), "No partial download: {:?}", leftovers);
}

#[test]
fn test_invalid_override_url_is_reported() {
    let project = TempDir::new().unwrap();

    shim(project.path(), "not a url")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("INVALID_URL"));
}
