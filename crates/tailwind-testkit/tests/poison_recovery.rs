//! Integration tests for mutex poison recovery
//!
//! These tests intentionally panic inside the env helpers, which poisons
//! `ENV_LOCK`. They run in their own test binary so the poison cannot leak
//! into unit tests.

use std::panic;
use tailwind_testkit::{ENV_LOCK, with_env_vars, with_isolated_cwd};

#[test]
fn test_isolated_cwd_restores_after_panic_and_recovers() {
    let before = std::env::current_dir().unwrap();

    let result = panic::catch_unwind(|| {
        with_isolated_cwd(|_cwd| {
            panic!("Simulated test failure inside isolated cwd");
        })
    });
    assert!(result.is_err());

    // The lock is poisoned now, but the helpers keep working
    assert!(ENV_LOCK.is_poisoned());
    with_isolated_cwd(|cwd| {
        assert_eq!(std::env::current_dir().unwrap(), cwd);
    });

    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn test_env_vars_restored_after_panic() {
    const KEY: &str = "TAILWIND_TESTKIT_POISON";

    let result = panic::catch_unwind(|| {
        with_env_vars(&[(KEY, Some("during"))], || {
            panic!("Simulated test failure with env vars set");
        })
    });
    assert!(result.is_err());

    with_env_vars(&[], || {
        assert!(std::env::var(KEY).is_err(), "{} should be restored", KEY);
    });
}
