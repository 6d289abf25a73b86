//! Integration tests for the CLI workflows.
//!
//! These tests run the compiled binary against a temporary home directory,
//! so nothing touches the real `~/.launchgate`.
//!
//! # Running Integration Tests
//!
//! Integration tests are excluded from regular test runs. Use:
//! ```bash
//! cargo test --test '*' -- --ignored --nocapture
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the launchgate CLI binary.
fn cli_binary() -> PathBuf {
    // Try to find the debug binary first
    let debug_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("target/debug/launchgate");

    if debug_path.exists() {
        return debug_path;
    }

    // Fall back to release binary
    let release_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("target/release/launchgate");

    if release_path.exists() {
        return release_path;
    }

    panic!("CLI binary not found. Run `cargo build` first.");
}

/// Run a CLI command with HOME pointed at a scratch directory.
fn run_cli(home: &Path, args: &[&str]) -> std::process::Output {
    let binary = cli_binary();
    Command::new(binary)
        .env("HOME", home)
        .args(args)
        .output()
        .expect("Failed to execute CLI command")
}

/// Assert a command succeeded.
fn assert_success(output: &std::process::Output, context: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context, stdout, stderr
        );
    }
}

#[test]
#[ignore = "integration test - requires a built binary"]
fn test_config_init_creates_commented_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = run_cli(temp.path(), &["config", "init"]);
    assert_success(&output, "config init");

    let config_path = temp.path().join(".launchgate").join("config.ini");
    assert!(config_path.exists(), "config.ini should exist");

    let contents = fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(contents.contains("[resolver]"), "missing [resolver] section");
    assert!(contents.contains("[connectivity]"), "missing [connectivity] section");
    assert!(contents.contains("max_attempts"), "missing max_attempts key");

    // Second init must leave the existing file alone
    let output = run_cli(temp.path(), &["config", "init"]);
    assert_success(&output, "config init (second run)");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("already exists"),
        "second init should report an existing file, got: {}",
        stdout
    );
}

#[test]
#[ignore = "integration test - requires a built binary"]
fn test_config_path_points_into_home() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = run_cli(temp.path(), &["config", "path"]);
    assert_success(&output, "config path");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(".launchgate") && stdout.contains("config.ini"),
        "unexpected config path: {}",
        stdout
    );
}

#[test]
#[ignore = "integration test - requires a built binary"]
fn test_cache_show_and_clear_cycle() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    // Empty store reports no endpoint
    let output = run_cli(temp.path(), &["cache", "show"]);
    assert_success(&output, "cache show (empty)");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(none)"), "expected empty cache, got: {}", stdout);

    // Seed the store file the way a resolution pass would
    let store_dir = temp.path().join(".launchgate");
    fs::create_dir_all(&store_dir).expect("Failed to create store dir");
    fs::write(store_dir.join("endpoint"), "https://app.example.com/start")
        .expect("Failed to seed endpoint");

    let output = run_cli(temp.path(), &["cache", "show"]);
    assert_success(&output, "cache show (seeded)");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("https://app.example.com/start"),
        "expected seeded endpoint, got: {}",
        stdout
    );

    // Clear removes it
    let output = run_cli(temp.path(), &["cache", "clear"]);
    assert_success(&output, "cache clear");
    assert!(!store_dir.join("endpoint").exists(), "endpoint file should be gone");

    // Clearing an already-empty store is fine
    let output = run_cli(temp.path(), &["cache", "clear"]);
    assert_success(&output, "cache clear (empty)");
}

#[test]
#[ignore = "integration test - requires a built binary"]
fn test_diagnostics_prints_report_sections() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = run_cli(temp.path(), &["diagnostics"]);
    assert_success(&output, "diagnostics");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Operating System"), "missing OS section");
    assert!(stdout.contains("## Device Fingerprint"), "missing device section");
    assert!(stdout.contains("## Endpoint Store"), "missing store section");
}
