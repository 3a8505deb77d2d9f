//! Common test utilities

use remote_identity::HostedRepository;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a repository config file into `dir` and return its path
#[allow(dead_code)] // Test utility for integration tests
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("repositories.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// The `shiftkey/desktop` fork used across matcher tests
#[allow(dead_code)] // Test utility for integration tests
pub fn desktop_repository() -> HostedRepository {
    HostedRepository::new(
        "shiftkey",
        "desktop",
        Some("https://github.com/shiftkey/desktop.git".to_string()),
    )
}
