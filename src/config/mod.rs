//! Repository list configuration (`~/.remote-identity/repositories.toml`).
//!
//! ```toml
//! [[repository]]
//! name = "desktop"
//! clone_url = "https://github.com/shiftkey/desktop.git"
//!
//! [repository.owner]
//! login = "shiftkey"
//! ```

mod loader;

pub use loader::{load_config, load_config_from};

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::repository::HostedRepository;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read repository config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse repository config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Repository config not found at {}", .0.display())]
    NotFound(PathBuf),
}

/// Known hosted repositories, deserialized from the TOML config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    #[serde(default, rename = "repository")]
    repositories: Vec<HostedRepository>,
}

impl RepositoryConfig {
    #[must_use]
    pub fn repositories(&self) -> &[HostedRepository] {
        &self.repositories
    }
}

/// Resolve the default path for the repository config file.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".remote-identity").join("repositories.toml"))
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
