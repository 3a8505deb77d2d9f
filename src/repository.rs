//! Matching remote URLs against known hosted repositories.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::remote::strip_remote_suffix;

/// The parts of a hosted repository needed to recognize its remotes.
///
/// Implemented by whatever repository model the caller already has; the
/// matcher only reads through it.
pub trait HostedRepositoryRecord {
    /// Canonical clone URL, if the hosting service reported one.
    fn clone_url(&self) -> Option<&str>;
    fn owner_login(&self) -> &str;
    fn name(&self) -> &str;
}

/// Owner of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// A repository as described by its hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedRepository {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub clone_url: Option<String>,
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub default_branch: Option<String>,
}

impl HostedRepository {
    #[must_use]
    pub fn new(owner_login: &str, name: &str, clone_url: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            full_name: None,
            clone_url,
            owner: RepositoryOwner {
                login: owner_login.to_string(),
            },
            html_url: None,
            private: false,
            fork: false,
            default_branch: None,
        }
    }

    /// `full_name` when set, otherwise `owner/name`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.owner.login, self.name))
    }
}

impl HostedRepositoryRecord for HostedRepository {
    fn clone_url(&self) -> Option<&str> {
        self.clone_url.as_deref()
    }

    fn owner_login(&self) -> &str {
        &self.owner.login
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Check whether `url` is a remote for `repository`.
///
/// The candidate is compared with the repository's clone URL after removing
/// a trailing `/` and `.git` from both. Any other difference (host casing,
/// protocol, credentials) means no match. A repository without a clone URL
/// never matches, even when owner and name coincide.
#[must_use]
pub fn same_github_remote<R: HostedRepositoryRecord + ?Sized>(repository: &R, url: &str) -> bool {
    let Some(clone_url) = repository.clone_url().filter(|u| !u.is_empty()) else {
        debug!(
            owner = repository.owner_login(),
            name = repository.name(),
            "Repository has no clone URL, treating remote as different"
        );
        return false;
    };

    let same = strip_remote_suffix(clone_url) == strip_remote_suffix(url);
    debug!(
        owner = repository.owner_login(),
        name = repository.name(),
        same,
        "Compared remote against clone URL"
    );
    same
}

/// Find the first repository that `url` is a remote for.
#[must_use]
pub fn find_matching_repository<'a, R: HostedRepositoryRecord>(
    repositories: &'a [R],
    url: &str,
) -> Option<&'a R> {
    repositories
        .iter()
        .find(|repository| same_github_remote(*repository, url))
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod repository_tests;
