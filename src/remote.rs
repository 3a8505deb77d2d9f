//! Git remote URL parsing.
//!
//! Supports the remote URL shapes git itself accepts for hosted repositories:
//! - HTTPS: `https://github.com/owner/repo.git` (and `http://`)
//! - SSH shorthand: `git@github.com:owner/repo.git`
//! - SSH URL: `ssh://git@github.com/owner/repo.git`
//! - Git protocol: `git:github.com/owner/repo.git` or `git://github.com/owner/repo.git`
//!
//! Every shape is reduced to the same `hostname / owner / name` triple. Only
//! `owner/name` paths are recognized; nested group paths are rejected.

mod grammar;
mod identifier;

use std::fmt;

use serde::Serialize;
use tracing::trace;

use grammar::RemoteGrammar;

pub use identifier::{parse_repository_identifier, RepositoryIdentifier};

/// Result of parsing a git remote URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedRemote {
    hostname: String,
    owner: String,
    name: String,
}

impl ParsedRemote {
    fn new(hostname: &str, owner: &str, name: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// The host token exactly as written in the URL (e.g. "github.com").
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The user or organization the repository belongs to.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name, without any `.git` suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `owner/name`, as hosting services display it.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Credential-free HTTPS form of this remote.
    #[must_use]
    pub fn to_https_url(&self) -> String {
        format!("https://{}/{}/{}", self.hostname, self.owner, self.name)
    }
}

impl fmt::Display for ParsedRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.hostname, self.owner, self.name)
    }
}

/// Parse a git remote URL into its hostname, owner and repository name.
///
/// Grammars are tried in a fixed order and the first one that matches wins.
/// Surrounding whitespace is ignored.
///
/// # Returns
/// * `Some(ParsedRemote)` if the URL was successfully parsed
/// * `None` if the URL format is not recognized or the path is not `owner/name`
#[must_use]
pub fn parse_remote(url: &str) -> Option<ParsedRemote> {
    let url = url.trim();
    let parsed = RemoteGrammar::ORDERED.iter().find_map(|grammar| {
        let parsed = grammar.try_match(url)?;
        trace!(grammar = grammar.label(), "Matched remote URL grammar");
        Some(parsed)
    });
    if parsed.is_none() {
        trace!("No remote URL grammar matched");
    }
    parsed
}

/// Remove at most one trailing `/` and then at most one trailing `.git`.
///
/// This is the only normalization applied when comparing clone URLs.
#[must_use]
pub fn strip_remote_suffix(url: &str) -> &str {
    let url = url.strip_suffix('/').unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url)
}

#[cfg(test)]
#[path = "remote_tests_1.rs"]
mod tests_1;
#[cfg(test)]
#[path = "remote_tests_2.rs"]
mod tests_2;
#[cfg(test)]
#[path = "remote_tests_3.rs"]
mod tests_3;
