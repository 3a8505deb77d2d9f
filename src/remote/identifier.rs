//! Repository identifiers given either as a remote URL or as `owner/name`.

use serde::Serialize;

use super::grammar::is_path_segment;
use super::{parse_remote, ParsedRemote};

/// A repository named by owner and name, optionally pinned to a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryIdentifier {
    /// Host from the remote URL; `None` for a bare `owner/name` pair
    pub hostname: Option<String>,
    pub owner: String,
    pub name: String,
}

impl From<ParsedRemote> for RepositoryIdentifier {
    fn from(remote: ParsedRemote) -> Self {
        Self {
            hostname: Some(remote.hostname),
            owner: remote.owner,
            name: remote.name,
        }
    }
}

/// Parse a full remote URL or a bare `owner/name` pair.
///
/// A bare pair carries no hostname; resolving it against a default host is
/// left to the caller.
#[must_use]
pub fn parse_repository_identifier(input: &str) -> Option<RepositoryIdentifier> {
    let input = input.trim();
    if let Some(remote) = parse_remote(input) {
        return Some(remote.into());
    }

    let (owner, name) = input.split_once('/')?;
    let name = name.strip_suffix(".git").unwrap_or(name);
    (is_path_segment(owner) && is_path_segment(name)).then(|| RepositoryIdentifier {
        hostname: None,
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_from_remote_url() {
        let id = parse_repository_identifier("git@github.com:hubot/repo.git");
        assert_eq!(
            id,
            Some(RepositoryIdentifier {
                hostname: Some("github.com".to_string()),
                owner: "hubot".to_string(),
                name: "repo".to_string(),
            })
        );
    }

    #[test]
    fn test_identifier_from_owner_and_name() {
        let id = parse_repository_identifier("hubot/repo");
        assert_eq!(
            id,
            Some(RepositoryIdentifier {
                hostname: None,
                owner: "hubot".to_string(),
                name: "repo".to_string(),
            })
        );
    }

    #[test]
    fn test_identifier_strips_git_suffix() {
        let id = parse_repository_identifier("hubot/repo.git").expect("should parse");
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn test_identifier_rejects_partial_pairs() {
        assert_eq!(parse_repository_identifier("hubot/"), None);
        assert_eq!(parse_repository_identifier("/repo"), None);
        assert_eq!(parse_repository_identifier("hubot"), None);
        assert_eq!(parse_repository_identifier("a/b/c"), None);
        assert_eq!(parse_repository_identifier(""), None);
    }
}
