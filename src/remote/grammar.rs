use super::{strip_remote_suffix, ParsedRemote};

/// The remote URL shapes understood by [`super::parse_remote`].
///
/// Scheme-prefixed grammars come first so the shorthand `host:path` form
/// never claims a `scheme:` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RemoteGrammar {
    /// `https://[user[:password]@]host/owner/name`, also `http://`
    Https,
    /// `ssh://[user[:password]@]host/owner/name`
    SshUrl,
    /// `git:host/owner/name` or `git://host/owner/name`
    GitProtocol,
    /// `[user@]host:owner/name`
    SshShorthand,
}

impl RemoteGrammar {
    pub(super) const ORDERED: [Self; 4] = [
        Self::Https,
        Self::SshUrl,
        Self::GitProtocol,
        Self::SshShorthand,
    ];

    pub(super) fn label(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::SshUrl => "ssh-url",
            Self::GitProtocol => "git",
            Self::SshShorthand => "ssh-shorthand",
        }
    }

    pub(super) fn try_match(self, url: &str) -> Option<ParsedRemote> {
        match self {
            Self::Https => {
                let rest = url
                    .strip_prefix("https://")
                    .or_else(|| url.strip_prefix("http://"))?;
                parse_authority_path(rest)
            }
            Self::SshUrl => parse_authority_path(url.strip_prefix("ssh://")?),
            Self::GitProtocol => {
                let rest = url.strip_prefix("git:")?;
                parse_authority_path(rest.strip_prefix("//").unwrap_or(rest))
            }
            Self::SshShorthand => parse_shorthand(url),
        }
    }
}

/// `[credentials@]host/owner/name`
fn parse_authority_path(rest: &str) -> Option<ParsedRemote> {
    let (authority, path) = rest.split_once('/')?;
    parse_path_segments(strip_credentials(authority), path)
}

/// `[user@]host:owner/name`
fn parse_shorthand(url: &str) -> Option<ParsedRemote> {
    let (authority, path) = url.split_once(':')?;
    // `scheme://...` and absolute paths such as `C:/...` are not shorthand
    if authority.contains('/') || path.starts_with('/') {
        return None;
    }
    parse_path_segments(strip_credentials(authority), path)
}

fn strip_credentials(authority: &str) -> &str {
    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
}

fn parse_path_segments(host: &str, path: &str) -> Option<ParsedRemote> {
    if host.is_empty() || host.contains(char::is_whitespace) {
        return None;
    }
    let (owner, name) = strip_remote_suffix(path).split_once('/')?;
    if !is_path_segment(owner) || !is_path_segment(name) {
        return None;
    }
    Some(ParsedRemote::new(host, owner, name))
}

/// A single non-empty `owner` or `name` component.
pub(super) fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains(['/', '@'])
        && !segment.contains(char::is_whitespace)
}
