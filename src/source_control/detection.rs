//! Platform detection logic for source control systems.

use crate::remote::ParsedRemote;

/// Known source control hosting platforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceControlPlatform {
    GitHub,
    GitLab,
    Bitbucket,
    AzureDevOps,
    Gitea,
    /// Self-hosted git with unknown URL pattern
    Unknown { host: String },
}

impl SourceControlPlatform {
    /// Get human-readable name for the platform
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Bitbucket => "Bitbucket",
            Self::AzureDevOps => "Azure DevOps",
            Self::Gitea => "Gitea",
            Self::Unknown { .. } => "Unknown",
        }
    }
}

/// Detect which source control platform hosts a parsed remote.
///
/// Host matching is case-insensitive even though [`ParsedRemote::hostname`]
/// keeps the original casing.
#[must_use]
pub fn detect_platform(remote: &ParsedRemote) -> SourceControlPlatform {
    let host = remote.hostname().to_lowercase();

    if host.contains("github.com") {
        SourceControlPlatform::GitHub
    } else if host.contains("gitlab.com") {
        SourceControlPlatform::GitLab
    } else if host.contains("bitbucket.org") {
        SourceControlPlatform::Bitbucket
    } else if host.contains("dev.azure.com") || host.contains("visualstudio.com") {
        SourceControlPlatform::AzureDevOps
    } else if host.contains("gitea") {
        // Gitea instances often have "gitea" in the domain
        SourceControlPlatform::Gitea
    } else {
        SourceControlPlatform::Unknown {
            host: remote.hostname().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::parse_remote;

    fn detect(url: &str) -> SourceControlPlatform {
        let remote = parse_remote(url).expect("URL should parse");
        detect_platform(&remote)
    }

    #[test]
    fn test_detect_github() {
        assert_eq!(detect("https://github.com/hubot/repo.git"), SourceControlPlatform::GitHub);
        assert_eq!(detect("git@github.com:hubot/repo.git"), SourceControlPlatform::GitHub);
        assert_eq!(detect("git:github.com/hubot/repo"), SourceControlPlatform::GitHub);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect("https://GitHub.com/hubot/repo"), SourceControlPlatform::GitHub);
    }

    #[test]
    fn test_detect_gitlab() {
        assert_eq!(detect("ssh://git@gitlab.com/user/repo.git"), SourceControlPlatform::GitLab);
    }

    #[test]
    fn test_detect_bitbucket() {
        assert_eq!(detect("git@bitbucket.org:team/repo.git"), SourceControlPlatform::Bitbucket);
    }

    #[test]
    fn test_detect_azure_devops() {
        assert_eq!(detect("https://org.visualstudio.com/project/repo"), SourceControlPlatform::AzureDevOps);
    }

    #[test]
    fn test_detect_gitea() {
        assert_eq!(detect("https://gitea.example.com/user/repo.git"), SourceControlPlatform::Gitea);
    }

    #[test]
    fn test_detect_unknown_keeps_host_casing() {
        assert_eq!(
            detect("https://Git.Company.com/team/repo.git"),
            SourceControlPlatform::Unknown {
                host: "Git.Company.com".to_string()
            }
        );
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(SourceControlPlatform::AzureDevOps.name(), "Azure DevOps");
        assert_eq!(
            SourceControlPlatform::Unknown {
                host: "example.com".to_string()
            }
            .name(),
            "Unknown"
        );
    }
}
