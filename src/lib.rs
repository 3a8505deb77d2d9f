// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod remote;
pub mod repository;
pub mod source_control;

// Re-export commonly used types
pub use config::{default_config_path, load_config, load_config_from, ConfigError, RepositoryConfig};
pub use remote::{
    parse_remote, parse_repository_identifier, strip_remote_suffix, ParsedRemote,
    RepositoryIdentifier,
};
pub use repository::{
    find_matching_repository, same_github_remote, HostedRepository, HostedRepositoryRecord,
    RepositoryOwner,
};
pub use source_control::{detect_platform, SourceControlPlatform};
