use super::*;
use crate::repository::HostedRepositoryRecord;

#[test]
fn test_empty_toml_produces_defaults() {
    let config: RepositoryConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(config, RepositoryConfig::default());
    assert!(config.repositories().is_empty());
}

#[test]
fn test_repository_table() {
    let toml_str = r#"
[[repository]]
name = "desktop"
full_name = "shiftkey/desktop"
clone_url = "https://github.com/shiftkey/desktop.git"
fork = true

[repository.owner]
login = "shiftkey"

[[repository]]
name = "repo"

[repository.owner]
login = "hubot"
"#;
    let config: RepositoryConfig = toml::from_str(toml_str).expect("Should parse repositories");
    let repositories = config.repositories();
    assert_eq!(repositories.len(), 2);

    let desktop = repositories.first().expect("first repository");
    assert_eq!(desktop.owner_login(), "shiftkey");
    assert_eq!(desktop.clone_url(), Some("https://github.com/shiftkey/desktop.git"));
    assert!(desktop.fork);
    assert!(!desktop.private);

    let repo = repositories.get(1).expect("second repository");
    assert_eq!(repo.clone_url(), None);
    assert_eq!(repo.display_name(), "hubot/repo");
}

#[test]
fn test_unknown_top_level_key_is_rejected() {
    let result: Result<RepositoryConfig, _> = toml::from_str("repositories = []\n");
    assert!(result.is_err());
}

#[test]
fn test_missing_owner_is_rejected() {
    let toml_str = "[[repository]]\nname = \"repo\"\n";
    let result: Result<RepositoryConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

#[test]
fn test_default_config_path_location() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with(".remote-identity/repositories.toml"));
    }
}

#[test]
fn test_not_found_error_message() {
    let err = ConfigError::NotFound(std::path::PathBuf::from("/nope/repositories.toml"));
    assert_eq!(err.to_string(), "Repository config not found at /nope/repositories.toml");
}
