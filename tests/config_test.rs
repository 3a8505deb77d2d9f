//! Integration tests for loading the repository list and resolving remotes.

mod common;

use common::{create_test_dir, write_config};
use remote_identity::{find_matching_repository, load_config, load_config_from, ConfigError};

const REPOSITORIES: &str = r#"
[[repository]]
name = "desktop"
clone_url = "https://github.com/shiftkey/desktop.git"

[repository.owner]
login = "shiftkey"

[[repository]]
name = "repo"
full_name = "hubot/repo"
clone_url = "git@github.com:hubot/repo.git"

[repository.owner]
login = "hubot"
"#;

#[test]
fn test_load_and_find_repository() {
    let temp_dir = create_test_dir();
    let path = write_config(&temp_dir, REPOSITORIES);

    let config = load_config(Some(path.as_path())).expect("config should load");
    assert_eq!(config.repositories().len(), 2);

    let found = find_matching_repository(config.repositories(), "git@github.com:hubot/repo")
        .expect("should find hubot/repo");
    assert_eq!(found.display_name(), "hubot/repo");

    assert!(find_matching_repository(config.repositories(), "git@github.com:shiftkey/desktop").is_none());
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let temp_dir = create_test_dir();
    let path = temp_dir.path().join("missing.toml");
    match load_config(Some(path.as_path())) {
        Err(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_invalid_toml_is_an_error() {
    let temp_dir = create_test_dir();
    let path = write_config(&temp_dir, "[[repository]\nname = ");
    assert!(matches!(load_config_from(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn test_empty_file_has_no_repositories() {
    let temp_dir = create_test_dir();
    let path = write_config(&temp_dir, "");
    let config = load_config_from(&path).expect("empty config should load");
    assert!(config.repositories().is_empty());
}
