use std::path::Path;
use tracing::{debug, warn};

use super::{default_config_path, ConfigError, RepositoryConfig};

/// Load the repository config.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is used and a missing file yields an empty config.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be found (explicit path only),
/// read, or parsed.
pub fn load_config(path: Option<&Path>) -> Result<RepositoryConfig, ConfigError> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return load_config_from(path);
    }

    let Some(path) = default_config_path() else {
        warn!("Could not determine home directory; using an empty repository list");
        return Ok(RepositoryConfig::default());
    };
    if !path.exists() {
        debug!("Repository config not found at {}; using an empty repository list", path.display());
        return Ok(RepositoryConfig::default());
    }
    load_config_from(&path)
}

/// Read and parse the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<RepositoryConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: RepositoryConfig = toml::from_str(&content)?;
    debug!(
        "Loaded {} repositories from {}",
        config.repositories().len(),
        path.display()
    );
    Ok(config)
}
