//! Reading and parsing config files.

use std::io::ErrorKind;
use std::path::Path;

use prefixfree_common::ConfigError;
use tracing::{info, warn};

use crate::schema::PrefixFreeConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse config TOML. Missing sections and fields take their defaults.
pub fn parse_config(content: &str) -> Result<PrefixFreeConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("invalid config TOML: {e}")))
}

/// Load and parse `path`.
///
/// Validation problems are logged, not returned: callers that need a
/// strictly valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<PrefixFreeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config = parse_config(&content)?;
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load the config at the platform default path, writing the commented
/// template there first if no file exists.
pub fn load_default() -> Result<PrefixFreeConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }

    create_default_config(&path)?;
    Ok(PrefixFreeConfig::default())
}
