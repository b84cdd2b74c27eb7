//! PrefixFree configuration system.
//!
//! Provides TOML-based configuration for the rewriter, the capability
//! prober and logging. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use prefixfree_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    LogLevel, LoggingConfig, PrefixFreeConfig, ProbeConfig, RewriteConfig,
    CONFIG_SCHEMA_VERSION,
};

use prefixfree_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a commented template if it does not
/// exist yet. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<PrefixFreeConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PrefixFreeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = PrefixFreeConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"rewrite\""));
        assert!(json.contains("\"probe\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"will-change\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_missing_explicit_path() {
        let result = load_config(Some(Path::new("/tmp/nonexistent_prefixfree_config.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[rewrite]
value_properties = ["Transition"]
"#,
        )
        .unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("rewrite.value_properties"));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = PrefixFreeConfig::default();
        let json = config_to_json(&config);
        let parsed: PrefixFreeConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.rewrite.include_selectors);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
