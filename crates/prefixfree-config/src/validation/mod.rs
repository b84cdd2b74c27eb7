//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod probe;
mod rewrite;

#[cfg(test)]
mod tests;

use crate::schema::PrefixFreeConfig;
use prefixfree_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PrefixFreeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    rewrite::validate_rewrite(&mut errors, config);
    probe::validate_probe(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
