//! Rewriter configuration types.

use prefixfree_common::DEFAULT_VALUE_PROPERTIES;
use serde::{Deserialize, Serialize};

/// Rewriter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Also rewrite selectors and at-rules in stylesheet text.
    pub include_selectors: bool,
    /// Properties whose values may name other properties.
    pub value_properties: Vec<String>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            include_selectors: true,
            value_properties: DEFAULT_VALUE_PROPERTIES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}
