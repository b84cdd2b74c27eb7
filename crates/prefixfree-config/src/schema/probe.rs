//! Capability probe configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Capability probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProbeConfig {
    /// Extra keyword candidates, keyed by keyword, valued by the property
    /// used to test it (e.g. `stretch = "width"`).
    pub extra_keywords: BTreeMap<String, String>,
}
