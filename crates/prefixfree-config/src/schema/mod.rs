//! Configuration schema types for PrefixFree.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the rewriter ships with.

mod logging;
mod probe;
mod rewrite;

pub use logging::*;
pub use probe::*;
pub use rewrite::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for PrefixFree.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrefixFreeConfig {
    pub rewrite: RewriteConfig,
    pub probe: ProbeConfig,
    pub logging: LoggingConfig,
}
