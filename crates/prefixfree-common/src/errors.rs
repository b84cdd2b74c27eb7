use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by a style system while it is being probed.
///
/// The prober treats every one of these as "not supported" for the candidate
/// being tested; they never abort initialization.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("probe sheet unavailable: {0}")]
    ProbeSheetUnavailable(String),

    #[error("declaration probe failed for {property}: {reason}")]
    Declaration { property: String, reason: String },

    #[error("rule probe failed: {0}")]
    Rule(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PrefixError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("pattern error: {0}")]
    Pattern(String),

    #[error("{0}")]
    Other(String),
}
