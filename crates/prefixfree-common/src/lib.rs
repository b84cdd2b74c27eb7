pub mod case;
pub mod errors;
pub mod types;

pub use case::{camel_case, de_camel_case};
pub use errors::{ConfigError, HostError, PrefixError};
pub use types::{
    Capabilities, CapabilitySets, Prefix, SelectorAliasMap, DEFAULT_VALUE_PROPERTIES,
};

pub type Result<T> = std::result::Result<T, PrefixError>;
