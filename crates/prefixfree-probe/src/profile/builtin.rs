//! Host profiles bundled with the crate.

use prefixfree_common::ConfigError;

use super::HostProfile;

const LEGACY_WEBKIT: &str = include_str!("../../profiles/legacy-webkit.toml");
const LEGACY_GECKO: &str = include_str!("../../profiles/legacy-gecko.toml");
const LEGACY_MS: &str = include_str!("../../profiles/legacy-ms.toml");
const MODERN: &str = include_str!("../../profiles/modern.toml");

/// Names of the bundled profiles.
pub const NAMES: &[&str] = &["legacy-webkit", "legacy-gecko", "legacy-ms", "modern"];

/// Look up a bundled profile. `None` if `name` is not bundled.
pub fn by_name(name: &str) -> Option<Result<HostProfile, ConfigError>> {
    let source = match name {
        "legacy-webkit" => LEGACY_WEBKIT,
        "legacy-gecko" => LEGACY_GECKO,
        "legacy-ms" => LEGACY_MS,
        "modern" => MODERN,
        _ => return None,
    };
    Some(HostProfile::from_toml(source))
}
