//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# PrefixFree Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[rewrite]
# include_selectors = true   # also rewrite selectors and @-rules in stylesheets
# value_properties = ["transition", "transition-property", "will-change"]

[probe]
# Extra keyword candidates: keyword = property used to test it.
# extra_keywords = { stretch = "width" }

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
