//! Shared helpers used by the section validators.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase CSS identifier: letters and inner hyphens.
static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap());

/// Push an error if `value` is not a lowercase CSS identifier.
pub(crate) fn validate_identifier(errors: &mut Vec<String>, name: &str, value: &str) {
    if !IDENT_RE.is_match(value) {
        errors.push(format!(
            "{name} = {value:?} is not a lowercase CSS identifier"
        ));
    }
}
