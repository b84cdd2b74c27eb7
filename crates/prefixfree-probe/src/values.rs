//! Value function and keyword discovery.

use std::collections::BTreeSet;

use prefixfree_common::Prefix;
use tracing::debug;

use crate::host::StyleSystem;
use crate::tables::{FunctionCandidate, FUNCTIONS, KEYWORDS};

fn accepts<H: StyleSystem + ?Sized>(host: &mut H, property: &str, value: &str) -> bool {
    match host.supports_declaration(property, value) {
        Ok(accepted) => accepted,
        Err(e) => {
            debug!(property, value, error = %e, "declaration probe failed");
            false
        }
    }
}

/// Bare form rejected, prefixed form accepted.
fn needs_prefix<H: StyleSystem + ?Sized>(
    host: &mut H,
    property: &str,
    bare: &str,
    prefixed: &str,
) -> bool {
    !accepts(host, property, bare) && accepts(host, property, prefixed)
}

pub(crate) fn prefixed_functions<H: StyleSystem + ?Sized>(
    host: &mut H,
    prefix: &Prefix,
) -> BTreeSet<String> {
    FUNCTIONS
        .iter()
        .filter(|f: &&FunctionCandidate| {
            needs_prefix(&mut *host, f.property, &f.value(""), &f.value(prefix.as_str()))
        })
        .map(|f| f.name.to_string())
        .collect()
}

/// Keywords from the built-in table plus `extra` (keyword, test property)
/// pairs that only work with `prefix`.
pub(crate) fn prefixed_keywords<H: StyleSystem + ?Sized>(
    host: &mut H,
    prefix: &Prefix,
    extra: &[(String, String)],
) -> BTreeSet<String> {
    let builtin = KEYWORDS.iter().map(|(k, p)| (*k, *p));
    let extra = extra
        .iter()
        .filter(|(k, _)| !KEYWORDS.iter().any(|(known, _)| known == k))
        .map(|(k, p)| (k.as_str(), p.as_str()));

    builtin
        .chain(extra)
        .filter(|(keyword, property)| {
            needs_prefix(&mut *host, property, keyword, &prefix.apply(keyword))
        })
        .map(|(keyword, _)| keyword.to_ascii_lowercase())
        .collect()
}
