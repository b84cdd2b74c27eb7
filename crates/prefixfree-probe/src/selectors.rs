//! Selector and at-rule discovery through the transient probe sheet.

use std::collections::BTreeSet;

use prefixfree_common::{Prefix, SelectorAliasMap};
use tracing::debug;

use crate::host::{ProbeSheet, StyleSystem};
use crate::tables::{AT_RULES, SELECTORS};

#[derive(Debug, Default)]
pub(crate) struct RuleDiscovery {
    pub selectors: BTreeSet<String>,
    pub selector_map: SelectorAliasMap,
    pub at_rules: BTreeSet<String>,
}

/// Insert `prefix` right after the leading `:` or `::` of `selector`.
pub(crate) fn prefix_pseudo(selector: &str, prefix: &Prefix) -> String {
    let marker = if selector.starts_with("::") {
        2
    } else if selector.starts_with(':') {
        1
    } else {
        0
    };
    let (head, rest) = selector.split_at(marker);
    format!("{head}{prefix}{rest}")
}

pub(crate) fn discover<H: StyleSystem + ?Sized>(host: &mut H, prefix: &Prefix) -> RuleDiscovery {
    let mut found = RuleDiscovery::default();

    let mut sheet = match ProbeSheet::attach(host) {
        Ok(sheet) => sheet,
        Err(e) => {
            debug!(error = %e, "probe sheet unavailable, skipping selectors and at-rules");
            return found;
        }
    };

    for (selector, alias) in SELECTORS {
        let standard = alias.unwrap_or(selector);
        let prefixed = prefix_pseudo(selector, prefix);

        if !sheet.supports(standard) && sheet.supports(&prefixed) {
            debug!(standard, prefixed = %prefixed, "selector needs prefix");
            found.selectors.insert(standard.to_string());
            found.selector_map.insert(standard.to_string(), prefixed);
        }
    }

    for (name, param) in AT_RULES {
        let test = format!("{name} {}", param.unwrap_or(""));

        if !sheet.supports(&format!("@{test}")) && sheet.supports(&format!("@{prefix}{test}")) {
            debug!(at_rule = name, "at-rule needs prefix");
            found.at_rules.insert(name.to_string());
        }
    }

    found
}
