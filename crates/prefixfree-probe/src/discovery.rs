//! Prefix discovery and the prefix-only property set.

use std::collections::BTreeSet;

use prefixfree_common::{camel_case, Prefix};
use tracing::debug;

use crate::host::StyleSystem;

/// Result of scanning the computed-style property names.
#[derive(Debug, Default)]
pub(crate) struct PrefixScan {
    /// Vendor segment → occurrences, in first-seen order.
    pub tally: Vec<(String, usize)>,
    /// Every hyphen-marked name plus recovered shorthands.
    pub candidates: Vec<String>,
}

impl PrefixScan {
    /// The most frequent vendor; ties go to the one seen first.
    pub fn dominant(&self) -> Option<Prefix> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.tally {
            if best.map_or(true, |(_, uses)| *uses < entry.1) {
                best = Some(entry);
            }
        }
        best.map(|(vendor, _)| Prefix::from_vendor(vendor))
    }

    fn count(&mut self, vendor: &str) {
        match self.tally.iter_mut().find(|(v, _)| v == vendor) {
            Some((_, uses)) => *uses += 1,
            None => self.tally.push((vendor.to_string(), 1)),
        }
    }
}

/// Whether the scratch style object recognises a hyphenated property.
pub(crate) fn style_supports<H: StyleSystem + ?Sized>(host: &H, property: &str) -> bool {
    host.has_style_key(&camel_case(property))
}

/// Tally vendor segments and collect candidate properties.
///
/// Names with more than three hyphen segments are shortened one trailing
/// segment at a time; a shortened name the style object recognises is a
/// shorthand the computed view never lists on its own.
pub(crate) fn scan<H: StyleSystem + ?Sized>(host: &H, names: &[String]) -> PrefixScan {
    let mut scan = PrefixScan::default();

    for name in names {
        if !name.starts_with('-') {
            continue;
        }
        scan.candidates.push(name.clone());

        let mut parts: Vec<&str> = name.split('-').collect();
        match parts.get(1) {
            Some(vendor) if !vendor.is_empty() => scan.count(vendor),
            _ => continue,
        }

        while parts.len() > 3 {
            parts.pop();
            let shorthand = parts.join("-");
            if style_supports(host, &shorthand) && !scan.candidates.contains(&shorthand) {
                debug!(shorthand = %shorthand, "recovered shorthand candidate");
                scan.candidates.push(shorthand);
            }
        }
    }

    scan
}

/// Unprefixed names of candidates that only work with `prefix`.
pub(crate) fn prefixed_properties<H: StyleSystem + ?Sized>(
    host: &H,
    prefix: &Prefix,
    candidates: &[String],
) -> BTreeSet<String> {
    let mut properties: BTreeSet<String> = candidates
        .iter()
        .filter_map(|candidate| candidate.strip_prefix(prefix.as_str()))
        .filter(|unprefixed| !unprefixed.is_empty() && !style_supports(host, unprefixed))
        .map(str::to_ascii_lowercase)
        .collect();

    // Some legacy hosts only expose transforms under a lowercase vendor key
    // that never shows up in the computed view.
    if prefix.camel() == "Ms"
        && !host.has_style_key("transform")
        && !host.has_style_key("MsTransform")
        && host.has_style_key("msTransform")
    {
        properties.insert("transform".into());
        properties.insert("transform-origin".into());
    }

    properties
}
