use prefixfree_common::{Capabilities, CapabilitySets, DEFAULT_VALUE_PROPERTIES};
use tracing::{info, warn};

use crate::discovery;
use crate::host::StyleSystem;
use crate::selectors;
use crate::values;

/// Runs the one-time capability probe against a host.
///
/// The prober itself holds only configuration; every run interrogates the
/// host afresh and returns a new immutable [`Capabilities`] snapshot.
#[derive(Debug, Clone)]
pub struct Prober {
    extra_keywords: Vec<(String, String)>,
    value_properties: Vec<String>,
}

impl Default for Prober {
    fn default() -> Self {
        Self {
            extra_keywords: Vec::new(),
            value_properties: DEFAULT_VALUE_PROPERTIES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl Prober {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe additional (keyword, test property) pairs besides the built-in
    /// keyword table.
    pub fn with_extra_keywords<I>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.extra_keywords.extend(keywords);
        self
    }

    /// Replace the list of properties whose values name other properties.
    pub fn with_value_properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.value_properties = properties.into_iter().collect();
        self
    }

    /// Probe `host`.
    ///
    /// Returns `None` when the host has no computed-style view or exposes no
    /// vendor-prefixed property at all; prefixing is then disabled.
    pub fn probe<H: StyleSystem + ?Sized>(&self, host: &mut H) -> Option<Capabilities> {
        let Some(computed) = host.computed_style() else {
            info!("host exposes no computed style; prefixing disabled");
            return None;
        };

        let names = computed.property_names();
        let scan = discovery::scan(host, &names);
        let Some(prefix) = scan.dominant() else {
            info!(
                properties = names.len(),
                "no vendor-prefixed properties found; prefixing disabled"
            );
            return None;
        };

        let properties = discovery::prefixed_properties(host, &prefix, &scan.candidates);
        let value_functions = values::prefixed_functions(host, &prefix);
        let value_keywords = values::prefixed_keywords(host, &prefix, &self.extra_keywords);
        let rules = selectors::discover(host, &prefix);

        let mut sets = CapabilitySets {
            properties,
            value_keywords,
            value_functions,
            selectors: rules.selectors,
            at_rules: rules.at_rules,
        };
        for name in sets.normalize() {
            warn!(name = %name, "value token is also a prefix-only property; dropped from value sets");
        }

        info!(
            prefix = %prefix,
            properties = sets.properties.len(),
            keywords = sets.value_keywords.len(),
            functions = sets.value_functions.len(),
            selectors = sets.selectors.len(),
            at_rules = sets.at_rules.len(),
            "capability probe complete"
        );

        Some(Capabilities {
            prefix,
            sets,
            selector_map: rules.selector_map,
            value_properties: self.value_properties.clone(),
        })
    }
}
