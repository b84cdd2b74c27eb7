use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::case::camel_case;

/// Properties whose values may name other properties.
pub const DEFAULT_VALUE_PROPERTIES: &[&str] = &["transition", "transition-property", "will-change"];

/// Standard selector spelling → prefixed spelling.
pub type SelectorAliasMap = BTreeMap<String, String>;

/// The dominant vendor prefix of a host, always in `-vendor-` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefix(String);

impl Prefix {
    /// Build a prefix from a bare vendor segment (`webkit` → `-webkit-`).
    pub fn from_vendor(vendor: &str) -> Self {
        Self(format!("-{}-", vendor.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The vendor segment without hyphens.
    pub fn vendor(&self) -> &str {
        self.0.trim_matches('-')
    }

    /// Camel-cased form used by style objects (`-webkit-` → `Webkit`).
    pub fn camel(&self) -> String {
        camel_case(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prepend the prefix to `name`.
    pub fn apply(&self, name: &str) -> String {
        format!("{}{name}", self.0)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unprefixed names that the host only supports with the prefix applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitySets {
    pub properties: BTreeSet<String>,
    pub value_keywords: BTreeSet<String>,
    pub value_functions: BTreeSet<String>,
    /// Standard selector spellings, keys of the selector alias map.
    pub selectors: BTreeSet<String>,
    /// At-rule names without the leading `@`.
    pub at_rules: BTreeSet<String>,
}

impl CapabilitySets {
    /// Lowercase every property, keyword and function and make the three
    /// sets disjoint. A keyword or function that is also a prefix-only
    /// property is dropped from the value set. Returns the dropped names.
    pub fn normalize(&mut self) -> Vec<String> {
        self.properties = lowercase_set(&self.properties);
        self.value_keywords = lowercase_set(&self.value_keywords);
        self.value_functions = lowercase_set(&self.value_functions);

        let mut dropped = Vec::new();
        let properties = &self.properties;
        self.value_keywords.retain(|k| {
            let keep = !properties.contains(k);
            if !keep {
                dropped.push(k.clone());
            }
            keep
        });
        self.value_functions.retain(|f| {
            let keep = !properties.contains(f) && !self.value_keywords.contains(f);
            if !keep {
                dropped.push(f.clone());
            }
            keep
        });
        dropped
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.value_keywords.is_empty()
            && self.value_functions.is_empty()
            && self.selectors.is_empty()
            && self.at_rules.is_empty()
    }
}

fn lowercase_set(set: &BTreeSet<String>) -> BTreeSet<String> {
    set.iter().map(|s| s.to_ascii_lowercase()).collect()
}

/// Everything probing learned about a host. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub prefix: Prefix,
    pub sets: CapabilitySets,
    pub selector_map: SelectorAliasMap,
    /// Properties whose values are scanned for property names.
    pub value_properties: Vec<String>,
}

impl Capabilities {
    /// Empty capabilities for `prefix`, with the default value-accepting
    /// properties.
    pub fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            sets: CapabilitySets::default(),
            selector_map: SelectorAliasMap::new(),
            value_properties: DEFAULT_VALUE_PROPERTIES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn with_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets.properties.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_keywords<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets.value_keywords.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets.value_functions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Record a selector alias (`::selection` → `::-webkit-selection`).
    pub fn with_selector(mut self, standard: &str, prefixed: &str) -> Self {
        self.sets.selectors.insert(standard.to_string());
        self.selector_map
            .insert(standard.to_string(), prefixed.to_string());
        self
    }

    pub fn with_at_rules<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets.at_rules.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_value_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_properties = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_value_property(&self, property: &str) -> bool {
        self.value_properties.iter().any(|p| p == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_forms() {
        let prefix = Prefix::from_vendor("WebKit");
        assert_eq!(prefix.as_str(), "-webkit-");
        assert_eq!(prefix.vendor(), "webkit");
        assert_eq!(prefix.camel(), "Webkit");
        assert_eq!(prefix.apply("transform"), "-webkit-transform");
        assert_eq!(prefix.to_string(), "-webkit-");
    }

    #[test]
    fn ms_prefix_camel_form() {
        assert_eq!(Prefix::from_vendor("ms").camel(), "Ms");
    }

    #[test]
    fn normalize_lowercases_members() {
        let mut sets = CapabilitySets::default();
        sets.properties.insert("Transform".into());
        sets.value_keywords.insert("FLEX".into());
        let dropped = sets.normalize();
        assert!(dropped.is_empty());
        assert!(sets.properties.contains("transform"));
        assert!(sets.value_keywords.contains("flex"));
    }

    #[test]
    fn normalize_makes_sets_disjoint() {
        let mut sets = CapabilitySets::default();
        sets.properties.insert("grid".into());
        sets.value_keywords.insert("grid".into());
        sets.value_keywords.insert("flex".into());
        sets.value_functions.insert("flex".into());
        sets.value_functions.insert("calc".into());

        let dropped = sets.normalize();

        assert_eq!(dropped, vec!["grid".to_string(), "flex".to_string()]);
        assert!(sets.properties.contains("grid"));
        assert!(!sets.value_keywords.contains("grid"));
        assert!(sets.value_keywords.contains("flex"));
        assert!(!sets.value_functions.contains("flex"));
        assert!(sets.value_functions.contains("calc"));
    }

    #[test]
    fn sets_iterate_sorted() {
        let caps = Capabilities::new(Prefix::from_vendor("zzz"))
            .with_properties(["user-select", "animation", "transform"]);
        let names: Vec<&str> = caps.sets.properties.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["animation", "transform", "user-select"]);
    }

    #[test]
    fn default_value_properties() {
        let caps = Capabilities::new(Prefix::from_vendor("zzz"));
        assert!(caps.is_value_property("transition"));
        assert!(caps.is_value_property("transition-property"));
        assert!(caps.is_value_property("will-change"));
        assert!(!caps.is_value_property("color"));
    }

    #[test]
    fn with_selector_records_alias() {
        let caps = Capabilities::new(Prefix::from_vendor("zzz"))
            .with_selector("::selection", "::-zzz-selection");
        assert!(caps.sets.selectors.contains("::selection"));
        assert_eq!(
            caps.selector_map.get("::selection").map(String::as_str),
            Some("::-zzz-selection")
        );
    }

    #[test]
    fn capabilities_serialize_prefix_as_string() {
        let caps = Capabilities::new(Prefix::from_vendor("zzz")).with_properties(["transform"]);
        let json = serde_json::to_value(&caps).unwrap();
        assert_eq!(json["prefix"], "-zzz-");
        assert_eq!(json["sets"]["properties"][0], "transform");
    }
}
