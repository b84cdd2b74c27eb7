//! Declarative host profiles.
//!
//! A [`HostProfile`] describes what a rendering engine's style system
//! accepts; [`ProfileHost`] answers [`StyleSystem`] queries from it. Profiles
//! load from TOML and a few ship built in (see [`builtin`]).

pub mod builtin;


use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use prefixfree_common::{camel_case, ConfigError, HostError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::host::{ComputedStyle, StyleSystem};

/// How the computed-style view exposes property names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Enumeration {
    /// Hyphenated names by index.
    #[default]
    Indexed,
    /// Camel-cased keys only.
    Keyed,
}

/// Selectors and at-rules the host parses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuleSupport {
    pub selectors: Vec<String>,
    /// At-rule names without `@` (e.g. `-webkit-keyframes`).
    pub at_rules: Vec<String>,
}

/// A declarative description of a host style system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostProfile {
    pub name: String,
    /// Whether the host has a computed-style view at all.
    pub computed_style: bool,
    pub enumeration: Enumeration,
    /// Hyphenated names listed by the computed-style view.
    pub computed: Vec<String>,
    /// Hyphenated names a scratch style object recognises.
    pub style_properties: Vec<String>,
    /// Raw camel-cased keys recognised in addition to `style_properties`.
    pub extra_style_keys: Vec<String>,
    /// Property → accepted values. A value is accepted when it equals a
    /// listed token or starts with `<token>(`.
    pub values: BTreeMap<String, Vec<String>>,
    pub rules: RuleSupport,
}

impl Default for HostProfile {
    fn default() -> Self {
        Self {
            name: "custom".into(),
            computed_style: true,
            enumeration: Enumeration::Indexed,
            computed: Vec::new(),
            style_properties: Vec::new(),
            extra_style_keys: Vec::new(),
            values: BTreeMap::new(),
            rules: RuleSupport::default(),
        }
    }
}

impl HostProfile {
    /// Parse a profile from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse host profile: {e}")))
    }

    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;
        let profile = Self::from_toml(&content)?;
        info!("loaded host profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    /// Resolve a built-in profile name, or else a path to a profile file.
    pub fn resolve(spec: &str) -> Result<Self, ConfigError> {
        match builtin::by_name(spec) {
            Some(profile) => profile,
            None => Self::load(Path::new(spec)),
        }
    }

    fn accepts_value(&self, property: &str, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        self.values.get(property).is_some_and(|tokens| {
            tokens.iter().any(|token| {
                value == token
                    || value
                        .strip_prefix(token.as_str())
                        .is_some_and(|rest| rest.starts_with('('))
            })
        })
    }

    fn parses_rule(&self, rule_text: &str) -> bool {
        let head = rule_text.split('{').next().unwrap_or("").trim();
        if head.is_empty() || !rule_text.contains('{') {
            return false;
        }

        match head.strip_prefix('@') {
            Some(at_rule) => {
                let name = at_rule.split_whitespace().next().unwrap_or("");
                self.rules.at_rules.iter().any(|r| r == name)
            }
            None => self.rules.selectors.iter().any(|s| s == head),
        }
    }
}

/// A [`StyleSystem`] backed by a [`HostProfile`].
///
/// Records probe-sheet attachment and root tagging so callers can observe
/// the side effects probing has on the "document".
#[derive(Debug, Clone)]
pub struct ProfileHost {
    profile: HostProfile,
    style_keys: HashSet<String>,
    probe_sheet_attached: bool,
    probe_sheet_attach_count: usize,
    root_classes: Vec<String>,
}

impl ProfileHost {
    pub fn new(profile: HostProfile) -> Self {
        let style_keys = profile
            .style_properties
            .iter()
            .map(|p| camel_case(p))
            .chain(profile.extra_style_keys.iter().cloned())
            .collect();

        Self {
            profile,
            style_keys,
            probe_sheet_attached: false,
            probe_sheet_attach_count: 0,
            root_classes: Vec::new(),
        }
    }

    pub fn profile(&self) -> &HostProfile {
        &self.profile
    }

    pub fn probe_sheet_attached(&self) -> bool {
        self.probe_sheet_attached
    }

    pub fn probe_sheet_attach_count(&self) -> usize {
        self.probe_sheet_attach_count
    }

    /// Class tokens appended to the root element.
    pub fn root_classes(&self) -> &[String] {
        &self.root_classes
    }
}

impl StyleSystem for ProfileHost {
    fn computed_style(&self) -> Option<ComputedStyle> {
        if !self.profile.computed_style {
            return None;
        }

        Some(match self.profile.enumeration {
            Enumeration::Indexed => ComputedStyle {
                indexed: self.profile.computed.clone(),
                keyed: Vec::new(),
            },
            Enumeration::Keyed => ComputedStyle {
                indexed: Vec::new(),
                keyed: self.profile.computed.iter().map(|p| camel_case(p)).collect(),
            },
        })
    }

    fn has_style_key(&self, key: &str) -> bool {
        self.style_keys.contains(key)
    }

    fn supports_declaration(&mut self, property: &str, value: &str) -> Result<bool, HostError> {
        Ok(self.profile.accepts_value(property, value))
    }

    fn attach_probe_sheet(&mut self) -> Result<(), HostError> {
        if self.probe_sheet_attached {
            return Err(HostError::ProbeSheetUnavailable(
                "probe sheet already attached".into(),
            ));
        }
        self.probe_sheet_attached = true;
        self.probe_sheet_attach_count += 1;
        Ok(())
    }

    fn probe_rule(&mut self, rule_text: &str) -> Result<bool, HostError> {
        if !self.probe_sheet_attached {
            return Err(HostError::Rule("probe sheet is not attached".into()));
        }
        Ok(self.profile.parses_rule(rule_text))
    }

    fn detach_probe_sheet(&mut self) {
        self.probe_sheet_attached = false;
    }

    fn tag_root(&mut self, token: &str) {
        self.root_classes.push(token.to_string());
    }
}
