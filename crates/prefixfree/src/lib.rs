//! Write unprefixed CSS; have it rewritten for whatever vendor prefix the
//! host style system needs.
//!
//! [`PrefixFree::initialize`] probes a [`StyleSystem`] once and keeps the
//! resulting capabilities for the rewrite operations. A host without a
//! computed-style view, or without any vendor-prefixed property, yields an
//! inert instance whose operations return their input unchanged.

use std::borrow::Cow;

use tracing::{error, info};

pub use prefixfree_common::{
    camel_case, de_camel_case, Capabilities, CapabilitySets, ConfigError, HostError, Prefix,
    PrefixError, SelectorAliasMap,
};
pub use prefixfree_config::PrefixFreeConfig;
pub use prefixfree_probe::{HostProfile, ProfileHost, Prober, StyleSystem};
pub use prefixfree_rewrite::Rewriter;

#[cfg(test)]
mod tests;

/// Probed capabilities plus the rewriter built from them.
#[derive(Debug)]
pub struct PrefixFree {
    rewriter: Option<Rewriter>,
}

impl PrefixFree {
    /// Probe `host` with the default prober.
    pub fn initialize<H: StyleSystem + ?Sized>(host: &mut H) -> Self {
        Self::with_prober(host, &Prober::new())
    }

    /// Probe `host` with the extra keywords and value-accepting properties
    /// from `config`.
    pub fn from_config<H: StyleSystem + ?Sized>(host: &mut H, config: &PrefixFreeConfig) -> Self {
        let prober = Prober::new()
            .with_extra_keywords(config.probe.extra_keywords.clone())
            .with_value_properties(config.rewrite.value_properties.clone());
        Self::with_prober(host, &prober)
    }

    /// Probe `host` with `prober`. On success the prefix is appended to the
    /// root element's classes.
    pub fn with_prober<H: StyleSystem + ?Sized>(host: &mut H, prober: &Prober) -> Self {
        let Some(caps) = prober.probe(host) else {
            return Self::inert();
        };

        let prefix = caps.prefix.clone();
        match Rewriter::new(caps) {
            Ok(rewriter) => {
                host.tag_root(prefix.as_str());
                info!(prefix = %prefix, "prefixing enabled");
                Self {
                    rewriter: Some(rewriter),
                }
            }
            Err(e) => {
                error!(prefix = %prefix, error = %e, "failed to build rewriter; prefixing disabled");
                Self::inert()
            }
        }
    }

    /// Use known capabilities without probing.
    pub fn from_capabilities(caps: Capabilities) -> Result<Self, PrefixError> {
        Ok(Self {
            rewriter: Some(Rewriter::new(caps)?),
        })
    }

    /// An instance that rewrites nothing.
    pub fn inert() -> Self {
        Self { rewriter: None }
    }

    pub fn is_active(&self) -> bool {
        self.rewriter.is_some()
    }

    pub fn prefix(&self) -> Option<&Prefix> {
        self.rewriter.as_ref().map(Rewriter::prefix)
    }

    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.rewriter.as_ref().map(Rewriter::capabilities)
    }

    /// Rewrite stylesheet text; selectors and at-rules only when `raw`.
    pub fn prefix_css(&self, css: &str, raw: bool) -> String {
        match &self.rewriter {
            Some(rewriter) => rewriter.prefix_css(css, raw),
            None => css.to_string(),
        }
    }

    /// `name` with the prefix if the host only supports it prefixed.
    pub fn property<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match &self.rewriter {
            Some(rewriter) => rewriter.property(name),
            None => Cow::Borrowed(name),
        }
    }

    pub fn value(&self, value: &str, property: &str) -> String {
        match &self.rewriter {
            Some(rewriter) => rewriter.value(value, property),
            None => value.to_string(),
        }
    }

    pub fn prefix_selector<'a>(&'a self, selector: &'a str) -> &'a str {
        match &self.rewriter {
            Some(rewriter) => rewriter.prefix_selector(selector),
            None => selector,
        }
    }

    /// Prefix `property` without checking support. Inert instances leave it
    /// unprefixed.
    pub fn prefix_property(&self, property: &str, camel: bool) -> String {
        match &self.rewriter {
            Some(rewriter) => rewriter.prefix_property(property, camel),
            None if camel => camel_case(property),
            None => property.to_string(),
        }
    }
}
