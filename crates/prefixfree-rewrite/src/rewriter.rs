use std::borrow::Cow;

use prefixfree_common::{camel_case, Capabilities, Prefix, PrefixError};
use tracing::debug;

use crate::pass::{Pipeline, RunContext};
use crate::rules;

/// Rewrites CSS for one set of probed capabilities.
///
/// All patterns are compiled once in [`Rewriter::new`]; every operation
/// afterwards is a pure function of its input and the capabilities.
#[derive(Debug)]
pub struct Rewriter {
    caps: Capabilities,
    stylesheet: Pipeline,
    value: Pipeline,
}

impl Rewriter {
    pub fn new(caps: Capabilities) -> Result<Self, PrefixError> {
        let stylesheet = Pipeline::compile(rules::STYLESHEET, &caps)?;
        let value = Pipeline::compile(rules::VALUE, &caps)?;
        debug!(
            prefix = %caps.prefix,
            stylesheet_passes = stylesheet.len(),
            value_passes = value.len(),
            "rewriter ready"
        );
        Ok(Self {
            caps,
            stylesheet,
            value,
        })
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    pub fn prefix(&self) -> &Prefix {
        &self.caps.prefix
    }

    /// Rewrite stylesheet text. Selectors and at-rules are only rewritten
    /// when `include_selectors` is set.
    pub fn prefix_css(&self, css: &str, include_selectors: bool) -> String {
        self.stylesheet.run(
            css,
            &self.caps,
            RunContext {
                raw: include_selectors,
                value_property: false,
            },
        )
    }

    /// Prefix `name` if it only works prefixed on this host.
    pub fn property<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self
            .caps
            .sets
            .properties
            .contains(name.to_ascii_lowercase().as_str())
        {
            Cow::Owned(self.caps.prefix.apply(name))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// Rewrite a single value assigned to `property`.
    pub fn value(&self, value: &str, property: &str) -> String {
        self.value.run(
            value,
            &self.caps,
            RunContext {
                raw: false,
                value_property: self.caps.is_value_property(property),
            },
        )
    }

    /// The prefixed spelling of `selector`, or `selector` itself.
    pub fn prefix_selector<'a>(&'a self, selector: &'a str) -> &'a str {
        self.caps
            .selector_map
            .get(selector)
            .map_or(selector, String::as_str)
    }

    /// Prefix `property` whether or not the host needs it, optionally in
    /// camel case (`WebkitTransform`).
    pub fn prefix_property(&self, property: &str, camel: bool) -> String {
        let prefixed = self.caps.prefix.apply(property);
        if camel {
            camel_case(&prefixed)
        } else {
            prefixed
        }
    }
}
