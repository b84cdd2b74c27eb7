//! The style system interface consumed by the prober.

use prefixfree_common::{de_camel_case, HostError};
use tracing::debug;

/// Property names exposed by the host's computed-style view.
///
/// Hosts differ in how they expose them: some support indexed access with
/// hyphenated names, others only expose camel-cased keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    /// Hyphenated names from indexed access (`style[i]`).
    pub indexed: Vec<String>,
    /// Camel-cased keys from keyed enumeration.
    pub keyed: Vec<String>,
}

impl ComputedStyle {
    /// Hyphenated property names, preferring indexed access and falling back
    /// to de-camel-cased keys when the indexed view is empty.
    pub fn property_names(&self) -> Vec<String> {
        if !self.indexed.is_empty() {
            self.indexed.clone()
        } else {
            self.keyed.iter().map(|key| de_camel_case(key)).collect()
        }
    }
}

/// A host style system that can be interrogated for CSS support.
pub trait StyleSystem {
    /// The computed-style view of the root element, or `None` when the host
    /// has no computed-style capability at all.
    fn computed_style(&self) -> Option<ComputedStyle>;

    /// Whether a scratch element's style object recognises the camel-cased
    /// `key` (e.g. `WebkitTransform`, `borderRadius`).
    fn has_style_key(&self, key: &str) -> bool;

    /// Assign `value` to `property` (hyphenated) on a scratch style object
    /// and report whether the assignment took.
    fn supports_declaration(&mut self, property: &str, value: &str) -> Result<bool, HostError>;

    /// Insert a transient style element into the document.
    fn attach_probe_sheet(&mut self) -> Result<(), HostError>;

    /// Replace the probe element's text with `rule_text` and report whether
    /// at least one rule was parsed from it.
    fn probe_rule(&mut self, rule_text: &str) -> Result<bool, HostError>;

    /// Remove the transient style element. Must be safe to call once after
    /// every successful [`attach_probe_sheet`](Self::attach_probe_sheet).
    fn detach_probe_sheet(&mut self);

    /// Append `token` to the root element's class attribute.
    fn tag_root(&mut self, token: &str);
}

/// Scoped access to the transient probe style element.
///
/// Attaching happens in [`ProbeSheet::attach`]; the element is detached when
/// the guard is dropped, whatever path leaves the probing scope.
pub struct ProbeSheet<'h, H: StyleSystem + ?Sized> {
    host: &'h mut H,
}

impl<'h, H: StyleSystem + ?Sized> ProbeSheet<'h, H> {
    pub fn attach(host: &'h mut H) -> Result<Self, HostError> {
        host.attach_probe_sheet()?;
        Ok(Self { host })
    }

    /// Whether `head{}` parses into at least one rule. Host errors count as
    /// unsupported.
    pub fn supports(&mut self, head: &str) -> bool {
        match self.host.probe_rule(&format!("{head}{{}}")) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(rule = head, error = %e, "rule probe failed");
                false
            }
        }
    }
}

impl<H: StyleSystem + ?Sized> Drop for ProbeSheet<'_, H> {
    fn drop(&mut self) {
        self.host.detach_probe_sheet();
    }
}
