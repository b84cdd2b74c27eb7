//! Capability prober: discovers the dominant vendor prefix of a host style
//! system and the CSS features that only work with it.
//!
//! The host is reached exclusively through the [`StyleSystem`] trait. A
//! declarative [`HostProfile`] implements it for tests and tooling.

mod discovery;
pub mod host;
pub mod profile;
mod prober;
mod selectors;
pub mod tables;
mod values;


pub use host::{ComputedStyle, ProbeSheet, StyleSystem};
pub use profile::{Enumeration, HostProfile, ProfileHost, RuleSupport};
pub use prober::Prober;
