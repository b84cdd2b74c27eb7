//! Text rewriter: inserts a vendor prefix into CSS text, property names,
//! values and selectors according to probed [`Capabilities`].
//!
//! Rewriting is pattern based. No CSS is parsed or validated; malformed input
//! is rewritten best-effort.
//!
//! [`Capabilities`]: prefixfree_common::Capabilities

mod gradient;
mod pass;
pub mod rules;
mod rewriter;


pub use rewriter::Rewriter;
