//! Legacy gradient angles.
//!
//! Prefixed `linear-gradient` implementations measure the angle from the
//! starting edge, counter-clockwise from east; the standard syntax measures
//! the direction of travel clockwise from north. `A` becomes `90 - A`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static LINEAR_GRADIENT_ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\s|:|,)(repeating-)?linear-gradient\(\s*(-?\d*\.?\d*)deg").unwrap()
});

/// Convert the angle of every unprefixed `linear-gradient(<A>deg`, and of
/// `repeating-linear-gradient(<A>deg` when `repeating` is set. A missing
/// angle counts as zero.
pub(crate) fn correct_angles(css: &str, repeating: bool) -> Cow<'_, str> {
    LINEAR_GRADIENT_ANGLE_RE.replace_all(css, |caps: &Captures| {
        if caps.get(2).is_some() && !repeating {
            return caps[0].to_string();
        }
        let angle = caps[3].parse::<f64>().unwrap_or(0.0);
        format!(
            "{}{}linear-gradient({}deg",
            &caps[1],
            caps.get(2).map_or("", |m| m.as_str()),
            90.0 - angle
        )
    })
}
