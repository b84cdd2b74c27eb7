//! Conversions between hyphenated CSS property names and the camel-cased
//! keys style objects expose.

/// Convert a hyphenated name to its camel-cased style key.
///
/// Every `-x` pair (lowercase `x`) becomes `X`, then the first remaining
/// hyphen is dropped: `-webkit-transform` → `WebkitTransform`,
/// `-ms-` → `Ms`, `border-top-left-radius` → `borderTopLeftRadius`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(next) = chars.peek().copied().filter(|c| c.is_ascii_lowercase()) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(ch);
    }

    match out.find('-') {
        Some(idx) => {
            out.remove(idx);
            out
        }
        None => out,
    }
}

/// Convert a camel-cased style key back to a hyphenated name.
///
/// Each uppercase letter becomes `-` followed by its lowercase form, so a
/// vendor key with a capital initial (`WebkitTransform`) gains the leading
/// hyphen marker (`-webkit-transform`) while a lowercase one
/// (`webkitTransform`) does not.
pub fn de_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
