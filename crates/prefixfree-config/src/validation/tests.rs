//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = PrefixFreeConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_uppercase_value_property() {
    let mut config = PrefixFreeConfig::default();
    config.rewrite.value_properties = vec!["Transition".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rewrite.value_properties[0]"));
}

#[test]
fn catches_empty_value_property() {
    let mut config = PrefixFreeConfig::default();
    config.rewrite.value_properties.push(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rewrite.value_properties[3]"));
}

#[test]
fn catches_duplicate_value_property() {
    let mut config = PrefixFreeConfig::default();
    config.rewrite.value_properties.push("will-change".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("more than once"));
}

#[test]
fn empty_value_properties_is_allowed() {
    let mut config = PrefixFreeConfig::default();
    config.rewrite.value_properties.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_extra_keyword() {
    let mut config = PrefixFreeConfig::default();
    config
        .probe
        .extra_keywords
        .insert("-webkit-stretch".into(), "width".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("probe.extra_keywords key"));
}

#[test]
fn catches_bad_extra_keyword_property() {
    let mut config = PrefixFreeConfig::default();
    config
        .probe
        .extra_keywords
        .insert("stretch".into(), "Width".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("probe.extra_keywords.stretch"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PrefixFreeConfig::default();
    config.rewrite.value_properties = vec!["A".into()];
    config.probe.extra_keywords.insert("ok".into(), "".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rewrite.value_properties[0]"));
    assert!(err.contains("probe.extra_keywords.ok"));
    assert!(err.contains("; "));
}
