//! Probe validation (extra keyword candidates).

use crate::schema::PrefixFreeConfig;

use super::helpers::validate_identifier;

pub(crate) fn validate_probe(errors: &mut Vec<String>, config: &PrefixFreeConfig) {
    for (keyword, property) in &config.probe.extra_keywords {
        validate_identifier(errors, "probe.extra_keywords key", keyword);
        validate_identifier(
            errors,
            &format!("probe.extra_keywords.{keyword}"),
            property,
        );
    }
}
