//! Rewriter validation (value-accepting property list).

use crate::schema::PrefixFreeConfig;

use super::helpers::validate_identifier;

pub(crate) fn validate_rewrite(errors: &mut Vec<String>, config: &PrefixFreeConfig) {
    let properties = &config.rewrite.value_properties;

    for (i, property) in properties.iter().enumerate() {
        validate_identifier(errors, &format!("rewrite.value_properties[{i}]"), property);
        if properties[..i].contains(property) {
            errors.push(format!(
                "rewrite.value_properties lists {property:?} more than once"
            ));
        }
    }
}
