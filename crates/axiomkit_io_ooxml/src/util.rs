//! Stateless helper utilities shared by element attribute sets.

use std::collections::BTreeMap;

use crate::spec::{AttributeConfigError, EnumAttributeValue, EnumValidationRule, ValidationError};

////////////////////////////////////////////////////////////////////////////////
// #region NameTransformation

/// Convert a word-separated attribute name to OOXML camel case.
///
/// `fit_to_width` becomes `fitToWidth`; a name without `_` is returned unchanged.
pub fn camelize_attribute_name(name: &str) -> String {
    let mut c_name = String::with_capacity(name.len());
    let mut if_upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            if_upper_next = true;
            continue;
        }
        if if_upper_next {
            c_name.extend(ch.to_uppercase());
            if_upper_next = false;
        } else {
            c_name.push(ch);
        }
    }
    c_name
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ConfigurationParsing

/// Parse a JSON object into an attribute configuration map.
pub fn derive_attribute_config_from_json(
    text: &str,
) -> Result<BTreeMap<String, EnumAttributeValue>, AttributeConfigError> {
    match serde_json::from_str::<EnumAttributeValue>(text)? {
        EnumAttributeValue::Map(dict_config) => Ok(dict_config),
        _ => Err(AttributeConfigError::NotAMap("<root>".to_string())),
    }
}

/// Read an integral configuration value for `attribute`.
pub fn extract_integer(
    attribute: &str,
    rule: EnumValidationRule,
    value: &EnumAttributeValue,
) -> Result<i64, ValidationError> {
    match value {
        EnumAttributeValue::Integer(v) => Ok(*v),
        other => Err(derive_kind_mismatch(attribute, rule, "an integer", other)),
    }
}

/// Read a numeric configuration value for `attribute`, widening integers.
pub fn extract_number(
    attribute: &str,
    rule: EnumValidationRule,
    value: &EnumAttributeValue,
) -> Result<f64, ValidationError> {
    match value {
        EnumAttributeValue::Integer(v) => Ok(*v as f64),
        EnumAttributeValue::Float(v) => Ok(*v),
        other => Err(derive_kind_mismatch(attribute, rule, "a number", other)),
    }
}

/// Read a text configuration value for `attribute`.
pub fn extract_str<'a>(
    attribute: &str,
    rule: EnumValidationRule,
    value: &'a EnumAttributeValue,
) -> Result<&'a str, ValidationError> {
    match value {
        EnumAttributeValue::String(v) => Ok(v),
        other => Err(derive_kind_mismatch(attribute, rule, "a string", other)),
    }
}

/// Read a nested map configuration value for `attribute`.
pub fn extract_map<'a>(
    attribute: &str,
    rule: EnumValidationRule,
    value: &'a EnumAttributeValue,
) -> Result<&'a BTreeMap<String, EnumAttributeValue>, ValidationError> {
    match value {
        EnumAttributeValue::Map(v) => Ok(v),
        other => Err(derive_kind_mismatch(attribute, rule, "a map", other)),
    }
}

fn derive_kind_mismatch(
    attribute: &str,
    rule: EnumValidationRule,
    c_expected: &str,
    value: &EnumAttributeValue,
) -> ValidationError {
    ValidationError::new(
        attribute,
        rule,
        format!("expected {c_expected}, got {} {value}", value.kind()),
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_attribute_name() {
        assert_eq!(camelize_attribute_name("fit_to_width"), "fitToWidth");
        assert_eq!(camelize_attribute_name("paper_height"), "paperHeight");
        assert_eq!(camelize_attribute_name("scale"), "scale");
        assert_eq!(camelize_attribute_name("horizontal_centered"), "horizontalCentered");
        assert_eq!(camelize_attribute_name(""), "");
    }

    #[test]
    fn test_camelize_collapses_repeated_and_trailing_separators() {
        assert_eq!(camelize_attribute_name("grid__lines"), "gridLines");
        assert_eq!(camelize_attribute_name("footer_"), "footer");
    }

    #[test]
    fn test_derive_attribute_config_from_json() {
        let dict_config =
            derive_attribute_config_from_json(r#"{"orientation": "landscape", "scale": 75}"#)
                .expect("parse config");
        assert_eq!(dict_config.len(), 2);
        assert_eq!(dict_config["scale"], EnumAttributeValue::Integer(75));
    }

    #[test]
    fn test_derive_attribute_config_from_json_rejects_non_map_and_garbage() {
        assert!(matches!(
            derive_attribute_config_from_json("\"landscape\""),
            Err(AttributeConfigError::NotAMap(_))
        ));
        assert!(matches!(
            derive_attribute_config_from_json("{\"scale\": "),
            Err(AttributeConfigError::Json(_))
        ));
    }

    #[test]
    fn test_extract_integer_reports_kind_mismatch() {
        let err = extract_integer(
            "scale",
            EnumValidationRule::Scale10To400,
            &EnumAttributeValue::from("75"),
        )
        .expect_err("string is not an integer");
        assert_eq!(err.attribute, "scale");
        assert_eq!(err.rule, EnumValidationRule::Scale10To400);
        assert!(err.detail.contains("got string"));
    }
}
