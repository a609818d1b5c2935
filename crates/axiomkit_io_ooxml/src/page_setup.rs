//! `pageSetup` worksheet element.

use std::borrow::Borrow;

use crate::attr::{ElementAttributes, apply_attribute_config};
use crate::conf::{
    C_TAG_PAGE_SETUP, N_FIT_TO_PAGES_UNCONSTRAINED, derive_default_attribute_validator,
};
use crate::spec::{
    EnumAttributeValue, EnumPageOrientation, EnumValidationRule, SpecAssignReport,
    ValidationError,
};
use crate::util::{extract_integer, extract_map, extract_str};
use crate::validate::{AttributeValidator, DefaultAttributeValidator};

/// Page setup print properties of a worksheet.
///
/// Every attribute starts unset. Setters validate through the injected
/// [`AttributeValidator`] and leave the attribute untouched on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSetup<V = DefaultAttributeValidator> {
    fit_to_height: Option<u32>,
    fit_to_width: Option<u32>,
    orientation: Option<EnumPageOrientation>,
    paper_height: Option<String>,
    paper_width: Option<String>,
    scale: Option<u16>,
    validator: V,
}

impl PageSetup {
    /// Create a page setup with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page setup populated from a configuration map.
    pub fn from_config<I, K, T>(config: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        Self::from_config_with_validator(derive_default_attribute_validator(), config)
    }
}

impl<V: AttributeValidator> PageSetup<V> {
    /// Create an empty page setup validating through `validator`.
    pub fn with_validator(validator: V) -> Self {
        Self {
            fit_to_height: None,
            fit_to_width: None,
            orientation: None,
            paper_height: None,
            paper_width: None,
            scale: None,
            validator,
        }
    }

    /// Create a page setup validating through `validator`, populated from `config`.
    pub fn from_config_with_validator<I, K, T>(
        validator: V,
        config: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        let mut page_setup = Self::with_validator(validator);
        page_setup.set(config)?;
        Ok(page_setup)
    }

    /// Apply several attributes from a configuration map.
    ///
    /// Unknown keys are ignored. `fit_to` is accepted as a coupling alias whose
    /// value is a map with optional `width` and `height` entries.
    pub fn set<I, K, T>(&mut self, config: I) -> Result<SpecAssignReport, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        apply_attribute_config(self, config)
    }

    /// Validator used by the setters.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn fit_to_height(&self) -> Option<u32> {
        self.fit_to_height
    }

    pub fn fit_to_width(&self) -> Option<u32> {
        self.fit_to_width
    }

    pub fn orientation(&self) -> Option<EnumPageOrientation> {
        self.orientation
    }

    pub fn paper_height(&self) -> Option<&str> {
        self.paper_height.as_deref()
    }

    pub fn paper_width(&self) -> Option<&str> {
        self.paper_width.as_deref()
    }

    pub fn scale(&self) -> Option<u16> {
        self.scale
    }

    /// Number of pages the printout may span vertically.
    pub fn set_fit_to_height(&mut self, value: i64) -> Result<(), ValidationError> {
        self.fit_to_height = Some(derive_unsigned_int(&self.validator, "fit_to_height", value)?);
        Ok(())
    }

    /// Number of pages the printout may span horizontally.
    pub fn set_fit_to_width(&mut self, value: i64) -> Result<(), ValidationError> {
        self.fit_to_width = Some(derive_unsigned_int(&self.validator, "fit_to_width", value)?);
        Ok(())
    }

    /// Accepts `"default"`, `"landscape"`, `"portrait"` or an [`EnumPageOrientation`].
    pub fn set_orientation(&mut self, value: impl AsRef<str>) -> Result<(), ValidationError> {
        let c_value = value.as_ref();
        self.validator
            .validate_page_orientation(c_value)
            .map_err(|detail| {
                ValidationError::new("orientation", EnumValidationRule::PageOrientation, detail)
            })?;
        let orientation = c_value.parse::<EnumPageOrientation>().map_err(|detail| {
            ValidationError::new("orientation", EnumValidationRule::PageOrientation, detail)
        })?;
        self.orientation = Some(orientation);
        Ok(())
    }

    /// Custom paper height, e.g. `"297mm"`.
    pub fn set_paper_height(&mut self, value: &str) -> Result<(), ValidationError> {
        self.paper_height = Some(derive_number_with_unit(
            &self.validator,
            "paper_height",
            value,
        )?);
        Ok(())
    }

    /// Custom paper width, e.g. `"210mm"`.
    pub fn set_paper_width(&mut self, value: &str) -> Result<(), ValidationError> {
        self.paper_width = Some(derive_number_with_unit(
            &self.validator,
            "paper_width",
            value,
        )?);
        Ok(())
    }

    /// Print scale percentage.
    pub fn set_scale(&mut self, value: i64) -> Result<(), ValidationError> {
        self.validator
            .validate_scale_10_400(value)
            .map_err(|detail| {
                ValidationError::new("scale", EnumValidationRule::Scale10To400, detail)
            })?;
        let n_scale = u16::try_from(value).map_err(|_| {
            ValidationError::new(
                "scale",
                EnumValidationRule::Scale10To400,
                format!("{value} is out of range for a scale percentage."),
            )
        })?;
        self.scale = Some(n_scale);
        Ok(())
    }

    /// Set both page-fitting axes at once.
    ///
    /// Spreadsheet applications default a missing counterpart to `1`, which
    /// pins the other axis to a single page. An omitted argument is therefore
    /// written as [`N_FIT_TO_PAGES_UNCONSTRAINED`]. Both values are validated
    /// before either attribute changes. Returns `(width, height)`.
    pub fn fit_to(
        &mut self,
        width: Option<i64>,
        height: Option<i64>,
    ) -> Result<(u32, u32), ValidationError> {
        if width.is_none() || height.is_none() {
            tracing::debug!(
                ?width,
                ?height,
                default = N_FIT_TO_PAGES_UNCONSTRAINED,
                "defaulting omitted fit_to axis"
            );
        }
        let n_default = i64::from(N_FIT_TO_PAGES_UNCONSTRAINED);
        let n_width = derive_unsigned_int(
            &self.validator,
            "fit_to_width",
            width.unwrap_or(n_default),
        )?;
        let n_height = derive_unsigned_int(
            &self.validator,
            "fit_to_height",
            height.unwrap_or(n_default),
        )?;
        self.fit_to_width = Some(n_width);
        self.fit_to_height = Some(n_height);
        Ok((n_width, n_height))
    }

    /// Whether at least one page-fitting axis is set.
    pub fn is_fit_to_page(&self) -> bool {
        self.fit_to_width.is_some() || self.fit_to_height.is_some()
    }

    /// Reset one attribute to unset. Returns `false` for unknown names.
    pub fn clear(&mut self, name: &str) -> bool {
        self.clear_attribute(name)
    }

    fn assign_fit_to(&mut self, value: &EnumAttributeValue) -> Result<(), ValidationError> {
        let dict_fit_to = extract_map("fit_to", EnumValidationRule::UnsignedInt, value)?;
        let mut n_width = None;
        let mut n_height = None;
        for (c_key, value_axis) in dict_fit_to {
            match c_key.as_str() {
                "width" => {
                    n_width = Some(extract_integer(
                        "fit_to_width",
                        EnumValidationRule::UnsignedInt,
                        value_axis,
                    )?)
                }
                "height" => {
                    n_height = Some(extract_integer(
                        "fit_to_height",
                        EnumValidationRule::UnsignedInt,
                        value_axis,
                    )?)
                }
                _ => tracing::debug!(key = c_key.as_str(), "ignoring unknown fit_to key"),
            }
        }
        self.fit_to(n_width, n_height)?;
        Ok(())
    }
}

impl<V: AttributeValidator> ElementAttributes for PageSetup<V> {
    const TAG_NAME: &'static str = C_TAG_PAGE_SETUP;
    const ATTRIBUTE_NAMES: &'static [&'static str] = &[
        "fit_to_height",
        "fit_to_width",
        "orientation",
        "paper_height",
        "paper_width",
        "scale",
    ];

    fn render_attribute(&self, name: &str) -> Option<String> {
        match name {
            "fit_to_height" => self.fit_to_height.map(|v| v.to_string()),
            "fit_to_width" => self.fit_to_width.map(|v| v.to_string()),
            "orientation" => self.orientation.map(|v| v.as_str().to_string()),
            "paper_height" => self.paper_height.clone(),
            "paper_width" => self.paper_width.clone(),
            "scale" => self.scale.map(|v| v.to_string()),
            _ => None,
        }
    }

    fn assign_attribute(
        &mut self,
        name: &str,
        value: &EnumAttributeValue,
    ) -> Result<bool, ValidationError> {
        match name {
            "fit_to_height" => self.set_fit_to_height(extract_integer(
                name,
                EnumValidationRule::UnsignedInt,
                value,
            )?)?,
            "fit_to_width" => self.set_fit_to_width(extract_integer(
                name,
                EnumValidationRule::UnsignedInt,
                value,
            )?)?,
            "orientation" => self.set_orientation(extract_str(
                name,
                EnumValidationRule::PageOrientation,
                value,
            )?)?,
            "paper_height" => self.set_paper_height(extract_str(
                name,
                EnumValidationRule::NumberWithUnit,
                value,
            )?)?,
            "paper_width" => self.set_paper_width(extract_str(
                name,
                EnumValidationRule::NumberWithUnit,
                value,
            )?)?,
            "scale" => self.set_scale(extract_integer(
                name,
                EnumValidationRule::Scale10To400,
                value,
            )?)?,
            "fit_to" => self.assign_fit_to(value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn clear_attribute(&mut self, name: &str) -> bool {
        match name {
            "fit_to_height" => self.fit_to_height = None,
            "fit_to_width" => self.fit_to_width = None,
            "orientation" => self.orientation = None,
            "paper_height" => self.paper_height = None,
            "paper_width" => self.paper_width = None,
            "scale" => self.scale = None,
            _ => return false,
        }
        true
    }
}

fn derive_unsigned_int<V: AttributeValidator>(
    validator: &V,
    attribute: &str,
    value: i64,
) -> Result<u32, ValidationError> {
    validator
        .validate_unsigned_int(value)
        .map_err(|detail| ValidationError::new(attribute, EnumValidationRule::UnsignedInt, detail))?;
    u32::try_from(value).map_err(|_| {
        ValidationError::new(
            attribute,
            EnumValidationRule::UnsignedInt,
            format!("{value} is out of range for an unsigned int."),
        )
    })
}

fn derive_number_with_unit<V: AttributeValidator>(
    validator: &V,
    attribute: &str,
    value: &str,
) -> Result<String, ValidationError> {
    validator
        .validate_number_with_unit(value)
        .map_err(|detail| {
            ValidationError::new(attribute, EnumValidationRule::NumberWithUnit, detail)
        })?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::ser::serialize_element;

    fn derive_config(value: serde_json::Value) -> BTreeMap<String, EnumAttributeValue> {
        serde_json::from_value(value).expect("config map")
    }

    #[test]
    fn test_new_page_setup_is_empty() {
        let page_setup = PageSetup::new();
        assert_eq!(page_setup.fit_to_width(), None);
        assert_eq!(page_setup.scale(), None);
        assert!(!page_setup.is_fit_to_page());
        assert_eq!(serialize_element(&page_setup), "<pageSetup />");
    }

    #[test]
    fn test_from_config_ignores_unknown_keys() {
        let page_setup = PageSetup::from_config(vec![
            ("orientation", EnumAttributeValue::from("landscape")),
            ("scale", EnumAttributeValue::Integer(75)),
            ("bogus_key", EnumAttributeValue::Integer(1)),
        ])
        .expect("valid config");

        assert_eq!(page_setup.orientation(), Some(EnumPageOrientation::Landscape));
        assert_eq!(page_setup.scale(), Some(75));
        assert_eq!(
            serialize_element(&page_setup),
            "<pageSetup orientation=\"landscape\" scale=\"75\" />"
        );
    }

    #[test]
    fn test_set_reports_applied_and_ignored_keys() {
        let mut page_setup = PageSetup::new();
        let dict_config = derive_config(json!({
            "bogus_key": 1,
            "fit_to_width": 2,
            "paper_width": "210mm",
        }));

        let report = page_setup.set(&dict_config).expect("valid config");
        assert_eq!(report.applied, vec!["fit_to_width", "paper_width"]);
        assert_eq!(report.ignored, vec!["bogus_key"]);
        assert_eq!(page_setup.paper_width(), Some("210mm"));
    }

    #[test]
    fn test_every_attribute_serializes_with_camel_case_in_declaration_order() {
        let mut page_setup = PageSetup::new();
        page_setup.set_scale(400).expect("scale");
        page_setup.set_paper_width("210mm").expect("paper_width");
        page_setup.set_paper_height("297mm").expect("paper_height");
        page_setup
            .set_orientation(EnumPageOrientation::Portrait)
            .expect("orientation");
        page_setup.set_fit_to_width(1).expect("fit_to_width");
        page_setup.set_fit_to_height(0).expect("fit_to_height");

        assert_eq!(
            serialize_element(&page_setup),
            "<pageSetup fitToHeight=\"0\" fitToWidth=\"1\" orientation=\"portrait\" \
             paperHeight=\"297mm\" paperWidth=\"210mm\" scale=\"400\" />"
        );
    }

    #[test]
    fn test_invalid_values_leave_prior_state() {
        let mut page_setup = PageSetup::new();
        page_setup.set_scale(75).expect("scale");
        let c_before = serialize_element(&page_setup);

        let err = page_setup.set_scale(401).expect_err("401 is out of range");
        assert_eq!(err.attribute, "scale");
        assert_eq!(err.rule, EnumValidationRule::Scale10To400);
        assert!(page_setup.set_scale(9).is_err());
        assert_eq!(page_setup.scale(), Some(75));

        let err = page_setup.set_fit_to_width(-1).expect_err("negative");
        assert_eq!(err.rule, EnumValidationRule::UnsignedInt);
        assert_eq!(page_setup.fit_to_width(), None);

        let err = page_setup.set_orientation("upside_down").expect_err("unknown");
        assert_eq!(err.rule, EnumValidationRule::PageOrientation);
        assert_eq!(page_setup.orientation(), None);

        let err = page_setup.set_paper_height("297").expect_err("no unit");
        assert_eq!(err.attribute, "paper_height");
        assert_eq!(err.rule, EnumValidationRule::NumberWithUnit);
        assert_eq!(page_setup.paper_height(), None);

        assert_eq!(serialize_element(&page_setup), c_before);
    }

    #[test]
    fn test_scale_boundaries() {
        let mut page_setup = PageSetup::new();
        assert!(page_setup.set_scale(10).is_ok());
        assert!(page_setup.set_scale(400).is_ok());
        assert!(page_setup.set_scale(9).is_err());
        assert!(page_setup.set_scale(401).is_err());
        assert_eq!(page_setup.scale(), Some(400));
    }

    #[test]
    fn test_config_kind_mismatch_is_validation_error() {
        let mut page_setup = PageSetup::new();
        let err = page_setup
            .set(derive_config(json!({"fit_to_width": 2.5})))
            .expect_err("float is not an unsigned int");
        assert_eq!(err.attribute, "fit_to_width");
        assert_eq!(err.rule, EnumValidationRule::UnsignedInt);

        let err = page_setup
            .set(derive_config(json!({"orientation": 1})))
            .expect_err("integer is not an orientation");
        assert_eq!(err.rule, EnumValidationRule::PageOrientation);
        assert!(!page_setup.has_attributes());
    }

    #[test]
    fn test_set_failure_keeps_previously_applied_keys() {
        let mut page_setup = PageSetup::new();
        let err = page_setup
            .set(vec![
                ("scale", EnumAttributeValue::Integer(50)),
                ("fit_to_height", EnumAttributeValue::Integer(-3)),
                ("orientation", EnumAttributeValue::from("landscape")),
            ])
            .expect_err("negative fit_to_height");

        assert_eq!(err.attribute, "fit_to_height");
        assert_eq!(page_setup.scale(), Some(50));
        assert_eq!(page_setup.fit_to_height(), None);
        assert_eq!(page_setup.orientation(), None);
    }

    #[test]
    fn test_fit_to_defaults_both_axes() {
        let mut page_setup = PageSetup::new();
        page_setup.set_fit_to_width(3).expect("fit_to_width");
        page_setup.set_fit_to_height(4).expect("fit_to_height");

        assert_eq!(page_setup.fit_to(None, None), Ok((9999, 9999)));
        assert_eq!(page_setup.fit_to_width(), Some(9999));
        assert_eq!(page_setup.fit_to_height(), Some(9999));
    }

    #[test]
    fn test_fit_to_defaults_only_omitted_counterpart() {
        let mut page_setup = PageSetup::new();
        assert_eq!(page_setup.fit_to(Some(2), None), Ok((2, 9999)));
        assert_eq!(page_setup.fit_to_width(), Some(2));
        assert_eq!(page_setup.fit_to_height(), Some(9999));

        assert_eq!(page_setup.fit_to(None, Some(5)), Ok((9999, 5)));
        assert_eq!(
            serialize_element(&page_setup),
            "<pageSetup fitToHeight=\"5\" fitToWidth=\"9999\" />"
        );
    }

    #[test]
    fn test_fit_to_rejection_changes_neither_axis() {
        let mut page_setup = PageSetup::new();
        page_setup.fit_to(Some(1), Some(1)).expect("fit_to");

        let err = page_setup
            .fit_to(Some(2), Some(-1))
            .expect_err("negative height");
        assert_eq!(err.attribute, "fit_to_height");
        assert_eq!(page_setup.fit_to_width(), Some(1));
        assert_eq!(page_setup.fit_to_height(), Some(1));
    }

    #[test]
    fn test_fit_to_config_alias() {
        let page_setup =
            PageSetup::from_config(derive_config(json!({"fit_to": {"width": 2}}))).expect("alias");
        assert_eq!(page_setup.fit_to_width(), Some(2));
        assert_eq!(page_setup.fit_to_height(), Some(9999));

        let err = PageSetup::from_config(derive_config(json!({"fit_to": 2})))
            .expect_err("alias needs a map");
        assert_eq!(err.attribute, "fit_to");
    }

    #[test]
    fn test_is_fit_to_page_tracks_either_axis() {
        let mut page_setup = PageSetup::new();
        assert!(!page_setup.is_fit_to_page());

        page_setup.set_fit_to_height(1).expect("fit_to_height");
        assert!(page_setup.is_fit_to_page());

        assert!(page_setup.clear("fit_to_height"));
        assert!(!page_setup.is_fit_to_page());

        page_setup.set_fit_to_width(1).expect("fit_to_width");
        assert!(page_setup.is_fit_to_page());
        assert!(!page_setup.clear("fit_to"));
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut page_setup = PageSetup::new();
        page_setup.fit_to(Some(1), None).expect("fit_to");
        page_setup.set_orientation("landscape").expect("orientation");

        let c_first = serialize_element(&page_setup);
        let c_second = serialize_element(&page_setup);
        assert_eq!(c_first, c_second);
        assert_eq!(page_setup.fit_to_width(), Some(1));
    }

    /// Validator accepting any scale, to show the rules are injected.
    #[derive(Debug, Default)]
    struct SpecLenientScaleValidator;

    impl AttributeValidator for SpecLenientScaleValidator {
        fn validate_unsigned_int(&self, value: i64) -> Result<(), String> {
            DefaultAttributeValidator.validate_unsigned_int(value)
        }

        fn validate_page_orientation(&self, value: &str) -> Result<(), String> {
            DefaultAttributeValidator.validate_page_orientation(value)
        }

        fn validate_number_with_unit(&self, value: &str) -> Result<(), String> {
            DefaultAttributeValidator.validate_number_with_unit(value)
        }

        fn validate_scale_10_400(&self, _value: i64) -> Result<(), String> {
            Ok(())
        }

        fn validate_boolean(&self, value: &EnumAttributeValue) -> Result<bool, String> {
            DefaultAttributeValidator.validate_boolean(value)
        }

        fn validate_unsigned_numeric(&self, value: f64) -> Result<(), String> {
            DefaultAttributeValidator.validate_unsigned_numeric(value)
        }
    }

    #[test]
    fn test_injected_validator_replaces_rule() {
        let mut page_setup = PageSetup::with_validator(SpecLenientScaleValidator);
        page_setup.set_scale(5).expect("lenient scale");
        assert_eq!(page_setup.scale(), Some(5));

        // The storage type still bounds what a lenient rule can let through.
        let err = page_setup.set_scale(100_000).expect_err("exceeds u16");
        assert_eq!(err.rule, EnumValidationRule::Scale10To400);
        assert_eq!(serialize_element(&page_setup), "<pageSetup scale=\"5\" />");
    }
}
