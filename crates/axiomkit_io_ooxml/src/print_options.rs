//! `printOptions` worksheet element.

use std::borrow::Borrow;

use crate::attr::{ElementAttributes, apply_attribute_config};
use crate::conf::C_TAG_PRINT_OPTIONS;
use crate::spec::{EnumAttributeValue, EnumValidationRule, SpecAssignReport, ValidationError};
use crate::validate::{AttributeValidator, DefaultAttributeValidator};

/// Gridline, heading and centering flags for printing a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrintOptions<V = DefaultAttributeValidator> {
    grid_lines: Option<bool>,
    headings: Option<bool>,
    horizontal_centered: Option<bool>,
    vertical_centered: Option<bool>,
    validator: V,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create print options populated from a configuration map.
    pub fn from_config<I, K, T>(config: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        let mut print_options = Self::new();
        print_options.set(config)?;
        Ok(print_options)
    }
}

impl<V: AttributeValidator> PrintOptions<V> {
    pub fn with_validator(validator: V) -> Self {
        Self {
            grid_lines: None,
            headings: None,
            horizontal_centered: None,
            vertical_centered: None,
            validator,
        }
    }

    /// Apply several attributes from a configuration map; unknown keys are ignored.
    pub fn set<I, K, T>(&mut self, config: I) -> Result<SpecAssignReport, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        apply_attribute_config(self, config)
    }

    pub fn grid_lines(&self) -> Option<bool> {
        self.grid_lines
    }

    pub fn headings(&self) -> Option<bool> {
        self.headings
    }

    pub fn horizontal_centered(&self) -> Option<bool> {
        self.horizontal_centered
    }

    pub fn vertical_centered(&self) -> Option<bool> {
        self.vertical_centered
    }

    /// Print cell gridlines.
    pub fn set_grid_lines(&mut self, value: bool) -> Result<(), ValidationError> {
        self.grid_lines = Some(self.derive_boolean("grid_lines", &value.into())?);
        Ok(())
    }

    /// Print row and column headings.
    pub fn set_headings(&mut self, value: bool) -> Result<(), ValidationError> {
        self.headings = Some(self.derive_boolean("headings", &value.into())?);
        Ok(())
    }

    /// Center the printout horizontally on the page.
    pub fn set_horizontal_centered(&mut self, value: bool) -> Result<(), ValidationError> {
        self.horizontal_centered =
            Some(self.derive_boolean("horizontal_centered", &value.into())?);
        Ok(())
    }

    /// Center the printout vertically on the page.
    pub fn set_vertical_centered(&mut self, value: bool) -> Result<(), ValidationError> {
        self.vertical_centered = Some(self.derive_boolean("vertical_centered", &value.into())?);
        Ok(())
    }

    fn derive_boolean(
        &self,
        attribute: &str,
        value: &EnumAttributeValue,
    ) -> Result<bool, ValidationError> {
        self.validator
            .validate_boolean(value)
            .map_err(|detail| ValidationError::new(attribute, EnumValidationRule::Boolean, detail))
    }
}

impl<V: AttributeValidator> ElementAttributes for PrintOptions<V> {
    const TAG_NAME: &'static str = C_TAG_PRINT_OPTIONS;
    const ATTRIBUTE_NAMES: &'static [&'static str] = &[
        "grid_lines",
        "headings",
        "horizontal_centered",
        "vertical_centered",
    ];

    fn render_attribute(&self, name: &str) -> Option<String> {
        let value = match name {
            "grid_lines" => self.grid_lines,
            "headings" => self.headings,
            "horizontal_centered" => self.horizontal_centered,
            "vertical_centered" => self.vertical_centered,
            _ => None,
        };
        value.map(|v| v.to_string())
    }

    fn assign_attribute(
        &mut self,
        name: &str,
        value: &EnumAttributeValue,
    ) -> Result<bool, ValidationError> {
        match name {
            "grid_lines" => self.grid_lines = Some(self.derive_boolean(name, value)?),
            "headings" => self.headings = Some(self.derive_boolean(name, value)?),
            "horizontal_centered" => {
                self.horizontal_centered = Some(self.derive_boolean(name, value)?)
            }
            "vertical_centered" => {
                self.vertical_centered = Some(self.derive_boolean(name, value)?)
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn clear_attribute(&mut self, name: &str) -> bool {
        match name {
            "grid_lines" => self.grid_lines = None,
            "headings" => self.headings = None,
            "horizontal_centered" => self.horizontal_centered = None,
            "vertical_centered" => self.vertical_centered = None,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ser::serialize_element;

    #[test]
    fn test_print_options_serialize_present_flags_only() {
        let mut print_options = PrintOptions::new();
        assert_eq!(serialize_element(&print_options), "<printOptions />");

        print_options.set_grid_lines(true).expect("grid_lines");
        print_options.set_vertical_centered(false).expect("vertical_centered");
        assert_eq!(
            serialize_element(&print_options),
            "<printOptions gridLines=\"true\" verticalCentered=\"false\" />"
        );
    }

    #[test]
    fn test_print_options_config_accepts_boolean_like_values() {
        let print_options = PrintOptions::from_config(vec![
            ("headings", EnumAttributeValue::Integer(1)),
            ("horizontal_centered", EnumAttributeValue::from("false")),
            ("page_order", EnumAttributeValue::from("overThenDown")),
        ])
        .expect("valid config");

        assert_eq!(print_options.headings(), Some(true));
        assert_eq!(print_options.horizontal_centered(), Some(false));
        assert_eq!(print_options.grid_lines(), None);
    }

    #[test]
    fn test_print_options_rejects_non_boolean() {
        let mut print_options = PrintOptions::new();
        print_options.set_grid_lines(false).expect("grid_lines");

        let err = print_options
            .set(vec![("grid_lines", EnumAttributeValue::Integer(2))])
            .expect_err("2 is not boolean-like");
        assert_eq!(err.attribute, "grid_lines");
        assert_eq!(err.rule, EnumValidationRule::Boolean);
        assert_eq!(print_options.grid_lines(), Some(false));
    }
}
