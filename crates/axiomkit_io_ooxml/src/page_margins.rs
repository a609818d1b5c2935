//! `pageMargins` worksheet element (inches).

use std::borrow::Borrow;

use crate::attr::{ElementAttributes, apply_attribute_config};
use crate::conf::C_TAG_PAGE_MARGINS;
use crate::spec::{EnumAttributeValue, EnumValidationRule, SpecAssignReport, ValidationError};
use crate::util::extract_number;
use crate::validate::{AttributeValidator, DefaultAttributeValidator};

/// Page and header/footer margins of a printed worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageMargins<V = DefaultAttributeValidator> {
    left: Option<f64>,
    right: Option<f64>,
    top: Option<f64>,
    bottom: Option<f64>,
    header: Option<f64>,
    footer: Option<f64>,
    validator: V,
}

impl PageMargins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create page margins populated from a configuration map.
    pub fn from_config<I, K, T>(config: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        let mut page_margins = Self::new();
        page_margins.set(config)?;
        Ok(page_margins)
    }

    /// Build fully-set margins from known-valid constants.
    pub(crate) fn from_values(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        header: f64,
        footer: f64,
    ) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            top: Some(top),
            bottom: Some(bottom),
            header: Some(header),
            footer: Some(footer),
            validator: DefaultAttributeValidator,
        }
    }
}

impl<V: AttributeValidator> PageMargins<V> {
    pub fn with_validator(validator: V) -> Self {
        Self {
            left: None,
            right: None,
            top: None,
            bottom: None,
            header: None,
            footer: None,
            validator,
        }
    }

    /// Apply several margins from a configuration map; unknown keys are ignored.
    pub fn set<I, K, T>(&mut self, config: I) -> Result<SpecAssignReport, ValidationError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: Borrow<EnumAttributeValue>,
    {
        apply_attribute_config(self, config)
    }

    pub fn left(&self) -> Option<f64> {
        self.left
    }

    pub fn right(&self) -> Option<f64> {
        self.right
    }

    pub fn top(&self) -> Option<f64> {
        self.top
    }

    pub fn bottom(&self) -> Option<f64> {
        self.bottom
    }

    pub fn header(&self) -> Option<f64> {
        self.header
    }

    pub fn footer(&self) -> Option<f64> {
        self.footer
    }

    pub fn set_left(&mut self, value: f64) -> Result<(), ValidationError> {
        self.left = Some(self.derive_margin("left", value)?);
        Ok(())
    }

    pub fn set_right(&mut self, value: f64) -> Result<(), ValidationError> {
        self.right = Some(self.derive_margin("right", value)?);
        Ok(())
    }

    pub fn set_top(&mut self, value: f64) -> Result<(), ValidationError> {
        self.top = Some(self.derive_margin("top", value)?);
        Ok(())
    }

    pub fn set_bottom(&mut self, value: f64) -> Result<(), ValidationError> {
        self.bottom = Some(self.derive_margin("bottom", value)?);
        Ok(())
    }

    /// Distance from the page top to the header.
    pub fn set_header(&mut self, value: f64) -> Result<(), ValidationError> {
        self.header = Some(self.derive_margin("header", value)?);
        Ok(())
    }

    /// Distance from the page bottom to the footer.
    pub fn set_footer(&mut self, value: f64) -> Result<(), ValidationError> {
        self.footer = Some(self.derive_margin("footer", value)?);
        Ok(())
    }

    fn derive_margin(&self, attribute: &str, value: f64) -> Result<f64, ValidationError> {
        self.validator
            .validate_unsigned_numeric(value)
            .map_err(|detail| {
                ValidationError::new(attribute, EnumValidationRule::UnsignedNumeric, detail)
            })?;
        Ok(value)
    }
}

impl<V: AttributeValidator> ElementAttributes for PageMargins<V> {
    const TAG_NAME: &'static str = C_TAG_PAGE_MARGINS;
    const ATTRIBUTE_NAMES: &'static [&'static str] =
        &["left", "right", "top", "bottom", "header", "footer"];

    fn render_attribute(&self, name: &str) -> Option<String> {
        let value = match name {
            "left" => self.left,
            "right" => self.right,
            "top" => self.top,
            "bottom" => self.bottom,
            "header" => self.header,
            "footer" => self.footer,
            _ => None,
        };
        value.map(|v| v.to_string())
    }

    fn assign_attribute(
        &mut self,
        name: &str,
        value: &EnumAttributeValue,
    ) -> Result<bool, ValidationError> {
        if !Self::ATTRIBUTE_NAMES.contains(&name) {
            return Ok(false);
        }
        let n_value = extract_number(name, EnumValidationRule::UnsignedNumeric, value)?;
        match name {
            "left" => self.set_left(n_value)?,
            "right" => self.set_right(n_value)?,
            "top" => self.set_top(n_value)?,
            "bottom" => self.set_bottom(n_value)?,
            "header" => self.set_header(n_value)?,
            "footer" => self.set_footer(n_value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn clear_attribute(&mut self, name: &str) -> bool {
        match name {
            "left" => self.left = None,
            "right" => self.right = None,
            "top" => self.top = None,
            "bottom" => self.bottom = None,
            "header" => self.header = None,
            "footer" => self.footer = None,
            _ => return false,
        }
        true
    }
}
