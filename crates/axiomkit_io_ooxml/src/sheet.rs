//! Worksheet-level print settings assembly.
//!
//! Groups the print-related element attribute sets owned by one worksheet and
//! emits their fragments in `CT_Worksheet` schema order.

use std::collections::BTreeMap;

use crate::attr::ElementAttributes;
use crate::conf::C_TAG_PAGE_SETUP_PR;
use crate::page_margins::PageMargins;
use crate::page_setup::PageSetup;
use crate::print_options::PrintOptions;
use crate::ser::{serialize_element, write_element};
use crate::spec::{AttributeConfigError, EnumAttributeValue, SpecAssignReport};
use crate::util::derive_attribute_config_from_json;
use crate::validate::AttributeValidator;

/// Print settings of one worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecWorksheetPrintSettings {
    /// `printOptions` element.
    pub print_options: PrintOptions,
    /// `pageMargins` element.
    pub page_margins: PageMargins,
    /// `pageSetup` element.
    pub page_setup: PageSetup,
}

impl SpecWorksheetPrintSettings {
    /// Build settings from a nested map keyed by `print_options`,
    /// `page_margins` and `page_setup`.
    pub fn from_config(
        config: &BTreeMap<String, EnumAttributeValue>,
    ) -> Result<Self, AttributeConfigError> {
        let mut settings = Self::default();
        settings.set(config)?;
        Ok(settings)
    }

    /// Build settings from a JSON document shaped like [`Self::from_config`] input.
    pub fn from_json(text: &str) -> Result<Self, AttributeConfigError> {
        Self::from_config(&derive_attribute_config_from_json(text)?)
    }

    /// Apply a nested configuration map section by section.
    ///
    /// Unknown sections and unknown keys inside sections are reported as
    /// ignored with a `section.` prefix.
    pub fn set(
        &mut self,
        config: &BTreeMap<String, EnumAttributeValue>,
    ) -> Result<SpecAssignReport, AttributeConfigError> {
        let mut report = SpecAssignReport::default();
        for (c_section, value) in config {
            let c_section = c_section.as_str();
            let report_section = match c_section {
                "print_options" => self.print_options.set(derive_section(c_section, value)?)?,
                "page_margins" => self.page_margins.set(derive_section(c_section, value)?)?,
                "page_setup" => self.page_setup.set(derive_section(c_section, value)?)?,
                _ => {
                    tracing::debug!(section = c_section, "ignoring unknown print settings section");
                    report.ignore(c_section);
                    continue;
                }
            };
            report.extend_scoped(c_section, report_section);
        }
        Ok(report)
    }
}

fn derive_section<'a>(
    c_section: &str,
    value: &'a EnumAttributeValue,
) -> Result<&'a BTreeMap<String, EnumAttributeValue>, AttributeConfigError> {
    match value {
        EnumAttributeValue::Map(dict_section) => Ok(dict_section),
        _ => Err(AttributeConfigError::NotAMap(c_section.to_string())),
    }
}

/// Render `<pageSetUpPr fitToPage="1" />` when page fitting is requested.
///
/// Spreadsheet applications ignore `fitToWidth`/`fitToHeight` unless the sheet
/// properties carry this flag.
pub fn serialize_page_setup_pr<V: AttributeValidator>(page_setup: &PageSetup<V>) -> Option<String> {
    if !page_setup.is_fit_to_page() {
        return None;
    }
    Some(format!("<{C_TAG_PAGE_SETUP_PR} fitToPage=\"1\" />"))
}

/// Render `printOptions`, `pageMargins` and `pageSetup` in schema order,
/// omitting elements with no set attributes.
pub fn serialize_print_fragments(settings: &SpecWorksheetPrintSettings) -> String {
    let mut c_xml = String::new();
    if settings.print_options.has_attributes() {
        c_xml.push_str(&serialize_element(&settings.print_options));
    }
    if settings.page_margins.has_attributes() {
        let _ = write_element(&settings.page_margins, &mut c_xml);
    }
    if settings.page_setup.has_attributes() {
        let _ = write_element(&settings.page_setup, &mut c_xml);
    }
    c_xml
}
