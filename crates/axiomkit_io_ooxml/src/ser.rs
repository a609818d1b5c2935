//! Self-closing XML element serializer for [`ElementAttributes`] sets.
//!
//! Output shape: `<tagName attrOne="v1" attrTwo="v2" />`. Only set attributes
//! are written, in registry order. Values are pre-validated scalars and are
//! quoted, not escaped.

use std::fmt;

use crate::attr::ElementAttributes;
use crate::util::camelize_attribute_name;

/// Render the attribute list (` name="value"` per set attribute).
pub fn serialize_attributes<E: ElementAttributes>(element: &E) -> String {
    let mut c_attrs = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_attributes(element, &mut c_attrs);
    c_attrs
}

/// Render the full self-closing element tag.
pub fn serialize_element<E: ElementAttributes>(element: &E) -> String {
    let mut c_xml = String::new();
    let _ = write_element(element, &mut c_xml);
    c_xml
}

/// Stream the full self-closing element tag into `out`.
pub fn write_element<E: ElementAttributes, W: fmt::Write>(
    element: &E,
    out: &mut W,
) -> fmt::Result {
    write!(out, "<{}", E::TAG_NAME)?;
    write_attributes(element, out)?;
    out.write_str(" />")
}

fn write_attributes<E: ElementAttributes, W: fmt::Write>(element: &E, out: &mut W) -> fmt::Result {
    for name in E::ATTRIBUTE_NAMES {
        let Some(c_value) = element.render_attribute(name) else {
            continue;
        };
        write!(out, " {}=\"{}\"", camelize_attribute_name(name), c_value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{EnumAttributeValue, ValidationError};

    /// Minimal element with a non-published field.
    #[derive(Default)]
    struct SpecProbeElement {
        first_value: Option<u32>,
        second: Option<String>,
        owner_handle: Option<String>,
    }

    impl ElementAttributes for SpecProbeElement {
        const TAG_NAME: &'static str = "probe";
        const ATTRIBUTE_NAMES: &'static [&'static str] = &["second", "first_value"];

        fn render_attribute(&self, name: &str) -> Option<String> {
            match name {
                "first_value" => self.first_value.map(|v| v.to_string()),
                "second" => self.second.clone(),
                _ => None,
            }
        }

        fn assign_attribute(
            &mut self,
            _name: &str,
            _value: &EnumAttributeValue,
        ) -> Result<bool, ValidationError> {
            Ok(false)
        }

        fn clear_attribute(&mut self, _name: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_serialize_empty_element_has_no_attributes() {
        let element = SpecProbeElement::default();
        assert_eq!(serialize_attributes(&element), "");
        assert_eq!(serialize_element(&element), "<probe />");
        assert!(!element.has_attributes());
    }

    #[test]
    fn test_serialize_follows_registry_order_and_skips_unpublished_fields() {
        let element = SpecProbeElement {
            first_value: Some(3),
            second: Some("b".to_string()),
            owner_handle: Some("sheet1".to_string()),
        };
        assert_eq!(
            serialize_element(&element),
            "<probe second=\"b\" firstValue=\"3\" />"
        );
        assert!(element.owner_handle.is_some());
    }

    #[test]
    fn test_write_element_matches_serialize_element() {
        let element = SpecProbeElement {
            first_value: Some(0),
            ..Default::default()
        };
        let mut c_out = String::new();
        write_element(&element, &mut c_out).expect("write to string");
        assert_eq!(c_out, serialize_element(&element));
        assert_eq!(c_out, "<probe firstValue=\"0\" />");
    }
}
