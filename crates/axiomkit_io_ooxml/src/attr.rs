//! Element attribute registry and map-driven bulk assignment.

use std::borrow::Borrow;

use crate::spec::{EnumAttributeValue, SpecAssignReport, ValidationError};

/// A fixed, ordered set of optional, individually validated XML attributes.
///
/// `ATTRIBUTE_NAMES` is the published registry: the serializer walks it in
/// order and reads values through [`Self::render_attribute`] only, so fields
/// outside the registry (validators, owner handles) never reach the output.
pub trait ElementAttributes {
    /// XML tag name of the element (`pageSetup`).
    const TAG_NAME: &'static str;

    /// Published attribute names in declaration order, word-separated form.
    const ATTRIBUTE_NAMES: &'static [&'static str];

    /// Render the value of a published attribute; `None` when unset or unknown.
    fn render_attribute(&self, name: &str) -> Option<String>;

    /// Route one configuration entry to its typed setter.
    ///
    /// Returns `Ok(false)` when `name` is neither a published attribute nor a
    /// coupling alias of the element.
    fn assign_attribute(
        &mut self,
        name: &str,
        value: &EnumAttributeValue,
    ) -> Result<bool, ValidationError>;

    /// Reset a published attribute to unset. Returns `false` for unknown names.
    fn clear_attribute(&mut self, name: &str) -> bool;

    /// Whether at least one published attribute is set.
    fn has_attributes(&self) -> bool {
        Self::ATTRIBUTE_NAMES
            .iter()
            .any(|name| self.render_attribute(name).is_some())
    }
}

/// Apply `config` entries to `element` in iteration order.
///
/// Unknown keys are skipped and reported. The first rejected value stops the
/// run: keys applied before it stay applied, later keys are not touched.
pub fn apply_attribute_config<E, I, K, V>(
    element: &mut E,
    config: I,
) -> Result<SpecAssignReport, ValidationError>
where
    E: ElementAttributes,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<EnumAttributeValue>,
{
    let mut report = SpecAssignReport::default();
    for (key, value) in config {
        let c_key = key.as_ref();
        if element.assign_attribute(c_key, value.borrow())? {
            report.applied.push(c_key.to_string());
        } else {
            tracing::debug!(
                element = E::TAG_NAME,
                key = c_key,
                "ignoring unknown attribute configuration key"
            );
            report.ignore(c_key);
        }
    }
    Ok(report)
}
