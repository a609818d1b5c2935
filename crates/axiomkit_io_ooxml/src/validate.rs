//! Attribute validation rules consumed by element setters.
//!
//! Element types depend on [`AttributeValidator`] rather than on concrete
//! checks, so a caller can tighten or relax rules without touching the
//! element code. Every method either accepts silently or returns the
//! user-facing reason for rejection.

use std::sync::LazyLock;

use regex::Regex;

use crate::conf::{N_SCALE_MAX, N_SCALE_MIN, TUP_LENGTH_UNITS, TUP_PAGE_ORIENTATIONS};
use crate::spec::EnumAttributeValue;

static RE_NUMBER_WITH_UNIT: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(&derive_number_with_unit_pattern(&TUP_LENGTH_UNITS)));

/// Validation capability injected into element attribute sets.
pub trait AttributeValidator {
    /// Accept integral values `>= 0`.
    fn validate_unsigned_int(&self, value: i64) -> Result<(), String>;

    /// Accept members of the page orientation enumeration.
    fn validate_page_orientation(&self, value: &str) -> Result<(), String>;

    /// Accept `<number><unit>` dimension strings.
    fn validate_number_with_unit(&self, value: &str) -> Result<(), String>;

    /// Accept print scale percentages in `10..=400`.
    fn validate_scale_10_400(&self, value: i64) -> Result<(), String>;

    /// Accept boolean-like values and return their boolean reading.
    fn validate_boolean(&self, value: &EnumAttributeValue) -> Result<bool, String>;

    /// Accept finite decimals `>= 0`.
    fn validate_unsigned_numeric(&self, value: f64) -> Result<(), String>;
}

/// Spreadsheet rule set used unless another validator is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultAttributeValidator;

impl AttributeValidator for DefaultAttributeValidator {
    fn validate_unsigned_int(&self, value: i64) -> Result<(), String> {
        if value < 0 {
            return Err(format!("{value} must be >= 0."));
        }
        if value > i64::from(u32::MAX) {
            return Err(format!("{value} exceeds the unsigned int maximum {}.", u32::MAX));
        }
        Ok(())
    }

    fn validate_page_orientation(&self, value: &str) -> Result<(), String> {
        if TUP_PAGE_ORIENTATIONS.contains(&value) {
            return Ok(());
        }
        Err(format!(
            "{value:?} must be one of: {}.",
            derive_quoted_choices(&TUP_PAGE_ORIENTATIONS)
        ))
    }

    fn validate_number_with_unit(&self, value: &str) -> Result<(), String> {
        let re = RE_NUMBER_WITH_UNIT
            .as_ref()
            .map_err(|err| format!("Invalid number-with-unit pattern: {err}"))?;
        if re.is_match(value) {
            return Ok(());
        }
        Err(format!(
            "{value:?} must be a number followed by one of: {}.",
            derive_quoted_choices(&TUP_LENGTH_UNITS)
        ))
    }

    fn validate_scale_10_400(&self, value: i64) -> Result<(), String> {
        if (N_SCALE_MIN..=N_SCALE_MAX).contains(&value) {
            return Ok(());
        }
        Err(format!(
            "{value} must be between {N_SCALE_MIN} and {N_SCALE_MAX}."
        ))
    }

    fn validate_boolean(&self, value: &EnumAttributeValue) -> Result<bool, String> {
        match value {
            EnumAttributeValue::Boolean(v) => Ok(*v),
            EnumAttributeValue::Integer(0) => Ok(false),
            EnumAttributeValue::Integer(1) => Ok(true),
            EnumAttributeValue::String(s) if s == "true" || s == "1" => Ok(true),
            EnumAttributeValue::String(s) if s == "false" || s == "0" => Ok(false),
            other => Err(format!(
                "{other} must be true, false, 0, 1, 'true' or 'false'."
            )),
        }
    }

    fn validate_unsigned_numeric(&self, value: f64) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{value} must be finite."));
        }
        if value < 0.0 {
            return Err(format!("{value} must be >= 0."));
        }
        Ok(())
    }
}

/// Build the anchored `<number><unit>` pattern for `units`.
fn derive_number_with_unit_pattern(units: &[&str]) -> String {
    let c_units = units
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\A[0-9]+(\.[0-9]+)?({c_units})\z")
}

fn derive_quoted_choices(choices: &[&str]) -> String {
    choices
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
