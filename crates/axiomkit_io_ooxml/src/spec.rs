//! Shared attribute value, rule, error and report models.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region ConfigurationValue

/// Candidate value carried by an attribute configuration map.
///
/// Deserializes untagged from JSON: `true`, `75`, `2.5`, `"landscape"`,
/// `{"width": 2}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumAttributeValue {
    /// Boolean value.
    Boolean(bool),
    /// Integral value.
    Integer(i64),
    /// Non-integral numeric value.
    Float(f64),
    /// Text or enumeration value.
    String(String),
    /// Nested configuration (coupling aliases, worksheet sections).
    Map(BTreeMap<String, EnumAttributeValue>),
}

impl EnumAttributeValue {
    /// Short kind name used in error details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Display for EnumAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Map(dict_value) => {
                let c_keys = dict_value
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{c_keys}}}")
            }
        }
    }
}

impl From<bool> for EnumAttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for EnumAttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for EnumAttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for EnumAttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for EnumAttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for EnumAttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumAttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<EnumPageOrientation> for EnumAttributeValue {
    fn from(value: EnumPageOrientation) -> Self {
        Self::String(value.as_str().to_string())
    }
}

impl From<BTreeMap<String, EnumAttributeValue>> for EnumAttributeValue {
    fn from(value: BTreeMap<String, EnumAttributeValue>) -> Self {
        Self::Map(value)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Enums

/// Page orientation accepted by `pageSetup/@orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumPageOrientation {
    /// Application default orientation.
    Default,
    /// Landscape orientation.
    Landscape,
    /// Portrait orientation.
    Portrait,
}

impl EnumPageOrientation {
    /// OOXML attribute text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl AsRef<str> for EnumPageOrientation {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EnumPageOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnumPageOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            _ => Err(format!(
                "{s:?} is not one of: 'default', 'landscape', 'portrait'."
            )),
        }
    }
}

/// Validation rule applied by an attribute setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumValidationRule {
    /// Integral and `>= 0`.
    UnsignedInt,
    /// Member of the page orientation enumeration.
    PageOrientation,
    /// `<number><unit>` dimension string.
    NumberWithUnit,
    /// Integer in `10..=400`.
    Scale10To400,
    /// Boolean or boolean-like value.
    Boolean,
    /// Finite decimal `>= 0`.
    UnsignedNumeric,
}

impl EnumValidationRule {
    /// Rule name as used by the validator method (`validate_<name>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsignedInt => "unsigned_int",
            Self::PageOrientation => "page_orientation",
            Self::NumberWithUnit => "number_with_unit",
            Self::Scale10To400 => "scale_10_400",
            Self::Boolean => "boolean",
            Self::UnsignedNumeric => "unsigned_numeric",
        }
    }
}

impl fmt::Display for EnumValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// A setter rejected its candidate value; the attribute kept its prior state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for `{attribute}` (rule `{rule}`): {detail}")]
pub struct ValidationError {
    /// Attribute name in word-separated form.
    pub attribute: String,
    /// Violated rule.
    pub rule: EnumValidationRule,
    /// User-facing detail text.
    pub detail: String,
}

impl ValidationError {
    /// Build an error for `attribute` violating `rule`.
    pub fn new(attribute: &str, rule: EnumValidationRule, detail: impl Into<String>) -> Self {
        Self {
            attribute: attribute.to_string(),
            rule,
            detail: detail.into(),
        }
    }
}

/// Attribute configuration could not be read or applied.
#[derive(Debug, Error)]
pub enum AttributeConfigError {
    /// Configuration text is not valid JSON for an attribute map.
    #[error("Malformed attribute configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A configuration document or section is not a map.
    #[error("Attribute configuration `{0}` must be a map.")]
    NotAMap(String),
    /// A recognized key carried a value rejected by its setter.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Reports

/// Outcome of one bulk assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecAssignReport {
    /// Keys applied through a typed setter or coupling alias, in application order.
    pub applied: Vec<String>,
    /// Keys not naming a known attribute (non-fatal).
    pub ignored: Vec<String>,
}

impl SpecAssignReport {
    /// Record an ignored key.
    pub fn ignore(&mut self, key: impl AsRef<str>) {
        self.ignored.push(key.as_ref().to_string());
    }

    /// Append `other` with keys prefixed by `section.`.
    pub fn extend_scoped(&mut self, section: &str, other: SpecAssignReport) {
        self.applied
            .extend(other.applied.into_iter().map(|k| format!("{section}.{k}")));
        self.ignored
            .extend(other.ignored.into_iter().map(|k| format!("{section}.{k}")));
    }
}

/// Per-call report of the worksheet adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecOoxmlReport {
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecOoxmlReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        tracing::warn!("{}", msg.as_ref());
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
