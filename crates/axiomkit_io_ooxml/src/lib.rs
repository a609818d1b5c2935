//! `axiomkit_io_ooxml` v1:
//! Validated OOXML element attribute sets and their XML serialization.
//!
//! Architecture mirrors the `io/xlsx` layout:
//! - `conf`          : constants and default presets
//! - `spec`          : values/enums/errors/reports
//! - `validate`      : injectable attribute validation rules
//! - `attr`          : element attribute registry trait and bulk assignment
//! - `ser`           : self-closing element serializer
//! - `page_setup`    : `pageSetup` element
//! - `print_options` : `printOptions` element
//! - `page_margins`  : `pageMargins` element
//! - `sheet`         : worksheet-level print settings assembly
//! - `util`          : pure helper functions
//! - `writer`        : `rust_xlsxwriter` worksheet adapter
pub mod attr;
pub mod conf;
pub mod page_margins;
pub mod page_setup;
pub mod print_options;
pub mod ser;
pub mod sheet;
pub mod spec;
pub mod util;
pub mod validate;
pub mod writer;

pub use attr::{ElementAttributes, apply_attribute_config};
pub use conf::{
    N_FIT_TO_PAGES_UNCONSTRAINED, N_SCALE_MAX, N_SCALE_MIN, TUP_LENGTH_UNITS,
    TUP_PAGE_ORIENTATIONS, derive_default_attribute_validator, derive_default_page_margins,
};
pub use page_margins::PageMargins;
pub use page_setup::PageSetup;
pub use print_options::PrintOptions;
pub use ser::{serialize_attributes, serialize_element, write_element};
pub use sheet::{SpecWorksheetPrintSettings, serialize_page_setup_pr, serialize_print_fragments};
pub use spec::{
    AttributeConfigError, EnumAttributeValue, EnumPageOrientation, EnumValidationRule,
    SpecAssignReport, SpecOoxmlReport, ValidationError,
};
pub use util::{camelize_attribute_name, derive_attribute_config_from_json};
pub use validate::{AttributeValidator, DefaultAttributeValidator};
pub use writer::apply_print_settings;
