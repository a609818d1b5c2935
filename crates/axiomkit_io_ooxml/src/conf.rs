//! OOXML attribute constants and default preset factories.

use crate::page_margins::PageMargins;
use crate::validate::DefaultAttributeValidator;

/// Page count used by `PageSetup::fit_to` for an omitted axis.
///
/// Large enough to leave the axis effectively unconstrained while still
/// emitting an explicit attribute. This is a policy value, not an OOXML maximum.
pub const N_FIT_TO_PAGES_UNCONSTRAINED: u32 = 9_999;
/// Smallest accepted print scale percentage.
pub const N_SCALE_MIN: i64 = 10;
/// Largest accepted print scale percentage.
pub const N_SCALE_MAX: i64 = 400;

/// Length units recognized in unit-suffixed dimensions (`210mm`, `8.5in`).
pub const TUP_LENGTH_UNITS: [&str; 6] = ["mm", "cm", "in", "pt", "pc", "pi"];
/// Accepted `orientation` values.
pub const TUP_PAGE_ORIENTATIONS: [&str; 3] = ["default", "landscape", "portrait"];

/// Tag of the page setup element.
pub const C_TAG_PAGE_SETUP: &str = "pageSetup";
/// Tag of the print options element.
pub const C_TAG_PRINT_OPTIONS: &str = "printOptions";
/// Tag of the page margins element.
pub const C_TAG_PAGE_MARGINS: &str = "pageMargins";
/// Tag of the sheet-properties child carrying the fit-to-page flag.
pub const C_TAG_PAGE_SETUP_PR: &str = "pageSetUpPr";

/// Build the validator used when none is injected.
pub fn derive_default_attribute_validator() -> DefaultAttributeValidator {
    DefaultAttributeValidator
}

/// Build page margins holding the spreadsheet application defaults (inches).
pub fn derive_default_page_margins() -> PageMargins {
    PageMargins::from_values(0.7, 0.7, 0.75, 0.75, 0.3, 0.3)
}
