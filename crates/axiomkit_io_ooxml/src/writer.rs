//! Adapter applying worksheet print settings to a `rust_xlsxwriter` worksheet.

use rust_xlsxwriter::Worksheet;

use crate::conf::derive_default_page_margins;
use crate::sheet::SpecWorksheetPrintSettings;
use crate::spec::{EnumPageOrientation, SpecOoxmlReport};

/// Apply `settings` through the worksheet print API.
///
/// Attributes without a `rust_xlsxwriter` counterpart are reported as warnings
/// instead of failing the call.
pub fn apply_print_settings(
    worksheet: &mut Worksheet,
    settings: &SpecWorksheetPrintSettings,
) -> SpecOoxmlReport {
    let mut report = SpecOoxmlReport::default();
    apply_page_setup(worksheet, settings, &mut report);
    apply_print_options(worksheet, settings);
    apply_page_margins(worksheet, settings);
    report
}

fn apply_page_setup(
    worksheet: &mut Worksheet,
    settings: &SpecWorksheetPrintSettings,
    report: &mut SpecOoxmlReport,
) {
    let page_setup = &settings.page_setup;

    match page_setup.orientation() {
        Some(EnumPageOrientation::Landscape) => {
            worksheet.set_landscape();
        }
        Some(EnumPageOrientation::Portrait) => {
            worksheet.set_portrait();
        }
        Some(EnumPageOrientation::Default) => {
            report.warn("orientation=default is implicit in rust_xlsxwriter; left unchanged.");
        }
        None => {}
    }

    if let Some(n_scale) = page_setup.scale() {
        worksheet.set_print_scale(n_scale);
    }

    if page_setup.is_fit_to_page() {
        let n_width = derive_fit_to_pages(page_setup.fit_to_width(), "fit_to_width", report);
        let n_height = derive_fit_to_pages(page_setup.fit_to_height(), "fit_to_height", report);
        if let (Some(n_width), Some(n_height)) = (n_width, n_height) {
            worksheet.set_print_fit_to_pages(n_width, n_height);
        }
    }

    for (c_name, value) in [
        ("paper_height", page_setup.paper_height()),
        ("paper_width", page_setup.paper_width()),
    ] {
        if let Some(c_value) = value {
            report.warn(format!(
                "{c_name}={c_value} has no rust_xlsxwriter equivalent; skipped."
            ));
        }
    }
}

/// Resolve one fit-to axis; an unset axis falls back to `1` like spreadsheet
/// applications do.
fn derive_fit_to_pages(
    value: Option<u32>,
    c_name: &str,
    report: &mut SpecOoxmlReport,
) -> Option<u16> {
    let Some(n_pages) = value else {
        report.warn(format!(
            "{c_name} is unset and defaults to 1 page; use fit_to() to set both axes."
        ));
        return Some(1);
    };
    match u16::try_from(n_pages) {
        Ok(n_pages) => Some(n_pages),
        Err(_) => {
            report.warn(format!(
                "{c_name}={n_pages} exceeds the rust_xlsxwriter limit {}; fit-to-pages skipped.",
                u16::MAX
            ));
            None
        }
    }
}

fn apply_print_options(worksheet: &mut Worksheet, settings: &SpecWorksheetPrintSettings) {
    let print_options = &settings.print_options;
    if let Some(if_enabled) = print_options.grid_lines() {
        worksheet.set_print_gridlines(if_enabled);
    }
    if let Some(if_enabled) = print_options.headings() {
        worksheet.set_print_headings(if_enabled);
    }
    if let Some(if_enabled) = print_options.horizontal_centered() {
        worksheet.set_print_center_horizontally(if_enabled);
    }
    if let Some(if_enabled) = print_options.vertical_centered() {
        worksheet.set_print_center_vertically(if_enabled);
    }
}

fn apply_page_margins(worksheet: &mut Worksheet, settings: &SpecWorksheetPrintSettings) {
    let page_margins = &settings.page_margins;
    let cfg_defaults = derive_default_page_margins();
    let l_margins = [
        (page_margins.left(), cfg_defaults.left()),
        (page_margins.right(), cfg_defaults.right()),
        (page_margins.top(), cfg_defaults.top()),
        (page_margins.bottom(), cfg_defaults.bottom()),
        (page_margins.header(), cfg_defaults.header()),
        (page_margins.footer(), cfg_defaults.footer()),
    ];
    if l_margins.iter().all(|(value, _)| value.is_none()) {
        return;
    }

    // `set_margins` takes all six sides; unset sides keep the application defaults.
    let [n_left, n_right, n_top, n_bottom, n_header, n_footer] =
        l_margins.map(|(value, value_default)| value.or(value_default).unwrap_or_default());
    worksheet.set_margins(n_left, n_right, n_top, n_bottom, n_header, n_footer);
}
