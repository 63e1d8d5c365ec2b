// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summaries for the terminal and for machine consumers

pub mod formatter;

use crate::i18n::Catalog;
use crate::types::*;
use anyhow::{Context, Result};

pub use formatter::ReportFormatter;

/// Print a generation summary to the console
pub fn print_generate_report(report: &GenerateReport) {
    ReportFormatter::new().print_generate(report);
}

/// Print the per-language fallback table
pub fn print_coverage_report(report: &CoverageReport) {
    ReportFormatter::new().print_coverage(report);
}

/// Print the catalog's language list
pub fn print_languages(catalog: &Catalog) {
    ReportFormatter::new().print_languages(catalog);
}

/// Print a fill summary to the console
pub fn print_fill_report(report: &FillReport) {
    ReportFormatter::new().print_fill(report);
}

/// Coverage as pretty JSON, for CI checks
pub fn coverage_json(report: &CoverageReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serializing coverage report")
}
