// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for run summaries

use crate::i18n::{language_name, Catalog};
use crate::types::*;
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_generate(&self, report: &GenerateReport) {
        let written = report.written().count();
        let failed = report.outcomes.len() - written;

        println!();
        println!("{}", "GENERATION SUMMARY".bold().yellow());
        println!("  Output: {}", report.base_dir.display());
        println!("  Written: {}", written.to_string().green());
        if failed > 0 {
            println!("  Failed: {}", failed.to_string().red().bold());
            for outcome in report.failures() {
                println!(
                    "    - {}: {}",
                    outcome.code.red(),
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    pub fn print_coverage(&self, report: &CoverageReport) {
        println!("{}", "TRANSLATION COVERAGE".bold().yellow());
        println!("  Keys: {}", report.keys);
        println!();
        println!(
            "  {:<6} {:<12} {:>7} {:>8} {:>5} {:>8}",
            "Code", "Language", "Native", "English", "Key", "Native%"
        );
        println!("  {}", "-".repeat(51));

        for lang in &report.languages {
            let percent = format!("{:.1}", lang.native_percent());
            let percent = if lang.native_percent() >= 100.0 {
                percent.green()
            } else if lang.native == 0 {
                percent.red()
            } else {
                percent.normal()
            };
            println!(
                "  {:<6} {:<12} {:>7} {:>8} {:>5} {:>8}",
                lang.code,
                lang.name,
                lang.native,
                lang.english,
                lang.key_fallbacks.len(),
                percent
            );
        }

        let bare: Vec<String> = report
            .key_fallbacks()
            .map(|(code, key)| format!("{}:{}", code, key))
            .collect();
        println!();
        if bare.is_empty() {
            println!("{}", "Every key has a translation or an English value".green());
        } else {
            println!(
                "{} {}",
                "Keys falling back to their own name:".red().bold(),
                bare.join(", ")
            );
        }
    }

    pub fn print_languages(&self, catalog: &Catalog) {
        for lang in &catalog.languages {
            println!("  {:<6} {}", lang.code.bold(), lang.name);
        }
    }

    pub fn print_fill(&self, report: &FillReport) {
        println!();
        println!("{}", "FILL SUMMARY".bold().yellow());
        println!("  Reference keys (en): {}", report.reference_keys);
        for outcome in &report.outcomes {
            let name = language_name(&outcome.code).unwrap_or("unknown language");
            let status = if outcome.written {
                format!("{} filled", outcome.filled).yellow()
            } else {
                "complete".green()
            };
            println!("  {:<6} {:<12} {}", outcome.code, name, status);
        }
        println!("Localization fix complete. {} keys filled.", report.total_filled());
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
