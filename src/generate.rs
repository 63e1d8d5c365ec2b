// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generate: write one `translation.json` per supported language
//!
//! Each language's document is resolved from the shared catalog and written
//! to `<base_dir>/<code>/translation.json`. Languages are independent, so a
//! failure for one is recorded and the run moves on to the next unless
//! `fail_fast` is set.

use crate::i18n::Catalog;
use crate::resolve::{coverage, resolve_document};
use crate::storage;
use crate::types::{GenerateReport, Language, LocaleOutcome, DEFAULT_BASE_DIR};
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory that receives one subdirectory per language
    pub base_dir: PathBuf,
    /// Refuse to write anything if a key would fall back to its own name
    pub strict: bool,
    /// Stop at the first language that cannot be written. Forces sequential
    /// generation so no language after the failing one is written.
    pub fail_fast: bool,
    /// Generate languages on the rayon pool; ignored when `fail_fast` is set
    pub parallel: bool,
    /// Suppress per-language progress lines
    pub quiet: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            strict: false,
            fail_fast: false,
            parallel: false,
            quiet: false,
        }
    }
}

impl GenerateConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }
}

/// Generate every language in `catalog` with default settings.
pub fn generate(catalog: &Catalog, base_dir: &Path) -> Result<GenerateReport> {
    run(catalog, &GenerateConfig::new(base_dir))
}

/// Run a full generation pass.
///
/// Returns `Err` only for run-wide problems: an invalid catalog, a strict
/// violation, an uncreatable base directory, or any language failure when
/// `fail_fast` is set. Otherwise per-language failures are in the report.
pub fn run(catalog: &Catalog, config: &GenerateConfig) -> Result<GenerateReport> {
    catalog.validate()?;
    if config.strict {
        check_strict(catalog)?;
    }

    fs::create_dir_all(&config.base_dir).with_context(|| {
        format!(
            "creating locale base directory {}",
            config.base_dir.display()
        )
    })?;

    let outcomes = if config.parallel && !config.fail_fast {
        let outcomes: Vec<LocaleOutcome> = catalog
            .languages
            .par_iter()
            .map(|lang| generate_language(catalog, lang, &config.base_dir))
            .collect();
        for outcome in &outcomes {
            report_progress(outcome, config.quiet);
        }
        outcomes
    } else {
        let mut outcomes = Vec::with_capacity(catalog.languages.len());
        for lang in &catalog.languages {
            let outcome = generate_language(catalog, lang, &config.base_dir);
            report_progress(&outcome, config.quiet);
            if config.fail_fast && !outcome.succeeded() {
                bail!(failure_message(&outcome));
            }
            outcomes.push(outcome);
        }
        outcomes
    };

    Ok(GenerateReport {
        base_dir: config.base_dir.clone(),
        outcomes,
    })
}

fn generate_language(catalog: &Catalog, lang: &Language, base_dir: &Path) -> LocaleOutcome {
    let doc = resolve_document(&catalog.translations, &lang.code);
    match storage::write_document(base_dir, &lang.code, &doc) {
        Ok(path) => LocaleOutcome {
            code: lang.code.clone(),
            path,
            keys: doc.len(),
            error: None,
        },
        Err(e) => LocaleOutcome {
            code: lang.code.clone(),
            path: storage::document_path(base_dir, &lang.code),
            keys: 0,
            error: Some(format!("{:#}", e)),
        },
    }
}

fn report_progress(outcome: &LocaleOutcome, quiet: bool) {
    if quiet {
        return;
    }
    match &outcome.error {
        None => println!(
            "Generated {} locale at {}",
            outcome.code,
            outcome.path.display()
        ),
        Some(err) => eprintln!("Failed to generate {} locale: {}", outcome.code, err),
    }
}

fn failure_message(outcome: &LocaleOutcome) -> String {
    format!(
        "generating {} locale failed: {}",
        outcome.code,
        outcome.error.as_deref().unwrap_or("unknown error")
    )
}

/// Fail if any (language, key) pair would resolve to the capitalized key.
pub fn check_strict(catalog: &Catalog) -> Result<()> {
    let report = coverage(catalog);
    let missing: Vec<String> = report
        .key_fallbacks()
        .map(|(code, key)| format!("{}:{}", code, key))
        .collect();

    if !missing.is_empty() {
        bail!(
            "strict mode: {} value(s) have neither a translation nor an English entry: {}",
            missing.len(),
            missing.join(", ")
        );
    }
    Ok(())
}
