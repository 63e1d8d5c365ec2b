// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for locale-forge

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Code of the language every other language falls back to.
pub const ENGLISH: &str = "en";

/// File name written inside every language directory.
pub const DOCUMENT_FILE_NAME: &str = "translation.json";

/// Default output directory, relative to the working directory.
pub const DEFAULT_BASE_DIR: &str = "public/locales";

/// Short language identifier such as `en`, `hi` or `mai`.
pub type LanguageCode = String;

/// Identifier of one localizable UI string such as `menu`.
pub type TranslationKey = String;

/// Sparse key → (language → text) table.
pub type TranslationTable = BTreeMap<TranslationKey, BTreeMap<LanguageCode, String>>;

/// A supported language and its English display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: LanguageCode,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Which fallback tier produced a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// The table has an entry for the requested language.
    Native,
    /// The English entry was used.
    English,
    /// Neither exists; the capitalized key was used.
    Key,
}

/// Flat key → text mapping generated for one language.
///
/// Complete by construction: it holds one value for every key in the table
/// it was resolved from. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleDocument {
    entries: BTreeMap<TranslationKey, String>,
}

impl LocaleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<TranslationKey, String>> for LocaleDocument {
    fn from(entries: BTreeMap<TranslationKey, String>) -> Self {
        Self { entries }
    }
}

/// Outcome of writing one language's document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleOutcome {
    pub code: LanguageCode,
    pub path: PathBuf,
    pub keys: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LocaleOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a whole generation run, in language-enumeration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateReport {
    pub base_dir: PathBuf,
    pub outcomes: Vec<LocaleOutcome>,
}

impl GenerateReport {
    pub fn written(&self) -> impl Iterator<Item = &LocaleOutcome> {
        self.outcomes.iter().filter(|o| o.succeeded())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LocaleOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Fallback statistics for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCoverage {
    pub code: LanguageCode,
    pub name: String,
    pub native: usize,
    pub english: usize,
    /// Keys that resolved to their own capitalized form.
    pub key_fallbacks: Vec<TranslationKey>,
}

impl LanguageCoverage {
    pub fn total(&self) -> usize {
        self.native + self.english + self.key_fallbacks.len()
    }

    /// Share of keys translated natively, in percent.
    pub fn native_percent(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        self.native as f64 * 100.0 / self.total() as f64
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    pub keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    /// Every (language, key) pair that fell through to the capitalized key.
    pub fn key_fallbacks(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages.iter().flat_map(|lang| {
            lang.key_fallbacks
                .iter()
                .map(move |key| (lang.code.as_str(), key.as_str()))
        })
    }
}

/// Per-language result of a fill pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillOutcome {
    pub code: LanguageCode,
    pub path: PathBuf,
    pub filled: usize,
    /// Whether the document was (re)written.
    pub written: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillReport {
    pub base_dir: PathBuf,
    pub reference_keys: usize,
    pub outcomes: Vec<FillOutcome>,
}

impl FillReport {
    pub fn total_filled(&self) -> usize {
        self.outcomes.iter().map(|o| o.filled).sum()
    }
}
