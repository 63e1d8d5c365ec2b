// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fallback resolution
//!
//! Every (key, language) pair resolves independently:
//!
//! 1. the entry for the requested language,
//! 2. else the English entry,
//! 3. else the key itself with its first character upper-cased.
//!
//! Tier 3 is a textual placeholder, not a translation. [`coverage`] reports
//! where it was used so strict runs can reject it.

use crate::i18n::Catalog;
use crate::types::{
    CoverageReport, LanguageCoverage, LanguageCode, LocaleDocument, Resolution, TranslationTable,
    ENGLISH,
};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Resolve one key for one language.
pub fn resolve<'a>(
    key: &'a str,
    entries: &'a BTreeMap<LanguageCode, String>,
    code: &str,
) -> (Cow<'a, str>, Resolution) {
    if let Some(text) = entries.get(code) {
        return (Cow::Borrowed(text), Resolution::Native);
    }
    if let Some(text) = entries.get(ENGLISH) {
        return (Cow::Borrowed(text), Resolution::English);
    }
    (Cow::Owned(capitalize(key)), Resolution::Key)
}

/// Upper-case the first character, leaving the rest untouched
/// (`photoStudio` → `PhotoStudio`).
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the complete document for one language.
pub fn resolve_document(table: &TranslationTable, code: &str) -> LocaleDocument {
    let mut doc = LocaleDocument::new();
    for (key, entries) in table {
        let (text, _) = resolve(key, entries, code);
        doc.insert(key.as_str(), text.into_owned());
    }
    doc
}

/// Count how each language's values were resolved.
pub fn coverage(catalog: &Catalog) -> CoverageReport {
    let languages = catalog
        .languages
        .iter()
        .map(|lang| {
            let mut stats = LanguageCoverage {
                code: lang.code.clone(),
                name: lang.name.clone(),
                ..LanguageCoverage::default()
            };
            for (key, entries) in &catalog.translations {
                match resolve(key, entries, &lang.code).1 {
                    Resolution::Native => stats.native += 1,
                    Resolution::English => stats.english += 1,
                    Resolution::Key => stats.key_fallbacks.push(key.clone()),
                }
            }
            stats
        })
        .collect();

    CoverageReport {
        keys: catalog.translations.len(),
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<LanguageCode, String> {
        pairs
            .iter()
            .map(|&(c, t)| (c.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn native_entry_wins() {
        let e = entries(&[("en", "MENU"), ("hi", "मेनू")]);
        let (text, tier) = resolve("menu", &e, "hi");
        assert_eq!(text, "मेनू");
        assert_eq!(tier, Resolution::Native);
    }

    #[test]
    fn falls_back_to_english() {
        let e = entries(&[("en", "MENU"), ("hi", "मेनू")]);
        let (text, tier) = resolve("menu", &e, "fr");
        assert_eq!(text, "MENU");
        assert_eq!(tier, Resolution::English);
    }

    #[test]
    fn falls_back_to_capitalized_key() {
        let e = entries(&[("hi", "मेनू")]);
        let (text, tier) = resolve("foo", &e, "fr");
        assert_eq!(text, "Foo");
        assert_eq!(tier, Resolution::Key);
    }

    #[test]
    fn english_itself_falls_through_to_key() {
        let none = BTreeMap::new();
        let (text, tier) = resolve("foo", &none, "en");
        assert_eq!(text, "Foo");
        assert_eq!(tier, Resolution::Key);
    }

    #[test]
    fn empty_native_entry_still_counts_as_present() {
        let e = entries(&[("en", "MENU"), ("hi", "")]);
        assert_eq!(resolve("menu", &e, "hi").0, "");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("photoStudio"), "PhotoStudio");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("Menu"), "Menu");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn document_covers_every_key() {
        let catalog = Catalog::builtin();
        for code in catalog.codes() {
            let doc = resolve_document(&catalog.translations, code);
            assert_eq!(doc.len(), catalog.translations.len());
            assert!(doc
                .keys()
                .zip(catalog.translations.keys())
                .all(|(a, b)| a == b.as_str()));
        }
    }

    #[test]
    fn builtin_sample_values() {
        let catalog = Catalog::builtin();
        let hi = resolve_document(&catalog.translations, "hi");
        assert_eq!(hi.get("menu"), Some("मेनू"));
        let sat = resolve_document(&catalog.translations, "sat");
        assert_eq!(sat.get("menu"), Some("MENU"));
        let ta = resolve_document(&catalog.translations, "ta");
        assert_eq!(ta.get("about"), Some("About Us"));
    }

    #[test]
    fn coverage_tracks_tiers() {
        let mut table = TranslationTable::new();
        table.insert("menu".into(), entries(&[("en", "MENU"), ("hi", "मेनू")]));
        table.insert("foo".into(), BTreeMap::new());
        let catalog = Catalog::new(
            vec![Language::new("en", "English"), Language::new("hi", "Hindi")],
            table,
        );

        let report = coverage(&catalog);
        assert_eq!(report.keys, 2);
        let en = &report.languages[0];
        assert_eq!((en.native, en.english), (1, 0));
        assert_eq!(en.key_fallbacks, vec!["foo".to_string()]);
        let hi = &report.languages[1];
        assert_eq!((hi.native, hi.english), (1, 0));
        assert_eq!(report.key_fallbacks().count(), 2);
    }

    #[test]
    fn builtin_never_needs_key_fallback() {
        assert_eq!(coverage(&Catalog::builtin()).key_fallbacks().count(), 0);
    }
}
