// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fill: repair an existing locale tree against the English document
//!
//! Every language directory other than `en` gets each English key whose
//! value is absent, empty, null or not a string copied in from English.
//! Every other entry in the language document is kept as it was, including
//! keys English does not have. Files are rewritten only when something
//! was filled or the document did not exist yet.

use crate::storage;
use crate::types::{FillOutcome, FillReport, LocaleDocument, ENGLISH};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Fill missing keys in every language under `base_dir`.
pub fn run(base_dir: &Path, quiet: bool) -> Result<FillReport> {
    let reference_path = storage::document_path(base_dir, ENGLISH);
    let reference = storage::read_document(&reference_path)
        .with_context(|| format!("loading reference {} document", ENGLISH))?;

    let mut outcomes = Vec::new();
    for code in storage::language_dirs(base_dir)? {
        if code == ENGLISH {
            continue;
        }

        let path = storage::document_path(base_dir, &code);
        let existed = path.is_file();
        let current = if existed {
            match storage::read_entries(&path) {
                Ok(entries) => entries,
                Err(err) => {
                    eprintln!("warning: error reading {} ({:#}), treating as empty", code, err);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        let (filled_entries, filled) = fill_entries(&reference, current);
        let written = filled > 0 || !existed;
        if written {
            storage::write_entries(base_dir, &code, &filled_entries)
                .with_context(|| format!("updating {} locale", code))?;
            if !quiet {
                println!("Updated {}: {} keys filled.", code, filled);
            }
        }

        outcomes.push(FillOutcome {
            code,
            path,
            filled,
            written,
        });
    }

    Ok(FillReport {
        base_dir: base_dir.to_path_buf(),
        reference_keys: reference.len(),
        outcomes,
    })
}

/// Copy reference values into `target` wherever `target` lacks the key or
/// holds an empty string, `null` or a non-string value. Returns the merged
/// entries and the fill count.
pub fn fill_entries(
    reference: &LocaleDocument,
    mut target: BTreeMap<String, Value>,
) -> (BTreeMap<String, Value>, usize) {
    let mut filled = 0;
    for (key, value) in reference.iter() {
        let usable = matches!(target.get(key), Some(Value::String(s)) if !s.is_empty());
        if !usable {
            target.insert(key.to_string(), Value::String(value.to_string()));
            filled += 1;
        }
    }
    (target, filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, &str)]) -> LocaleDocument {
        let mut d = LocaleDocument::new();
        for &(k, v) in pairs {
            d.insert(k, v);
        }
        d
    }

    fn entries(json: &str) -> BTreeMap<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn fills_absent_and_empty_values() {
        let en = doc(&[("menu", "MENU"), ("login", "Login"), ("about", "About Us")]);
        let hi = entries(r#"{"menu": "मेनू", "login": ""}"#);

        let (merged, filled) = fill_entries(&en, hi);
        assert_eq!(filled, 2);
        assert_eq!(merged["menu"], "मेनू");
        assert_eq!(merged["login"], "Login");
        assert_eq!(merged["about"], "About Us");
    }

    #[test]
    fn keeps_language_only_keys() {
        let en = doc(&[("menu", "MENU")]);
        let hi = entries(r#"{"menu": "मेनू", "extra": "अतिरिक्त"}"#);

        let (merged, filled) = fill_entries(&en, hi.clone());
        assert_eq!(filled, 0);
        assert_eq!(merged, hi);
    }

    #[test]
    fn empty_english_value_is_still_copied() {
        let en = doc(&[("menu", "")]);
        let (merged, filled) = fill_entries(&en, BTreeMap::new());
        assert_eq!(filled, 1);
        assert_eq!(merged["menu"], "");
    }

    #[test]
    fn non_string_values_are_replaced_only_for_english_keys() {
        let en = doc(&[("menu", "MENU"), ("login", "Login"), ("about", "About Us")]);
        let hi = entries(r#"{"menu": "मेनू", "login": null, "about": 7, "count": 3}"#);

        let (merged, filled) = fill_entries(&en, hi);
        assert_eq!(filled, 2);
        assert_eq!(merged["menu"], "मेनू");
        assert_eq!(merged["login"], "Login");
        assert_eq!(merged["about"], "About Us");
        assert_eq!(merged["count"], 3);
    }
}
