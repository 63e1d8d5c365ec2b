// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reading and writing locale documents on disk
//!
//! Layout: `<base_dir>/<language_code>/translation.json`.

use crate::types::{LocaleDocument, DOCUMENT_FILE_NAME};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding one language's document.
pub fn language_dir(base_dir: &Path, code: &str) -> PathBuf {
    base_dir.join(code)
}

/// Full path of one language's document.
pub fn document_path(base_dir: &Path, code: &str) -> PathBuf {
    language_dir(base_dir, code).join(DOCUMENT_FILE_NAME)
}

/// Serialize a document as pretty-printed UTF-8 JSON. Non-ASCII text is
/// written literally, never as `\u` escapes.
pub fn encode_document<T: Serialize + ?Sized>(doc: &T) -> Result<String> {
    serde_json::to_string_pretty(doc).context("serializing locale document")
}

/// Write `doc` for `code`, creating directories as needed and replacing any
/// existing file.
pub fn write_document(base_dir: &Path, code: &str, doc: &LocaleDocument) -> Result<PathBuf> {
    write_json(base_dir, code, doc)
}

/// Write a document that may hold non-string values, as read by
/// [`read_entries`].
pub fn write_entries(
    base_dir: &Path,
    code: &str,
    entries: &BTreeMap<String, Value>,
) -> Result<PathBuf> {
    write_json(base_dir, code, entries)
}

fn write_json<T: Serialize + ?Sized>(base_dir: &Path, code: &str, doc: &T) -> Result<PathBuf> {
    let dir = language_dir(base_dir, code);
    fs::create_dir_all(&dir)
        .with_context(|| format!("creating locale directory {}", dir.display()))?;

    let path = dir.join(DOCUMENT_FILE_NAME);
    let payload = encode_document(doc)?;
    fs::write(&path, payload).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Read one document. Values must all be strings.
pub fn read_document(path: &Path) -> Result<LocaleDocument> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if data.trim().is_empty() {
        return Ok(LocaleDocument::new());
    }
    let doc: LocaleDocument =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(doc)
}

/// Read one document as loosely typed JSON: any value is accepted, but the
/// top level must be an object.
pub fn read_entries(path: &Path) -> Result<BTreeMap<String, Value>> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if data.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let entries: BTreeMap<String, Value> =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(entries)
}

/// Language directories directly under `base_dir`, sorted by name.
pub fn language_dirs(base_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("listing locale directory {}", base_dir.display()))?;

    let mut codes = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("reading an entry of {}", base_dir.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => codes.push(name.to_string()),
            None => eprintln!(
                "warning: skipping locale directory with a non-UTF-8 name: {}",
                path.display()
            ),
        }
    }
    codes.sort();
    Ok(codes)
}
