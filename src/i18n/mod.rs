// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation data for locale-forge.
//!
//! ## Built-in languages
//!
//! English plus the 22 scheduled languages of India:
//!
//! | Code | Language  | Code | Language  |
//! |------|-----------|------|-----------|
//! | en   | English   | as   | Assamese  |
//! | hi   | Hindi     | mai  | Maithili  |
//! | bn   | Bengali   | sat  | Santali   |
//! | te   | Telugu    | ks   | Kashmiri  |
//! | mr   | Marathi   | ne   | Nepali    |
//! | ta   | Tamil     | kok  | Konkani   |
//! | ur   | Urdu      | sd   | Sindhi    |
//! | gu   | Gujarati  | doi  | Dogri     |
//! | kn   | Kannada   | mni  | Manipuri  |
//! | ml   | Malayalam | brx  | Bodo      |
//! | or   | Odia      | sa   | Sanskrit  |
//! | pa   | Punjabi   |      |           |
//!
//! ## Design
//!
//! The table is sparse: most keys only carry a handful of languages. Lookups
//! fall back to English, then to the capitalized key (see
//! [`crate::resolve`]), so every language still gets a complete document.

mod catalog;
mod iso639;

pub use catalog::Catalog;
pub use iso639::{is_known_code, is_valid_iso639_1, language_name};
