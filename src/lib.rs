// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-forge — per-language translation file generator.
//!
//! Materializes `<base_dir>/<code>/translation.json` for every supported
//! language from a sparse translation catalog. Each value resolves through
//! a three-tier fallback: the language's own entry, then English, then the
//! key with its first letter upper-cased.
//!
//! MODULES:
//! 1. **i18n**: the built-in catalog and ISO 639 code metadata.
//! 2. **resolve**: fallback resolution and coverage statistics.
//! 3. **generate**: writes every language's document.
//! 4. **fill**: repairs an existing locale tree against English.

pub mod fill;
pub mod generate;
pub mod i18n;
pub mod report;
pub mod resolve;
pub mod storage;
pub mod types;
