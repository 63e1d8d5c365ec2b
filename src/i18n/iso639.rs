// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 language code validation and metadata.
//!
//! Covers the ISO 639-1 two-letter codes plus the ISO 639-2/3 codes needed
//! for the scheduled languages of India that have no two-letter code
//! (Maithili, Santali, Konkani, Dogri, Manipuri, Bodo).
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(locale_forge::i18n::is_valid_iso639_1("hi"));
/// assert!(!locale_forge::i18n::is_valid_iso639_1("mai"));
/// assert!(!locale_forge::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Three-letter codes accepted where no two-letter code exists.
fn is_known_iso639_3(code: &str) -> bool {
    matches!(
        code,
        "mai" | "sat" | "kok" | "doi" | "mni" | "brx" | "bho" | "awa" | "mag" | "tcy"
    )
}

/// Whether `code` is accepted as a language directory name without warning.
pub fn is_known_code(code: &str) -> bool {
    is_valid_iso639_1(code) || is_known_iso639_3(code)
}

/// Returns the English name of a language code.
///
/// Used to label directories found on disk that the catalog does not
/// describe. Returns `None` for unrecognised codes.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "hi" => Some("Hindi"),
        "bn" => Some("Bengali"),
        "te" => Some("Telugu"),
        "mr" => Some("Marathi"),
        "ta" => Some("Tamil"),
        "ur" => Some("Urdu"),
        "gu" => Some("Gujarati"),
        "kn" => Some("Kannada"),
        "ml" => Some("Malayalam"),
        "or" => Some("Odia"),
        "pa" => Some("Punjabi"),
        "as" => Some("Assamese"),
        "ks" => Some("Kashmiri"),
        "ne" => Some("Nepali"),
        "sd" => Some("Sindhi"),
        "sa" => Some("Sanskrit"),
        "mai" => Some("Maithili"),
        "sat" => Some("Santali"),
        "kok" => Some("Konkani"),
        "doi" => Some("Dogri"),
        "mni" => Some("Manipuri"),
        "brx" => Some("Bodo"),
        "bho" => Some("Bhojpuri"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "zh" => Some("Chinese"),
        "ar" => Some("Arabic"),
        "ru" => Some("Russian"),
        "pt" => Some("Portuguese"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_languages_are_known() {
        for code in ["hi", "bn", "ta", "mai", "sat", "kok", "doi", "mni", "brx", "sa"] {
            assert!(is_known_code(code), "{} should be known", code);
        }
    }

    #[test]
    fn rejects_made_up_codes() {
        assert!(!is_known_code("xx"));
        assert!(!is_known_code("EN"));
        assert!(!is_known_code(""));
    }

    #[test]
    fn names_three_letter_codes() {
        assert_eq!(language_name("brx"), Some("Bodo"));
        assert_eq!(language_name("zz"), None);
    }
}
