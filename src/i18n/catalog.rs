// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for locale-forge.
//!
//! Holds the supported languages and the sparse translation table. The
//! built-in catalog is embedded at compile time as static data; a
//! replacement can be loaded from a JSON or YAML file with the same shape:
//!
//! ```yaml
//! languages:
//!   - { code: en, name: English }
//!   - { code: hi, name: Hindi }
//! translations:
//!   menu: { en: MENU, hi: "मेनू" }
//! ```
//!
//! ## Adding a new key
//!
//! 1. Add the key with at least its English entry to `TRANSLATIONS`
//! 2. Add whatever translations exist (missing ones fall back to English)

use super::iso639::is_known_code;
use crate::types::{Language, LanguageCode, TranslationTable};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path};

/// Supported languages plus the translation table they are generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub languages: Vec<Language>,
    #[serde(default)]
    pub translations: TranslationTable,
}

impl Catalog {
    pub fn new(languages: Vec<Language>, translations: TranslationTable) -> Self {
        Self {
            languages,
            translations,
        }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let languages = LANGUAGES
            .iter()
            .map(|&(code, name)| Language::new(code, name))
            .collect();

        let translations = TRANSLATIONS
            .iter()
            .map(|&(key, entries)| {
                let per_lang: BTreeMap<LanguageCode, String> = entries
                    .iter()
                    .map(|&(code, text)| (code.to_string(), text.to_string()))
                    .collect();
                (key.to_string(), per_lang)
            })
            .collect();

        Self::new(languages, translations)
    }

    /// Load a catalog from disk. `.yaml`/`.yml` files are parsed as YAML,
    /// anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        let catalog: Catalog = if is_yaml {
            serde_yaml::from_str(&data)
                .with_context(|| format!("parsing YAML catalog {}", path.display()))?
        } else {
            serde_json::from_str(&data)
                .with_context(|| format!("parsing JSON catalog {}", path.display()))?
        };

        catalog.validate()?;
        for warning in catalog.warnings() {
            eprintln!("warning: {}", warning);
        }
        Ok(catalog)
    }

    /// Reject catalogs that cannot produce any output.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("catalog declares no languages");
        }
        let mut seen = BTreeSet::new();
        for lang in &self.languages {
            if lang.code.trim().is_empty() {
                bail!("catalog contains a language with an empty code");
            }
            if !is_plain_component(&lang.code) {
                bail!(
                    "language code '{}' must be a single directory name",
                    lang.code
                );
            }
            if !seen.insert(lang.code.as_str()) {
                bail!("language '{}' is declared more than once", lang.code);
            }
        }
        Ok(())
    }

    /// Non-fatal problems: unrecognised language codes and translation
    /// entries for languages the catalog does not declare.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for lang in &self.languages {
            if !is_known_code(&lang.code) {
                warnings.push(format!(
                    "'{}' ({}) is not a recognised ISO 639 code",
                    lang.code, lang.name
                ));
            }
        }

        let declared: BTreeSet<&str> = self.codes().collect();
        let mut undeclared: BTreeMap<&str, usize> = BTreeMap::new();
        for entries in self.translations.values() {
            for code in entries.keys() {
                if !declared.contains(code.as_str()) {
                    *undeclared.entry(code.as_str()).or_default() += 1;
                }
            }
        }
        for (code, count) in undeclared {
            warnings.push(format!(
                "{} translation(s) for undeclared language '{}' will never be written",
                count, code
            ));
        }

        warnings
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|lang| lang.code.as_str())
    }

    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Keep only the given languages, in the order they were requested.
    pub fn restrict<S: AsRef<str>>(mut self, codes: &[S]) -> Result<Self> {
        let mut selected = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref().trim();
            match self.language(code) {
                Some(lang) => {
                    if !selected.iter().any(|l: &Language| l.code == code) {
                        selected.push(lang.clone());
                    }
                }
                None => bail!("unsupported language code '{}'", code),
            }
        }
        if selected.is_empty() {
            bail!("no languages selected");
        }
        self.languages = selected;
        Ok(self)
    }
}

/// Codes become directory names under the output base; they must not
/// contain separators or refer to `.`/`..`.
fn is_plain_component(code: &str) -> bool {
    if code.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(code).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == code
    )
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ─── Built-in languages ─────────────────────────────────────────────

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("bn", "Bengali"),
    ("te", "Telugu"),
    ("mr", "Marathi"),
    ("ta", "Tamil"),
    ("ur", "Urdu"),
    ("gu", "Gujarati"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("or", "Odia"),
    ("pa", "Punjabi"),
    ("as", "Assamese"),
    ("mai", "Maithili"),
    ("sat", "Santali"),
    ("ks", "Kashmiri"),
    ("ne", "Nepali"),
    ("kok", "Konkani"),
    ("sd", "Sindhi"),
    ("doi", "Dogri"),
    ("mni", "Manipuri"),
    ("brx", "Bodo"),
    ("sa", "Sanskrit"),
];

// ─── Built-in translations ──────────────────────────────────────────

const TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "menu",
        &[
            ("en", "MENU"),
            ("hi", "मेनू"),
            ("bn", "মেনু"),
            ("te", "మెనూ"),
            ("mr", "मेनू"),
            ("ta", "மெனு"),
            ("gu", "મેનુ"),
            ("kn", "ಮೆನು"),
            ("ml", "മെനു"),
            ("pa", "ਮੇਨੂ"),
        ],
    ),
    (
        "dashboard",
        &[
            ("en", "Dashboard"),
            ("hi", "डैशबोर्ड"),
            ("bn", "ডैशবোর্ড"),
            ("te", "డాష్‌బోర్డ్"),
            ("mr", "डॅशबोर्ड"),
            ("ta", "டாஷ்போர்டு"),
            ("gu", "ડેશબોર્ડ"),
            ("kn", "ಡ್ಯಾಶ್‌ಬೋರ್ಡ್"),
            ("ml", "ഡാഷ്‌ബോർഡ്"),
            ("pa", "ਡੈਸ਼ਬੋਰਡ"),
        ],
    ),
    (
        "exams",
        &[
            ("en", "Exams"),
            ("hi", "परीक्षाएँ"),
            ("bn", "পরীক্ষা"),
            ("te", "పరీక్షలు"),
            ("mr", "परीक्षा"),
            ("ta", "தேர்வுகள்"),
            ("gu", "પરીક્ષાઓ"),
            ("kn", "ಪರೀಕ್ಷೆಗಳು"),
            ("ml", "പരീക്ഷകൾ"),
            ("pa", "ਪ੍ਰੀਖਿਆਵਾਂ"),
        ],
    ),
    (
        "photoStudio",
        &[
            ("en", "Photo Studio"),
            ("hi", "फोटो स्टूडियो"),
            ("bn", "ফটো স্টুডিও"),
            ("te", "ఫోటో స్టూడియో"),
            ("mr", "फोटो स्टुडिओ"),
            ("ta", "புகைப்பட ஸ்டுடியோ"),
            ("gu", "ફોટો સ્ટુડિયો"),
            ("kn", "ಫೋಟೋ ಸ್ಟುಡಿಯೋ"),
            ("ml", "ഫോട്ടോ സ്റ്റുഡിയോ"),
            ("pa", "ਫੋਟੋ ਸਟੂਡੀਓ"),
        ],
    ),
    (
        "pdfTools",
        &[
            ("en", "PDF Tools"),
            ("hi", "पीडीएफ उपकरण"),
            ("bn", "পিডিএফ টুলস"),
            ("te", "PDF సాధనాలు"),
            ("mr", "पीडीएफ टूल्स"),
            ("ta", "PDF கருவிகள்"),
            ("gu", "PDF સાધનો"),
            ("kn", "PDF ಉಪಕರಣಗಳು"),
            ("ml", "PDF ഉപകരണങ്ങൾ"),
            ("pa", "PDF ਟੂਲ"),
        ],
    ),
    (
        "login",
        &[
            ("en", "Login"),
            ("hi", "लॉग इन"),
            ("bn", "লগ ইন"),
            ("te", "లాగిన్"),
            ("mr", "लॉग इन"),
            ("ta", "உள்நுழைய"),
            ("gu", "લૉગ ઇન"),
            ("kn", "ಲಾಗಿನ್"),
            ("ml", "ലോഗിൻ"),
            ("pa", "ਲਾਗਇਨ"),
        ],
    ),
    (
        "logout",
        &[
            ("en", "Logout"),
            ("hi", "लॉग आउट"),
            ("bn", "লগ আউট"),
            ("te", "లాగ్ అవుట్"),
            ("mr", "लॉग आउट"),
            ("ta", "வெளியேறு"),
            ("gu", "લોગ આઉટ"),
            ("kn", "ಲಾಗ್ ಔಟ್"),
            ("ml", "ലോഗ് ഔട്ട്"),
            ("pa", "ਲਾਗ ਆਉਟ"),
        ],
    ),
    (
        "guestUser",
        &[
            ("en", "Guest User"),
            ("hi", "अतिथि उपयोगकर्ता"),
            ("bn", "অতিথি ব্যবহারকারী"),
            ("te", "అతిథి వినియోగదారు"),
            ("mr", "अतिथी वापरकर्ता"),
            ("ta", "விருந்தினர்"),
            ("gu", "મહેમાન વપરાશકર્તા"),
            ("kn", "ಅತಿಥಿ ಬಳಕೆದಾರ"),
            ("ml", "അതിഥി ഉപയോക്താവ്"),
            ("pa", "ਮਹਿਮਾਨ ਉਪਭੋਗਤਾ"),
        ],
    ),
    (
        "member",
        &[
            ("en", "Member"),
            ("hi", "सदस्य"),
            ("bn", "সদস্য"),
            ("te", "సభ్యుడు"),
            ("mr", "सदस्य"),
            ("ta", "உறுப்பினர்"),
            ("gu", "સભ્ય"),
            ("kn", "ಸದಸ್ಯ"),
            ("ml", "അംഗം"),
            ("pa", "ਮੈਂਬਰ"),
        ],
    ),
    (
        "limitedAccess",
        &[
            ("en", "Limited Access"),
            ("hi", "सीमित पहुंच"),
            ("bn", "সীমিত অ্যাক্সেস"),
            ("te", "పరిమిత ప్రాప్యత"),
            ("mr", "मर्यादित प्रवेश"),
            ("ta", "வரையறுக்கப்பட்ட அணுகல்"),
            ("gu", "મર્યાદિત ઍક્સેસ"),
            ("kn", "ಸೀಮಿತ ಪ್ರವೇಶ"),
            ("ml", "പരിമിതമായ ആക്സസ്"),
            ("pa", "ਸੀਮਤ ਪਹੁੰਚ"),
        ],
    ),
    (
        "theme",
        &[
            ("en", "Dark Mode"),
            ("hi", "डार्क मोड"),
            ("bn", "ডার্ক মোড"),
            ("ta", "டார்க் மோட்"),
        ],
    ),
    (
        "lightMode",
        &[
            ("en", "Light Mode"),
            ("hi", "लाइट मोड"),
            ("bn", "লাইট মোড"),
            ("ta", "லைட் மோட்"),
        ],
    ),
    (
        "language",
        &[
            ("en", "Language"),
            ("hi", "भाषा"),
            ("bn", "ভাষা"),
            ("te", "భాష"),
            ("mr", "भाषा"),
            ("ta", "மொழி"),
            ("gu", "ભાષા"),
            ("kn", "ಭಾಷೆ"),
            ("ml", "ഭാഷ"),
            ("pa", "ਭਾਸ਼ਾ"),
        ],
    ),
    (
        "selectLanguage",
        &[
            ("en", "Select Language"),
            ("hi", "भाषा चुनें"),
            ("bn", "ভাষা নির্বাচন করুন"),
            ("ta", "மொழியைத் தேர்ந்தெடுக்கவும்"),
        ],
    ),
    (
        "directory",
        &[("en", "DIRECTORY"), ("hi", "निर्देशिका"), ("bn", "ডিরেক্টরি")],
    ),
    (
        "timeline",
        &[("en", "Timeline"), ("hi", "समय सीमा"), ("bn", "সময়রেখা")],
    ),
    (
        "checklist",
        &[("en", "Checklist"), ("hi", "चेकलिस्ट"), ("bn", "চেকলিস্ট")],
    ),
    (
        "protocolNote",
        &[("en", "Protocol Note"), ("hi", "प्रोटोकॉल नोट"), ("bn", "প্রোটোকল নোট")],
    ),
    (
        "officialInfo",
        &[("en", "Official Info"), ("hi", "आधिकारिक जानकारी"), ("bn", "অফিসিয়াল তথ্য")],
    ),
    (
        "visitWebsite",
        &[("en", "Visit Website"), ("hi", "वेबसाइट पर जाएं"), ("bn", "ওয়েবসাইট দেখুন")],
    ),
    (
        "quickSpecs",
        &[("en", "Quick Specs"), ("hi", "त्वरित विवरण"), ("bn", "দ্রুত স্পেসিফিকেশন")],
    ),
    (
        "overview",
        &[("en", "Overview"), ("hi", "अवलोकन"), ("bn", "ওভারভিউ")],
    ),
    (
        "examDayDos",
        &[("en", "Exam Day Dos"), ("hi", "परीक्षा के दिन क्या करें"), ("bn", "পরীক্ষার দিনের করণীয়")],
    ),
    (
        "criticalDonts",
        &[("en", "Critical Donts"), ("hi", "महत्वपूर्ण क्या न करें"), ("bn", "গুরুত্বপূর্ণ বর্জনীয়")],
    ),
    (
        "officialQuickLinks",
        &[("en", "Official Quick Links"), ("hi", "आधिकारिक त्वरित लिंक"), ("bn", "অফিসিয়াল কুইক লিঙ্ক")],
    ),
    (
        "preparationRoadmap",
        &[("en", "Preparation Roadmap"), ("hi", "तैयारी रोडमैप"), ("bn", "প্রস্তুতির রোডম্যাপ")],
    ),
    (
        "daysFound",
        &[("en", "GUIDES FOUND"), ("hi", "गाइड मिले"), ("bn", "গাইড পাওয়া গেছে")],
    ),
    (
        "latestUpdates",
        &[("en", "Latest Updates"), ("hi", "नवीनतम अपडेट"), ("bn", "সর্বশেষ আপডেট")],
    ),
    (
        "readMore",
        &[("en", "Read More"), ("hi", "और पढ़ें"), ("bn", "আরও পড়ুন")],
    ),
    (
        "launchStudio",
        &[("en", "LAUNCH STUDIO"), ("hi", "स्टूडियो लॉन्च करें"), ("bn", "স্টুডিও চালু করুন")],
    ),
    (
        "openTools",
        &[("en", "OPEN TOOLS"), ("hi", "टूल्स खोलें"), ("bn", "টুলস খুলুন")],
    ),
    (
        "stampImage",
        &[("en", "STAMP IMAGE"), ("hi", "स्टैम्प इमेज"), ("bn", "স্ট্যাম্প ইমেজ")],
    ),
    (
        "details",
        &[("en", "Details"), ("hi", "विवरण"), ("bn", "বিবরণ")],
    ),
    (
        "news",
        &[("en", "News"), ("hi", "समाचार"), ("bn", "খবর")],
    ),
    (
        "tools",
        &[("en", "Tools"), ("hi", "उपकरण"), ("bn", "সরঞ্জাম")],
    ),
    (
        "examDate",
        &[("en", "EXAM"), ("hi", "परीक्षा")],
    ),
    (
        "resultDate",
        &[("en", "RESULT"), ("hi", "परिणाम")],
    ),
    (
        "mode",
        &[("en", "Mode"), ("hi", "मोड")],
    ),
    (
        "totalMarks",
        &[("en", "Total Marks"), ("hi", "कुल अंक")],
    ),
    (
        "duration",
        &[("en", "Duration"), ("hi", "अवधि")],
    ),
    (
        "limit",
        &[("en", "Limit"), ("hi", "सीमा")],
    ),
    (
        "guides",
        &[("en", "Guides"), ("hi", "गाइड्स")],
    ),
    (
        "currentAffairs",
        &[("en", "Current Affairs"), ("hi", "करेंट अफेयर्स")],
    ),
    (
        "about",
        &[("en", "About Us"), ("hi", "हमारे बारे में")],
    ),
    (
        "contact",
        &[("en", "Contact Us"), ("hi", "संपर्क करें")],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ENGLISH;
    use std::io::Write;

    #[test]
    fn builtin_has_all_languages() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.languages.len(), 23);
        assert_eq!(catalog.languages[0].code, ENGLISH);
        assert_eq!(catalog.language("mai").unwrap().name, "Maithili");
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn builtin_keys_all_have_english() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translations.len(), TRANSLATIONS.len());
        for (key, entries) in &catalog.translations {
            assert!(entries.contains_key(ENGLISH), "'{}' lacks English", key);
        }
    }

    #[test]
    fn builtin_has_no_warnings() {
        assert!(Catalog::builtin().warnings().is_empty());
    }

    #[test]
    fn restrict_keeps_requested_order() {
        let catalog = Catalog::builtin().restrict(&["ta", "en"]).unwrap();
        let codes: Vec<&str> = catalog.codes().collect();
        assert_eq!(codes, vec!["ta", "en"]);
    }

    #[test]
    fn restrict_rejects_unknown_code() {
        let err = Catalog::builtin().restrict(&["xx"]).unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn validate_rejects_empty_and_duplicate_languages() {
        let empty = Catalog::new(Vec::new(), TranslationTable::new());
        assert!(empty.validate().is_err());

        let dup = Catalog::new(
            vec![Language::new("en", "English"), Language::new("en", "English")],
            TranslationTable::new(),
        );
        assert!(dup.validate().is_err());
    }

    #[test]
    fn validate_rejects_codes_that_leave_the_output_tree() {
        for code in ["../../escaped", "..", ".", "hi/extra", "hi\\extra", "/abs", "hi/"] {
            let catalog = Catalog::new(vec![Language::new(code, "x")], TranslationTable::new());
            let err = catalog.validate().unwrap_err();
            assert!(
                err.to_string().contains("single directory name"),
                "{:?} should be rejected",
                code
            );
        }
        let catalog = Catalog::new(vec![Language::new("mai", "Maithili")], TranslationTable::new());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn warns_about_undeclared_languages() {
        let mut table = TranslationTable::new();
        table.insert(
            "menu".into(),
            [("en".to_string(), "MENU".to_string()), ("fr".to_string(), "MENU".to_string())]
                .into_iter()
                .collect(),
        );
        let catalog = Catalog::new(vec![Language::new("en", "English")], table);
        let warnings = catalog.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'fr'"));
    }

    #[test]
    fn loads_yaml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "languages:\n  - {{ code: en, name: English }}\n  - {{ code: hi, name: Hindi }}\ntranslations:\n  menu: {{ en: MENU, hi: \"मेनू\" }}\n"
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.languages.len(), 2);
        assert_eq!(catalog.translations["menu"]["hi"], "मेनू");
    }

    #[test]
    fn loads_json_catalog() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"languages":[{{"code":"en","name":"English"}}],"translations":{{"foo":{{}}}}}}"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert!(catalog.translations["foo"].is_empty());
    }

    #[test]
    fn malformed_catalog_names_the_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing JSON catalog"));
    }
}
