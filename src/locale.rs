//! Locale tags and the region accessor the flag registry consumes.
//!
//! Accepts both BCP 47 tags ("en-US", "sr-Latn-RS") and POSIX locale names
//! ("pt_BR.UTF-8", "de_DE@euro").

use std::env;
use std::fmt;

use serde::Serialize;

use crate::error::{FlagError, Result};

/// Anything that can report a country or region code.
pub trait RegionSource {
    /// Uppercase region code, or `None` when there is no region component.
    fn region(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Parse a locale tag.
    ///
    /// Variants and extensions after the region are ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let invalid = |reason| FlagError::InvalidLocale {
            tag: tag.to_string(),
            reason,
        };

        // Drop POSIX codeset and modifier ("en_US.UTF-8@euro")
        let base = tag
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if base.is_empty() {
            return Err(invalid("empty tag"));
        }

        let mut subtags = base.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if language.is_empty() {
            return Err(invalid("missing language subtag"));
        }
        if !(2..=8).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(invalid("language subtag must be 2-8 letters"));
        }

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            let alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let digits = subtag.bytes().all(|b| b.is_ascii_digit());
            match subtag.len() {
                4 if alpha && script.is_none() => script = Some(title_case(subtag)),
                2 if alpha => {
                    region = Some(subtag.to_ascii_uppercase());
                    break;
                }
                3 if digits => {
                    region = Some(subtag.to_string());
                    break;
                }
                _ => break,
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            script,
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// English name of the language, falling back to the raw code.
    pub fn display_language(&self) -> &str {
        language_name(&self.language).unwrap_or(self.language.as_str())
    }
}

impl RegionSource for Locale {
    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

fn title_case(s: &str) -> String {
    let mut out = s.to_ascii_lowercase();
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Current locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, in that order.
///
/// The `C` and `POSIX` locales carry no language and are skipped.
pub fn system_locale() -> Option<Locale> {
    let lc_all = env::var("LC_ALL").ok();
    let lc_messages = env::var("LC_MESSAGES").ok();
    let lang = env::var("LANG").ok();

    pick_locale_value(lc_all.as_deref(), lc_messages.as_deref(), lang.as_deref())
        .and_then(|value| Locale::parse(value).ok())
}

/// First usable value of `LC_ALL`, `LC_MESSAGES` and `LANG`.
fn pick_locale_value<'a>(
    lc_all: Option<&'a str>,
    lc_messages: Option<&'a str>,
    lang: Option<&'a str>,
) -> Option<&'a str> {
    [lc_all, lc_messages, lang]
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .find(|value| {
            let base = value.split(['.', '@']).next().unwrap_or_default();
            base != "C" && base != "POSIX"
        })
}

/// Locale tags offered by [`available_locales`].
pub const AVAILABLE_LOCALE_TAGS: &[&str] = &[
    // Language only
    "ar", "de", "en", "es", "fr", "it", "ja", "ko", "pt", "ru", "zh",
    // Americas
    "en-US", "en-CA", "fr-CA", "es-MX", "es-AR", "es-CL", "es-CO", "es-PE", "es-VE", "es-EC",
    "es-BO", "es-PY", "es-UY", "es-CR", "es-PA", "es-DO", "es-GT", "es-HN", "es-NI", "es-SV",
    "es-PR", "es-US", "pt-BR",
    // Europe
    "en-GB", "en-IE", "en-MT", "de-DE", "de-AT", "de-CH", "de-LU", "fr-FR", "fr-BE", "fr-CH",
    "fr-LU", "it-IT", "it-CH", "nl-NL", "nl-BE", "es-ES", "ca-ES", "pt-PT", "da-DK", "sv-SE",
    "nb-NO", "fi-FI", "is-IS", "et-EE", "lv-LV", "lt-LT", "pl-PL", "cs-CZ", "sk-SK", "hu-HU",
    "ro-RO", "bg-BG", "el-GR", "el-CY", "sl-SI", "hr-HR", "sr-RS", "sr-Latn-RS", "sr-ME",
    "sr-Latn-BA", "mk-MK", "sq-AL", "mt-MT", "ga-IE", "be-BY", "uk-UA", "ru-RU", "tr-TR",
    // Asia and Oceania
    "en-AU", "en-NZ", "en-IN", "en-SG", "en-PH", "hi-IN", "ja-JP", "ja-JP-JP", "ko-KR", "zh-CN",
    "zh-TW", "zh-HK", "zh-SG", "th-TH", "th-TH-TH", "vi-VN", "ms-MY", "in-ID", "iw-IL",
    // Middle East and Africa
    "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO", "ar-KW", "ar-LB", "ar-LY", "ar-MA",
    "ar-OM", "ar-QA", "ar-SA", "ar-SD", "ar-SY", "ar-TN", "ar-YE", "en-ZA",
    // Regions without a flag icon
    "es-419", "en-150",
];

/// Stand-in for the host platform's list of available locales.
pub fn available_locales() -> Vec<Locale> {
    AVAILABLE_LOCALE_TAGS
        .iter()
        .filter_map(|tag| Locale::parse(tag).ok())
        .collect()
}

/// English display name for an ISO 639-1 language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    let name = match code {
        // Western European
        "ca" => "Catalan",
        "de" => "German",
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "ga" => "Irish",
        "it" => "Italian",
        "mt" => "Maltese",
        "nl" => "Dutch",
        "pt" => "Portuguese",

        // Nordic & Baltic
        "da" => "Danish",
        "et" => "Estonian",
        "fi" => "Finnish",
        "is" => "Icelandic",
        "lt" => "Lithuanian",
        "lv" => "Latvian",
        "nb" => "Norwegian Bokmål",
        "no" => "Norwegian",
        "sv" => "Swedish",

        // Central & Eastern European
        "be" => "Belarusian",
        "bg" => "Bulgarian",
        "cs" => "Czech",
        "el" => "Greek",
        "hr" => "Croatian",
        "hu" => "Hungarian",
        "mk" => "Macedonian",
        "pl" => "Polish",
        "ro" => "Romanian",
        "ru" => "Russian",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "sq" => "Albanian",
        "sr" => "Serbian",
        "tr" => "Turkish",
        "uk" => "Ukrainian",

        // Asian
        "hi" => "Hindi",
        "id" | "in" => "Indonesian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ms" => "Malay",
        "th" => "Thai",
        "vi" => "Vietnamese",
        "zh" => "Chinese",

        // Middle Eastern
        "ar" => "Arabic",
        "he" | "iw" => "Hebrew",

        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bcp47() {
        let locale = Locale::parse("en-US").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.script(), None);
        assert_eq!(locale.region(), Some("US"));
    }

    #[test]
    fn test_parse_posix() {
        let locale = Locale::parse("pt_BR.UTF-8").unwrap();
        assert_eq!(locale.language(), "pt");
        assert_eq!(locale.region(), Some("BR"));

        let locale = Locale::parse("de_DE@euro").unwrap();
        assert_eq!(locale.region(), Some("DE"));
    }

    #[test]
    fn test_parse_script_and_case() {
        let locale = Locale::parse("SR_latn_rs").unwrap();
        assert_eq!(locale.language(), "sr");
        assert_eq!(locale.script(), Some("Latn"));
        assert_eq!(locale.region(), Some("RS"));
        assert_eq!(locale.to_string(), "sr-Latn-RS");
    }

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("ja").unwrap();
        assert_eq!(locale.region(), None);
        assert_eq!(locale.display_language(), "Japanese");
    }

    #[test]
    fn test_parse_numeric_region_and_variant() {
        assert_eq!(Locale::parse("es-419").unwrap().region(), Some("419"));
        assert_eq!(Locale::parse("th-TH-TH").unwrap().region(), Some("TH"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(Locale::parse(""), Err(FlagError::InvalidLocale { .. })));
        assert!(matches!(Locale::parse("_US"), Err(FlagError::InvalidLocale { .. })));
        assert!(matches!(Locale::parse("e1-US"), Err(FlagError::InvalidLocale { .. })));
    }

    #[test]
    fn test_available_locales_all_parse() {
        assert_eq!(available_locales().len(), AVAILABLE_LOCALE_TAGS.len());
    }

    #[test]
    fn test_pick_locale_value_order() {
        assert_eq!(
            pick_locale_value(Some("de_DE.UTF-8"), Some("fr_FR"), Some("en_US")),
            Some("de_DE.UTF-8")
        );
        assert_eq!(pick_locale_value(None, Some("fr_FR"), Some("en_US")), Some("fr_FR"));
        assert_eq!(pick_locale_value(None, None, Some("en_US")), Some("en_US"));
        assert_eq!(pick_locale_value(None, None, None), None);
    }

    #[test]
    fn test_pick_locale_value_skips_empty_and_posix() {
        assert_eq!(pick_locale_value(Some(""), None, Some("ja_JP")), Some("ja_JP"));
        assert_eq!(pick_locale_value(Some("C.UTF-8"), None, Some("pt_BR")), Some("pt_BR"));
        assert_eq!(pick_locale_value(Some("C"), Some("POSIX"), Some("it_IT")), Some("it_IT"));
        assert_eq!(pick_locale_value(Some("C"), Some(""), Some("POSIX")), None);
    }

    #[test]
    fn test_unknown_language_name() {
        assert_eq!(language_name("xx"), None);
        assert_eq!(Locale::parse("xx-US").unwrap().display_language(), "xx");
    }
}
