//! Locale rows for listing locales next to their flags.
//!
//! This is the consumer side of the registry: a locale whose region has no
//! flag gets the question mark placeholder instead of an empty cell.

use std::borrow::Cow;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::flags::{IconEntry, IconRegistry, IconResource};
use crate::locale::{available_locales, Locale, RegionSource};

/// Icon shown for locales without a matching flag.
pub const QUESTION_MARK_URL: &str = "icons/question-circle.svg";
const QUESTION_MARK_MIME_TYPE: &str = "image/svg+xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon<'a> {
    Flag(&'a IconEntry),
    QuestionMark,
}

impl<'a> RowIcon<'a> {
    pub fn for_locale(registry: &'a IconRegistry, locale: &Locale) -> Self {
        registry
            .lookup_by_locale(locale)
            .map_or(RowIcon::QuestionMark, RowIcon::Flag)
    }

    pub fn for_code(registry: &'a IconRegistry, code: &str) -> Self {
        registry
            .lookup_by_code(code)
            .map_or(RowIcon::QuestionMark, RowIcon::Flag)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RowIcon::QuestionMark)
    }
}

impl IconResource for RowIcon<'_> {
    fn url(&self) -> Cow<'_, str> {
        match self {
            RowIcon::Flag(entry) => entry.url(),
            RowIcon::QuestionMark => Cow::Borrowed(QUESTION_MARK_URL),
        }
    }

    fn mime_type(&self) -> &str {
        match self {
            RowIcon::Flag(entry) => entry.mime_type(),
            RowIcon::QuestionMark => QUESTION_MARK_MIME_TYPE,
        }
    }
}

impl Serialize for RowIcon<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RowIcon", 3)?;
        state.serialize_field("placeholder", &self.is_placeholder())?;
        state.serialize_field("url", &self.url())?;
        state.serialize_field("mime_type", self.mime_type())?;
        state.end()
    }
}

/// One locale with its icon and display names.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleRow<'a> {
    #[serde(serialize_with = "serialize_tag")]
    locale: Locale,
    icon: RowIcon<'a>,
    display_country: String,
    display_language: String,
    country_code: String,
}

fn serialize_tag<S: Serializer>(locale: &Locale, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(locale)
}

impl<'a> LocaleRow<'a> {
    pub fn new(locale: Locale, registry: &'a IconRegistry) -> Self {
        let icon = RowIcon::for_locale(registry, &locale);
        let country_code = locale.region().unwrap_or_default().to_string();
        let display_country = match icon {
            RowIcon::Flag(entry) => entry.name().to_string(),
            RowIcon::QuestionMark => country_code.clone(),
        };
        let display_language = locale.display_language().to_string();

        Self {
            locale,
            icon,
            display_country,
            display_language,
            country_code,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn icon(&self) -> RowIcon<'a> {
        self.icon
    }

    pub fn display_country(&self) -> &str {
        &self.display_country
    }

    pub fn display_language(&self) -> &str {
        &self.display_language
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Text shown when this row gets selected.
    pub fn summary(&self) -> String {
        format!(
            "The country has changed to \"{}\"\n- Language: {}\n- Code (ISO 3166-2): {}\n",
            self.display_country, self.display_language, self.country_code
        )
    }
}

/// Rows for every available locale that has a region component.
pub fn available_rows(registry: &IconRegistry) -> Vec<LocaleRow<'_>> {
    let rows: Vec<_> = available_locales()
        .into_iter()
        .filter(|locale| locale.region().is_some())
        .map(|locale| LocaleRow::new(locale, registry))
        .collect();

    let missing = rows.iter().filter(|r| r.icon.is_placeholder()).count();
    debug!(rows = rows.len(), missing, "Built locale rows");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_flag() {
        let registry = IconRegistry::new();
        let row = LocaleRow::new(Locale::parse("ja-JP").unwrap(), &registry);

        assert_eq!(row.display_country(), "Japan");
        assert_eq!(row.display_language(), "Japanese");
        assert_eq!(row.country_code(), "JP");
        assert_eq!(row.icon().url(), "vaadin://addons/famfamflags/jp.png");
        assert_eq!(row.icon().mime_type(), "image/png");
    }

    #[test]
    fn test_row_without_flag_uses_placeholder() {
        let registry = IconRegistry::new();
        let row = LocaleRow::new(Locale::parse("es-419").unwrap(), &registry);

        assert!(row.icon().is_placeholder());
        assert_eq!(row.icon().url(), QUESTION_MARK_URL);
        assert_eq!(row.display_country(), "419");
    }

    #[test]
    fn test_for_code() {
        let registry = IconRegistry::new();

        let icon = RowIcon::for_code(&registry, "ZZ");
        assert!(icon.is_placeholder());
        assert_eq!(icon.url(), QUESTION_MARK_URL);
        assert_eq!(icon.mime_type(), "image/svg+xml");

        let icon = RowIcon::for_code(&registry, "DE");
        assert_eq!(icon, RowIcon::Flag(registry.lookup_by_code("DE").unwrap()));
    }

    #[test]
    fn test_available_rows_skip_language_only() {
        let registry = IconRegistry::new();
        let rows = available_rows(&registry);

        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| !r.country_code().is_empty()));
        assert!(rows.iter().all(|r| r.locale().to_string() != "de"));
    }

    #[test]
    fn test_summary() {
        let registry = IconRegistry::new();
        let row = LocaleRow::new(Locale::parse("fr_CA").unwrap(), &registry);
        assert_eq!(
            row.summary(),
            "The country has changed to \"Canada\"\n- Language: French\n- Code (ISO 3166-2): CA\n"
        );
    }

    #[test]
    fn test_row_json() {
        let registry = IconRegistry::new();
        let row = LocaleRow::new(Locale::parse("en-US").unwrap(), &registry);
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["locale"], "en-US");
        assert_eq!(json["icon"]["placeholder"], false);
        assert_eq!(json["icon"]["url"], "vaadin://addons/famfamflags/us.png");
        assert_eq!(json["country_code"], "US");
    }
}
