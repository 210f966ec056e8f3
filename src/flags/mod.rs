//! Flag icon registry - resolves country and region codes to icon resources.
//!
//! The registry is built once from the embedded [`FLAG_CODES`] table and is
//! read-only afterwards, so a single instance can be shared freely between
//! threads. Unknown codes are a normal `None`, never an error; substituting a
//! placeholder icon is up to the caller.

mod entry;
mod table;

pub use entry::{
    resolve_icon_url, resolve_icon_url_with, IconEntry, IconResource, DEFAULT_BASE_PATH,
    ICON_MIME_TYPE,
};
pub use table::{FlagCode, FlagKind, FLAG_CODES, PLACEHOLDER_CODE};

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{FlagError, Result};
use crate::locale::RegionSource;

/// Lazily-initialized registry using the default base path
static GLOBAL_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();

/// Read-only mapping from flag code to [`IconEntry`].
#[derive(Debug, Clone)]
pub struct IconRegistry {
    base_path: String,
    entries: HashMap<&'static str, IconEntry>,
}

impl IconRegistry {
    /// Build a registry from the embedded table under the default base path.
    pub fn new() -> Self {
        Self::with_base_path(DEFAULT_BASE_PATH)
    }

    /// Build a registry from the embedded table under `base_path`.
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let mut entries = HashMap::with_capacity(FLAG_CODES.len());
        for flag in FLAG_CODES {
            entries.insert(flag.code, IconEntry::new(flag, &base_path));
        }
        debug!(entries = entries.len(), base_path = %base_path, "Flag registry built");
        Self { base_path, entries }
    }

    /// Build a registry from an arbitrary table.
    ///
    /// Rejects empty and duplicate codes instead of letting a later row
    /// silently replace an earlier one.
    pub fn from_codes(base_path: impl Into<String>, rows: &'static [FlagCode]) -> Result<Self> {
        let base_path = base_path.into();
        let mut entries = HashMap::with_capacity(rows.len());
        for flag in rows {
            if flag.code.is_empty() {
                return Err(FlagError::EmptyCode);
            }
            if entries.contains_key(flag.code) {
                return Err(FlagError::DuplicateCode(flag.code.to_string()));
            }
            entries.insert(flag.code, IconEntry::new(flag, &base_path));
        }
        Ok(Self { base_path, entries })
    }

    /// Process-wide registry with the default base path, built on first use.
    pub fn global() -> &'static IconRegistry {
        GLOBAL_REGISTRY.get_or_init(IconRegistry::new)
    }

    /// Exact, case-sensitive lookup on the stored code.
    pub fn lookup_by_code(&self, code: &str) -> Option<&IconEntry> {
        self.entries.get(code)
    }

    /// Lookup by the region component of a locale.
    ///
    /// Locales without a region resolve to `None` without touching the map.
    pub fn lookup_by_locale<L>(&self, locale: &L) -> Option<&IconEntry>
    where
        L: RegionSource + ?Sized,
    {
        let region = locale.region()?;
        self.lookup_by_code(region)
    }

    /// Icon path for `code` under this registry's base path.
    pub fn resolve_icon_url(&self, code: &str) -> String {
        resolve_icon_url_with(&self.base_path, code)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.values()
    }

    /// All entries sorted by code.
    pub fn sorted_entries(&self) -> Vec<&IconEntry> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|e| e.code());
        entries
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_every_code_resolves_to_its_path() {
        let registry = IconRegistry::new();
        for flag in FLAG_CODES {
            let entry = registry.lookup_by_code(flag.code).unwrap();
            assert_eq!(entry.code(), flag.code);
            assert_eq!(
                entry.resource_path(),
                format!("{DEFAULT_BASE_PATH}{}.png", flag.code.to_ascii_lowercase())
            );
            assert_eq!(entry.mime_type(), ICON_MIME_TYPE);
        }
    }

    #[test]
    fn test_unknown_codes() {
        let registry = IconRegistry::new();
        assert!(registry.lookup_by_code("ZZ").is_none());
        assert!(registry.lookup_by_code("").is_none());
        assert!(registry.lookup_by_code("xx").is_none());
        // case sensitive on the stored key
        assert!(registry.lookup_by_code("us").is_none());
    }

    #[test]
    fn test_no_duplicate_codes() {
        let registry = IconRegistry::new();
        assert_eq!(registry.len(), FLAG_CODES.len());
        assert_eq!(registry.iter().count(), FLAG_CODES.len());
    }

    #[test]
    fn test_sorted_entries() {
        let registry = IconRegistry::new();
        let codes: Vec<_> = registry.sorted_entries().iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), FLAG_CODES.len());
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(codes.first(), Some(&"AD"));
    }

    #[test]
    fn test_lookup_by_locale() {
        let registry = IconRegistry::new();
        let en_us = Locale::parse("en-US").unwrap();
        assert_eq!(registry.lookup_by_locale(&en_us), registry.lookup_by_code("US"));

        let de = Locale::parse("de").unwrap();
        assert!(registry.lookup_by_locale(&de).is_none());
    }

    #[test]
    fn test_japan_end_to_end() {
        let registry = IconRegistry::with_base_path("/static/flags/");
        let jp = registry.lookup_by_code("JP").unwrap();
        assert_eq!(jp.resource_path(), "/static/flags/jp.png");
        assert_eq!(jp.name(), "Japan");
    }

    #[test]
    fn test_from_codes_rejects_duplicates() {
        const ROWS: &[FlagCode] = &[
            FlagCode { code: "FR", name: "France", kind: FlagKind::Country },
            FlagCode { code: "FR", name: "France", kind: FlagKind::Country },
        ];
        let err = IconRegistry::from_codes(DEFAULT_BASE_PATH, ROWS).unwrap_err();
        assert!(matches!(err, FlagError::DuplicateCode(ref code) if code == "FR"));
    }

    #[test]
    fn test_from_codes_rejects_empty_code() {
        const ROWS: &[FlagCode] = &[FlagCode { code: "", name: "", kind: FlagKind::Placeholder }];
        assert!(matches!(
            IconRegistry::from_codes(DEFAULT_BASE_PATH, ROWS),
            Err(FlagError::EmptyCode)
        ));
    }

    #[test]
    fn test_global_is_shared() {
        let a = IconRegistry::global();
        let b = IconRegistry::global();
        assert!(std::ptr::eq(a, b));
        assert!(a.contains(PLACEHOLDER_CODE));
    }
}
