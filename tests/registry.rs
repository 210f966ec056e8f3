//! Registry behavior through the public API only.

use std::thread;

use famfam_flags::flags::{FLAG_CODES, PLACEHOLDER_CODE};
use famfam_flags::{resolve_icon_url, FlagKind, IconRegistry, IconResource, Locale, RowIcon};

#[test]
fn lookup_by_locale_matches_lookup_by_code() {
    let registry = IconRegistry::global();
    for tag in ["en-US", "en_US", "en_US.UTF-8", "es-US"] {
        let locale = Locale::parse(tag).unwrap();
        assert_eq!(registry.lookup_by_locale(&locale), registry.lookup_by_code("US"), "{tag}");
    }
}

#[test]
fn language_only_locale_has_no_flag() {
    let registry = IconRegistry::global();
    let locale = Locale::parse("fr").unwrap();
    assert!(registry.lookup_by_locale(&locale).is_none());
    assert!(RowIcon::for_locale(registry, &locale).is_placeholder());
}

#[test]
fn pseudo_codes_are_kept() {
    let registry = IconRegistry::global();
    for (code, kind) in [
        ("AN", FlagKind::Legacy),
        ("CS", FlagKind::Legacy),
        ("ENGLAND", FlagKind::Region),
        ("EUROPEANUNION", FlagKind::Region),
        (PLACEHOLDER_CODE, FlagKind::Placeholder),
    ] {
        let entry = registry.lookup_by_code(code).unwrap();
        assert_eq!(entry.kind(), kind, "{code}");
        assert_eq!(entry.resource_path(), resolve_icon_url(code));
    }
}

#[test]
fn configured_base_path_keeps_path_shape() {
    let registry = IconRegistry::with_base_path("https://cdn.example.com/flags/");
    let gb = registry.lookup_by_code("GB").unwrap();
    assert_eq!(gb.url(), "https://cdn.example.com/flags/gb.png");
    assert_eq!(registry.resolve_icon_url("Scotland"), "https://cdn.example.com/flags/scotland.png");
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = FLAG_CODES
        .chunks(50)
        .map(|chunk| {
            thread::spawn(move || {
                let registry = IconRegistry::global();
                chunk.iter().all(|flag| registry.contains(flag.code))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
