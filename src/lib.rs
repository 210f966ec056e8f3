//! Flag icons for ISO 3166 country codes and locales.
//!
//! ```
//! use famfam_flags::{IconRegistry, Locale};
//!
//! let registry = IconRegistry::global();
//! let jp = registry.lookup_by_code("JP").unwrap();
//! assert_eq!(jp.resource_path(), "vaadin://addons/famfamflags/jp.png");
//!
//! let locale = Locale::parse("de_AT").unwrap();
//! assert_eq!(registry.lookup_by_locale(&locale).unwrap().name(), "Austria");
//! ```

pub mod config;
pub mod error;
pub mod flags;
pub mod locale;
pub mod logging;
pub mod rows;

pub use error::{FlagError, Result};
pub use flags::{resolve_icon_url, FlagKind, IconEntry, IconRegistry, IconResource};
pub use locale::{Locale, RegionSource};
pub use rows::{LocaleRow, RowIcon};
