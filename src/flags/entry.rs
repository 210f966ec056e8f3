//! Flag icon entries and the rendering capability they expose.

use std::borrow::Cow;

use serde::Serialize;

use super::table::{FlagCode, FlagKind};
use crate::error::{FlagError, Result};

/// Base path every icon path is derived from unless configured otherwise.
pub const DEFAULT_BASE_PATH: &str = "vaadin://addons/famfamflags/";

/// MIME type shared by every icon in the set.
pub const ICON_MIME_TYPE: &str = "image/png";

/// Anything a presentation layer can render as an icon.
pub trait IconResource {
    /// URL or relative path the icon is served from.
    fn url(&self) -> Cow<'_, str>;

    fn mime_type(&self) -> &str;
}

/// Icon path for `code` under the default base path.
///
/// Lowercasing follows Unicode rules, so pseudo-codes and stray non-ASCII
/// input map the same way as plain ISO codes.
pub fn resolve_icon_url(code: &str) -> String {
    resolve_icon_url_with(DEFAULT_BASE_PATH, code)
}

/// Icon path for `code` under `base_path`.
pub fn resolve_icon_url_with(base_path: &str, code: &str) -> String {
    format!("{base_path}{}.png", code.to_lowercase())
}

/// Immutable flag icon: a code paired with its derived resource path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    code: &'static str,
    name: &'static str,
    kind: FlagKind,
    resource_path: String,
    mime_type: &'static str,
}

impl IconEntry {
    pub(crate) fn new(flag: &FlagCode, base_path: &str) -> Self {
        Self {
            code: flag.code,
            name: flag.name,
            kind: flag.kind,
            resource_path: resolve_icon_url_with(base_path, flag.code),
            mime_type: ICON_MIME_TYPE,
        }
    }

    /// Country or region code, usually an uppercase ISO 3166 alpha-2 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FlagKind {
        self.kind
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Always fails: entries are fixed once the registry is built.
    #[deprecated(note = "flag icons are immutable; the MIME type is always image/png")]
    pub fn set_mime_type(&mut self, _mime_type: &str) -> Result<()> {
        Err(FlagError::ImmutableAttribute {
            code: self.code.to_string(),
            attribute: "MIME type",
        })
    }
}

impl IconResource for IconEntry {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.resource_path)
    }

    fn mime_type(&self) -> &str {
        self.mime_type
    }
}
