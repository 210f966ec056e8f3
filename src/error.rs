//! Crate-wide error type

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("{attribute} of flag icon {code} cannot be changed")]
    ImmutableAttribute {
        code: String,
        attribute: &'static str,
    },

    #[error("flag code {0} is listed more than once")]
    DuplicateCode(String),

    #[error("flag table contains an empty code")]
    EmptyCode,

    #[error("invalid locale tag {tag:?}: {reason}")]
    InvalidLocale { tag: String, reason: &'static str },

    #[error("failed to load config from {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = FlagError> = std::result::Result<T, E>;
