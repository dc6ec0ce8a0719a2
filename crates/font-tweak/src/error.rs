//! Error types for UFO tweaks.

use std::result;

/// Errors that can occur while tweaking a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected KEY=VALUE, got '{0}'")]
    InvalidAssignment(String),

    #[error("unknown fontinfo attribute '{0}'")]
    UnknownInfoAttribute(String),

    #[error("fontinfo attribute '{0}' has a structured value and can't be set from the command line")]
    UnsupportedInfoAttribute(String),

    #[error("invalid value '{value}' for fontinfo attribute '{key}': {reason}")]
    InvalidInfoValue { key: String, value: String, reason: String },

    #[error("invalid unicode assignment '{0}', expected NAME:HEX[,HEX...]")]
    InvalidUnicodeSpec(String),

    #[error("invalid rename '{0}', expected OLD:NEW")]
    InvalidRenameSpec(String),

    #[error("invalid glyph name '{0}'")]
    InvalidGlyphName(String),

    #[error("no glyph named '{0}' in the default layer")]
    MissingGlyph(String),

    #[error("a glyph named '{0}' already exists")]
    GlyphExists(String),

    #[error("failed to convert fontinfo: {0}")]
    Plist(#[from] plist::Error),
}

pub type Result<T> = result::Result<T, Error>;
