use std::result;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("glyph '{0}' requested for update is not in the source font")]
    MissingGlyph(String),

    #[error("glyph '{glyph}' uses component '{base}' which is not in the source font")]
    MissingComponent { glyph: String, base: String },

    #[error("only the default layer '{default}' can be updated, got {requested:?}")]
    UnsupportedLayers { default: String, requested: Vec<String> },
}

pub type Result<T> = result::Result<T, UpdateError>;
