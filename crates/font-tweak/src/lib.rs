//! # UFO Tweaks
//!
//! One-shot scripted edits of UFO font sources: fontinfo attributes, lib keys,
//! and glyph drop, rename and unicode assignment.
//!
//! ## Example
//!
//! ```no_run
//! use ufotweak_font_tweak::{InfoAssignment, Tweaks};
//!
//! let mut font = norad::Font::load("MyFont-Regular.ufo").unwrap();
//! let tweaks = Tweaks::new()
//!     .with_info([InfoAssignment::parse("versionMinor=2").unwrap()])
//!     .with_drop(["uni0000"]);
//! let summary = tweaks.apply(&mut font).unwrap();
//! println!("{summary}");
//! font.save("MyFont-Regular.ufo").unwrap();
//! ```

mod error;
mod font_lib;
mod glyphs;
mod info;

use std::fmt;

use log::info;
use norad::Font;

pub use error::{Error, Result};
pub use font_lib::{LibAssignment, apply_lib};
pub use glyphs::{
    GlyphRename, GlyphUnicodes, drop_glyphs, parse_glyph_list, rename_glyphs, set_unicodes,
};
pub use info::{INFO_ATTRIBUTES, InfoAssignment, InfoKind, apply_info, info_kind};

/// A batch of edits applied to a font in a fixed order:
/// fontinfo, lib, glyph drop, glyph rename, unicodes.
///
/// Unicode assignments therefore name glyphs by their renamed names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tweaks {
    pub info: Vec<InfoAssignment>,
    pub lib: Vec<LibAssignment>,
    pub drop: Vec<String>,
    pub rename: Vec<GlyphRename>,
    pub unicodes: Vec<GlyphUnicodes>,
}

/// What a [`Tweaks::apply`] call changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TweakSummary {
    pub info: usize,
    pub lib: usize,
    pub dropped: usize,
    pub renamed: usize,
    pub unicodes: usize,
}

impl Tweaks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info(mut self, info: impl IntoIterator<Item = InfoAssignment>) -> Self {
        self.info.extend(info);
        self
    }

    pub fn with_lib(mut self, lib: impl IntoIterator<Item = LibAssignment>) -> Self {
        self.lib.extend(lib);
        self
    }

    pub fn with_drop(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.drop.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_rename(mut self, renames: impl IntoIterator<Item = GlyphRename>) -> Self {
        self.rename.extend(renames);
        self
    }

    pub fn with_unicodes(mut self, unicodes: impl IntoIterator<Item = GlyphUnicodes>) -> Self {
        self.unicodes.extend(unicodes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
            && self.lib.is_empty()
            && self.drop.is_empty()
            && self.rename.is_empty()
            && self.unicodes.is_empty()
    }

    /// Apply all edits to `font`, stopping at the first error.
    ///
    /// On error the font may be partially edited; callers that save should
    /// discard it.
    pub fn apply(&self, font: &mut Font) -> Result<TweakSummary> {
        apply_info(&mut font.font_info, &self.info)?;
        apply_lib(&mut font.lib, &self.lib);
        let dropped = drop_glyphs(font, &self.drop).len();
        rename_glyphs(font, &self.rename)?;
        set_unicodes(font, &self.unicodes)?;

        let summary = TweakSummary {
            info: self.info.len(),
            lib: self.lib.len(),
            dropped,
            renamed: self.rename.len(),
            unicodes: self.unicodes.len(),
        };
        info!("Applied tweaks: {summary}");
        Ok(summary)
    }
}

impl fmt::Display for TweakSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fontinfo, {} lib, {} dropped, {} renamed, {} unicodes",
            self.info, self.lib, self.dropped, self.renamed, self.unicodes
        )
    }
}
