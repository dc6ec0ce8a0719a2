//! # UFO font updater
//!
//! Merge a set of glyphs from one UFO font source into another, together with
//! the component glyphs they depend on, and keep the target's groups and
//! kerning consistent with the merged glyphs.
//!
//! ## Example
//!
//! ```no_run
//! use norad::Font;
//! use ufotweak_font_updater::{UpdateOptions, Updater};
//!
//! let source = Font::load("Source.ufo").unwrap();
//! let target = Font::load("Target.ufo").unwrap();
//! let options = UpdateOptions::new().overwrite_components(true);
//! let updated = Updater::new(&source, target, ["Aacute", "Eacute"], options)
//!     .merge()
//!     .unwrap();
//! updated.save("Target.ufo").unwrap();
//! ```

mod closure;
mod error;
#[cfg(test)]
mod fake;
mod groups;
mod kerning;
mod model;
mod options;
mod ufo;
mod updater;

pub use closure::collect_glyph_closure;
pub use error::{Result, UpdateError};
pub use groups::reconcile_groups;
pub use kerning::{KerningChanges, reconcile_kerning};
pub use model::{FontModel, GLYPH_ORDER_KEY, KERN1_PREFIX, KERN2_PREFIX, is_kern_group};
pub use options::UpdateOptions;
pub use updater::Updater;
