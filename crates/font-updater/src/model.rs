//! The font capabilities the updater relies on
//!
//! The updater never touches a concrete font type directly. Anything that can
//! look up, insert and remove glyphs in its default layer and expose its groups,
//! kerning and glyph order can be updated.

use norad::{Groups, Kerning};

/// Lib key holding the preferred glyph order
pub const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Prefix of first-side (left in LTR) kerning groups
pub const KERN1_PREFIX: &str = "public.kern1.";

/// Prefix of second-side (right in LTR) kerning groups
pub const KERN2_PREFIX: &str = "public.kern2.";

/// Returns `true` if `name` follows the kerning group naming convention
pub fn is_kern_group(name: &str) -> bool {
    name.starts_with(KERN1_PREFIX) || name.starts_with(KERN2_PREFIX)
}

/// Mapping-like access to a font's default layer, groups, kerning and glyph order
pub trait FontModel {
    /// Glyph payload copied verbatim from one font to another
    type Glyph: Clone;

    fn default_layer_name(&self) -> &str;

    /// Look up a glyph in the default layer
    fn glyph(&self, name: &str) -> Option<&Self::Glyph>;

    fn contains_glyph(&self, name: &str) -> bool {
        self.glyph(name).is_some()
    }

    /// Base glyph names of the glyph's components, in component order
    fn component_bases(glyph: &Self::Glyph) -> Vec<&str>;

    /// Remove a glyph from the default layer
    fn remove_glyph(&mut self, name: &str) -> Option<Self::Glyph>;

    /// Insert a glyph into the default layer, replacing one with the same name
    fn insert_glyph(&mut self, glyph: Self::Glyph);

    fn groups(&self) -> &Groups;

    fn groups_mut(&mut self) -> &mut Groups;

    fn kerning(&self) -> &Kerning;

    fn kerning_mut(&mut self) -> &mut Kerning;

    /// The explicit glyph order, if the font keeps one
    fn glyph_order(&self) -> Option<Vec<String>>;

    fn set_glyph_order(&mut self, order: Vec<String>);
}
