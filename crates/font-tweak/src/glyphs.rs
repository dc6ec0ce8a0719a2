//! One-shot glyph edits: drop, rename, unicode assignment

use std::str::FromStr;

use log::{debug, warn};
use norad::{Codepoints, Font, Name};
use plist::Value;

use crate::{Error, Result};

const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Split a comma-separated glyph list, tolerating `", "` separators
pub fn parse_glyph_list(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|n| !n.is_empty()).map(str::to_owned).collect()
}

/// Remove glyphs from the default layer and the glyph order.
///
/// Names not in the font are skipped. Returns the names actually removed.
pub fn drop_glyphs(font: &mut Font, names: &[impl AsRef<str>]) -> Vec<String> {
    let mut dropped = Vec::new();
    for name in names {
        let name = name.as_ref();
        if font.default_layer_mut().remove_glyph(name).is_some() {
            debug!("Dropped glyph '{name}'");
            dropped.push(name.to_owned());
        } else {
            warn!("Glyph '{name}' not found, nothing to drop");
        }
    }
    if !dropped.is_empty() {
        map_glyph_order(font, |name| (!dropped.iter().any(|d| d == name)).then(|| name.to_owned()));
    }
    dropped
}

/// Unicode values for one glyph, parsed from `name:0041,0061`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphUnicodes {
    pub glyph: String,
    pub codepoints: Vec<char>,
}

impl GlyphUnicodes {
    /// Parse `name:HEX[,HEX...][;name:...]`.
    ///
    /// A glyph with no values (`name:`) has its unicodes cleared.
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        s.split(';').filter(|entry| !entry.trim().is_empty()).map(Self::from_str).collect()
    }
}

impl FromStr for GlyphUnicodes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidUnicodeSpec(s.to_owned());
        let (glyph, values) = s.split_once(':').ok_or_else(invalid)?;
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(invalid());
        }
        let codepoints = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                let hex = v.strip_prefix("U+").or_else(|| v.strip_prefix("u+")).unwrap_or(v);
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32).ok_or_else(invalid)
            })
            .collect::<Result<_>>()?;
        Ok(Self { glyph: glyph.to_owned(), codepoints })
    }
}

/// Replace the unicode values of glyphs in the default layer
pub fn set_unicodes(font: &mut Font, assignments: &[GlyphUnicodes]) -> Result<()> {
    let layer = font.default_layer_mut();
    for assignment in assignments {
        let glyph = layer
            .get_glyph_mut(assignment.glyph.as_str())
            .ok_or_else(|| Error::MissingGlyph(assignment.glyph.clone()))?;
        glyph.codepoints = Codepoints::new(assignment.codepoints.iter().copied());
        debug!(
            "{}: {}",
            assignment.glyph,
            assignment
                .codepoints
                .iter()
                .map(|c| format!("{:04X}", u32::from(*c)))
                .collect::<Vec<_>>()
                .join(",")
        );
    }
    Ok(())
}

/// A glyph rename, parsed from `old:new`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRename {
    pub old: String,
    pub new: String,
}

impl GlyphRename {
    /// Parse a comma-separated list of `old:new` renames
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        s.split(',').filter(|entry| !entry.trim().is_empty()).map(Self::from_str).collect()
    }
}

impl FromStr for GlyphRename {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((old, new)) if !old.trim().is_empty() && !new.trim().is_empty() => {
                Ok(Self { old: old.trim().to_owned(), new: new.trim().to_owned() })
            }
            _ => Err(Error::InvalidRenameSpec(s.to_owned())),
        }
    }
}

/// Rename glyphs in the default layer.
///
/// References to the old name are updated too: component bases, group
/// members, kerning pairs and the glyph order.
pub fn rename_glyphs(font: &mut Font, renames: &[GlyphRename]) -> Result<()> {
    for rename in renames {
        rename_glyph(font, &rename.old, &rename.new)?;
    }
    Ok(())
}

fn rename_glyph(font: &mut Font, old: &str, new: &str) -> Result<()> {
    let new_name = Name::new(new).map_err(|_| Error::InvalidGlyphName(new.to_owned()))?;
    let layer = font.default_layer_mut();
    if !layer.contains_glyph(old) {
        return Err(Error::MissingGlyph(old.to_owned()));
    }
    if layer.contains_glyph(new) {
        return Err(Error::GlyphExists(new.to_owned()));
    }
    layer
        .rename_glyph(old, new, false)
        .map_err(|_| Error::GlyphExists(new.to_owned()))?;

    let users: Vec<Name> = layer
        .iter()
        .filter(|glyph| glyph.has_component_with_base(old))
        .map(|glyph| glyph.name().clone())
        .collect();
    for user in &users {
        if let Some(glyph) = layer.get_glyph_mut(user.as_str()) {
            for component in glyph.components.iter_mut().filter(|c| c.base.as_str() == old) {
                component.base = new_name.clone();
            }
        }
    }

    for members in font.groups.values_mut() {
        for member in members.iter_mut().filter(|m| m.as_str() == old) {
            *member = new_name.clone();
        }
    }

    if let Some(seconds) = font.kerning.remove(old) {
        font.kerning.entry(new_name.clone()).or_default().extend(seconds);
    }
    for seconds in font.kerning.values_mut() {
        if let Some(value) = seconds.remove(old) {
            seconds.insert(new_name.clone(), value);
        }
    }

    map_glyph_order(font, |name| Some(if name == old { new.to_owned() } else { name.to_owned() }));
    debug!("Renamed '{old}' to '{new}' ({} component users)", users.len());
    Ok(())
}

/// Rewrite `public.glyphOrder` entry by entry, dropping entries mapped to `None`
fn map_glyph_order(font: &mut Font, mut f: impl FnMut(&str) -> Option<String>) {
    let Some(Value::Array(order)) = font.lib.get_mut(GLYPH_ORDER_KEY) else {
        return;
    };
    *order = order
        .iter()
        .filter_map(|entry| match entry.as_string() {
            Some(name) => f(name).map(Value::String),
            None => Some(entry.clone()),
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use norad::{AffineTransform, Component, Glyph};
    use pretty_assertions::assert_eq;

    use super::*;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    fn test_font() -> Font {
        let mut font = Font::new();
        let layer = font.default_layer_mut();
        layer.insert_glyph(Glyph::new("A"));
        layer.insert_glyph(Glyph::new("B"));
        let mut aacute = Glyph::new("Aacute");
        aacute.components =
            vec![Component::new(name("A"), AffineTransform::default(), None)];
        layer.insert_glyph(aacute);

        font.groups.insert(name("public.kern1.A"), vec![name("A"), name("Aacute")]);
        font.kerning.entry(name("A")).or_default().insert(name("V"), -50.0);
        font.kerning.entry(name("T")).or_default().insert(name("A"), -20.0);
        font.lib.insert(
            GLYPH_ORDER_KEY.into(),
            Value::Array(["A", "B", "Aacute"].map(|n| Value::String(n.into())).to_vec()),
        );
        font
    }

    fn glyph_order(font: &Font) -> Vec<&str> {
        font.lib[GLYPH_ORDER_KEY]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_string)
            .collect()
    }

    #[test]
    fn test_parse_glyph_list() {
        assert_eq!(parse_glyph_list("A, B,C,,"), vec!["A", "B", "C"]);
        assert!(parse_glyph_list("").is_empty());
    }

    #[test]
    fn test_drop_glyphs() {
        let mut font = test_font();
        let dropped = drop_glyphs(&mut font, &["B", "missing"]);
        assert_eq!(dropped, vec!["B"]);
        assert!(!font.default_layer().contains_glyph("B"));
        assert_eq!(glyph_order(&font), vec!["A", "Aacute"]);
    }

    #[test]
    fn test_parse_unicodes() {
        let parsed = GlyphUnicodes::parse_list("A:0041,0061;B:U+0042").unwrap();
        assert_eq!(
            parsed,
            vec![
                GlyphUnicodes { glyph: "A".into(), codepoints: vec!['A', 'a'] },
                GlyphUnicodes { glyph: "B".into(), codepoints: vec!['B'] },
            ]
        );
        let cleared: GlyphUnicodes = "A:".parse().unwrap();
        assert!(cleared.codepoints.is_empty());

        assert!(GlyphUnicodes::parse_list("A").is_err());
        assert!(GlyphUnicodes::parse_list("A:zz").is_err());
        assert!(GlyphUnicodes::parse_list("A:D800").is_err());
    }

    #[test]
    fn test_set_unicodes() {
        let mut font = test_font();
        set_unicodes(&mut font, &GlyphUnicodes::parse_list("A:0041,0061").unwrap()).unwrap();
        let glyph = font.default_layer().get_glyph("A").unwrap();
        assert_eq!(glyph.codepoints.iter().collect::<Vec<_>>(), vec!['A', 'a']);

        let missing = GlyphUnicodes::parse_list("Z:005A").unwrap();
        assert!(matches!(set_unicodes(&mut font, &missing), Err(Error::MissingGlyph(_))));
    }

    #[test]
    fn test_parse_renames() {
        let renames = GlyphRename::parse_list("a:a.ss01, b:b.alt").unwrap();
        assert_eq!(renames[1], GlyphRename { old: "b".into(), new: "b.alt".into() });
        assert!(GlyphRename::parse_list("a").is_err());
        assert!(GlyphRename::parse_list("a:").is_err());
    }

    #[test]
    fn test_rename_updates_references() {
        let mut font = test_font();
        let before = font.default_layer().get_glyph("B").cloned();

        rename_glyphs(&mut font, &GlyphRename::parse_list("A:A.ss01").unwrap()).unwrap();

        let layer = font.default_layer();
        assert!(!layer.contains_glyph("A"));
        assert!(layer.contains_glyph("A.ss01"));
        assert!(layer.get_glyph("Aacute").unwrap().has_component_with_base("A.ss01"));
        assert_eq!(layer.get_glyph("B"), before.as_ref());

        let members: Vec<&str> =
            font.groups["public.kern1.A"].iter().map(Name::as_str).collect();
        assert_eq!(members, vec!["A.ss01", "Aacute"]);
        assert_eq!(font.kerning["A.ss01"]["V"], -50.0);
        assert_eq!(font.kerning["T"]["A.ss01"], -20.0);
        assert!(!font.kerning.contains_key("A"));
        assert_eq!(glyph_order(&font), vec!["A.ss01", "B", "Aacute"]);
    }

    #[test]
    fn test_rename_errors() {
        let mut font = test_font();
        let missing = [GlyphRename { old: "Z".into(), new: "Z.alt".into() }];
        assert!(matches!(rename_glyphs(&mut font, &missing), Err(Error::MissingGlyph(_))));

        let taken = [GlyphRename { old: "A".into(), new: "B".into() }];
        assert!(matches!(rename_glyphs(&mut font, &taken), Err(Error::GlyphExists(_))));
    }
}
