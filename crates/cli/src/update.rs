//! `update`: copy glyphs from a source UFO into a target UFO.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;
use ufotweak_font_updater::{UpdateOptions, Updater};

use crate::io::{UfoFile, read_glyph_list};

/// Where the requested glyph names come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphSelection {
    Names(Vec<String>),
    File(PathBuf),
}

impl GlyphSelection {
    pub fn resolve(&self) -> Result<Vec<String>> {
        match self {
            Self::Names(names) => Ok(names.clone()),
            Self::File(path) => read_glyph_list(path),
        }
    }
}

/// Merge the selected glyphs from `source` into `target` and save `target`.
///
/// The target is written only when the merge succeeds.
pub fn update_ufo(
    source: &Path,
    target: &Path,
    glyphs: &GlyphSelection,
    options: UpdateOptions,
) -> Result<()> {
    let glyphs = glyphs.resolve()?;
    if glyphs.is_empty() {
        bail!("No glyphs to update");
    }

    let source_ufo = UfoFile::new(source);
    let target_ufo = UfoFile::new(target);
    let source_font = source_ufo.load()?;
    let target_font = target_ufo.load()?;

    info!(
        "Updating {} from {} ({} glyphs requested)",
        target_ufo.path().display(),
        source_ufo.path().display(),
        glyphs.len()
    );
    let updated = Updater::new(&source_font, target_font, glyphs, options)
        .merge()
        .with_context(|| format!("Failed to update {} from {}", target.display(), source.display()))?;

    target_ufo.save(&updated)?;
    info!("Saved {}", target_ufo.path().display());
    Ok(())
}
