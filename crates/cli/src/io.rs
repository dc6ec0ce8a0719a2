//! Shared UFO I/O utilities.

use std::{
    ffi::OsString,
    fs::{read_to_string, rename},
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use log::{debug, error};
use norad::Font;
use tempfile::{Builder, TempDir};

/// A UFO source handle for I/O operations.
#[derive(Debug, Clone)]
pub struct UfoFile {
    path: PathBuf,
}

impl UfoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the UFO.
    pub fn load(&self) -> Result<Font> {
        debug!("Loading {}", self.path.display());
        Font::load(&self.path)
            .with_context(|| format!("Failed to load UFO: {}", self.path.display()))
    }

    /// Save the UFO, replacing what is on disk.
    ///
    /// The font is written to a temporary directory next to the target first,
    /// so a failed write leaves the existing UFO as it was. If the existing UFO
    /// cannot be moved back after a failed swap, the temporary directory is
    /// kept and the error names where the original now lives.
    pub fn save(&self, font: &Font) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = self
            .path
            .file_name()
            .with_context(|| format!("Invalid UFO path: {}", self.path.display()))?;

        let staging = Builder::new()
            .prefix(".ufotweak-")
            .tempdir_in(parent)
            .with_context(|| format!("Failed to create temporary directory in {}", parent.display()))?;
        let staged = staging.path().join(file_name);
        font.save(&staged)
            .with_context(|| format!("Failed to write UFO: {}", self.path.display()))?;

        if self.path.exists() {
            let mut old_name = OsString::from(file_name);
            old_name.push(".old");
            let old = staging.path().join(old_name);
            rename(&self.path, &old)
                .with_context(|| format!("Failed to replace UFO: {}", self.path.display()))?;
            if let Err(e) = rename(&staged, &self.path) {
                return Err(restore_original(staging, &old, &self.path, e));
            }
        } else {
            rename(&staged, &self.path)
                .with_context(|| format!("Failed to write UFO: {}", self.path.display()))?;
        }
        debug!("Saved {}", self.path.display());
        Ok(())
    }

    /// Load, edit, and save back to the same path.
    pub fn transform<R>(&self, f: impl FnOnce(&mut Font) -> Result<R>) -> Result<R> {
        let mut font = self.load()?;
        let result = f(&mut font)?;
        self.save(&font)?;
        Ok(result)
    }
}

impl AsRef<Path> for UfoFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Move the original UFO from `old` back to `path` after a failed swap.
///
/// On success the staging directory is removed on drop. Otherwise it is kept
/// on disk, since it holds the only copy of the original.
fn restore_original(staging: TempDir, old: &Path, path: &Path, cause: io::Error) -> anyhow::Error {
    let cause = anyhow!(cause).context(format!("Failed to replace UFO: {}", path.display()));
    match rename(old, path) {
        Ok(()) => cause,
        Err(e) => {
            let kept = staging.keep();
            error!("Could not restore {}; original kept in {}", path.display(), kept.display());
            cause.context(format!(
                "Failed to restore original UFO ({e}); it was kept at {}",
                old.display()
            ))
        }
    }
}

/// Read a newline-delimited glyph list, skipping blank lines.
pub fn read_glyph_list(path: &Path) -> Result<Vec<String>> {
    let text = read_to_string(path)
        .with_context(|| format!("Failed to read glyph list: {}", path.display()))?;
    Ok(parse_glyph_lines(&text))
}

fn parse_glyph_lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect()
}
