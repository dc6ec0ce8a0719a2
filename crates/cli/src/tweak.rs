//! `tweak`: apply scripted edits to UFOs in parallel.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use ufotweak_font_tweak::Tweaks;

use crate::{io::UfoFile, parallel::run_parallel};

/// Apply `tweaks` to every UFO in `files`, saving each one in place.
///
/// Fails if any file failed; the other files are still processed.
pub fn tweak_ufos(files: &[impl AsRef<Path> + Sync], tweaks: &Tweaks) -> Result<()> {
    if tweaks.is_empty() {
        info!("No tweaks specified");
        return Ok(());
    }
    run_parallel("Tweak", files, |path| tweak_single(path, tweaks)).ok_or_bail("Tweak")
}

fn tweak_single(path: &Path, tweaks: &Tweaks) -> Result<()> {
    let summary = UfoFile::new(path).transform(|font| {
        tweaks.apply(font).with_context(|| format!("Failed to tweak {}", path.display()))
    })?;
    debug!("{}: {summary}", path.display());
    Ok(())
}
