//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use ufotweak_font_tweak::{GlyphRename, GlyphUnicodes, InfoAssignment, LibAssignment, Tweaks};
use ufotweak_font_updater::UpdateOptions;

use crate::{
    tweak::tweak_ufos,
    update::{GlyphSelection, update_ufo},
};

#[derive(Parser)]
#[command(name = "ufotweak")]
#[command(about = "Update and tweak UFO font sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy glyphs, with their components, groups and kerning, from SOURCE into TARGET
    #[command(group(ArgGroup::new("glyph_input").required(true).multiple(false)))]
    Update {
        source: PathBuf,
        target: PathBuf,
        /// Comma-separated glyph names
        #[arg(long, value_delimiter = ',', group = "glyph_input")]
        glyphs: Vec<String>,
        /// File with one glyph name per line
        #[arg(long, group = "glyph_input")]
        glyphs_txt: Option<PathBuf>,
        /// Layers to update; only the default layer is supported
        #[arg(long, value_delimiter = ',')]
        layers: Option<Vec<String>>,
        /// Also replace component glyphs that already exist in TARGET
        #[arg(long)]
        overwrite_components: bool,
    },
    /// Apply edits to UFOs in place
    Tweak {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Set a fontinfo attribute; an empty value clears it
        #[arg(long, value_name = "KEY=VALUE")]
        info: Vec<InfoAssignment>,
        /// Set a lib key to a string; an empty value removes it
        #[arg(long, value_name = "KEY=VALUE")]
        lib: Vec<LibAssignment>,
        /// Comma-separated glyphs to remove
        #[arg(long, value_delimiter = ',')]
        glyph_drop: Vec<String>,
        /// Comma-separated OLD:NEW glyph renames
        #[arg(long, value_delimiter = ',', value_name = "OLD:NEW")]
        glyph_rename: Vec<GlyphRename>,
        /// Glyph unicodes as NAME:HEX[,HEX...], entries separated by ';'
        #[arg(long, value_delimiter = ';', value_name = "NAME:HEX")]
        glyph_unicode: Vec<GlyphUnicodes>,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Update {
                source,
                target,
                glyphs,
                glyphs_txt,
                layers,
                overwrite_components,
            } => {
                let selection = match glyphs_txt {
                    Some(path) => GlyphSelection::File(path),
                    None => GlyphSelection::Names(glyphs),
                };
                let mut options = UpdateOptions::new().overwrite_components(overwrite_components);
                if let Some(layers) = layers {
                    options = options.layers(layers);
                }
                update_ufo(&source, &target, &selection, options)?;
            }
            Commands::Tweak { files, info, lib, glyph_drop, glyph_rename, glyph_unicode } => {
                let tweaks = Tweaks::new()
                    .with_info(info)
                    .with_lib(lib)
                    .with_drop(glyph_drop)
                    .with_rename(glyph_rename)
                    .with_unicodes(glyph_unicode);
                tweak_ufos(&files, &tweaks)?;
            }
        }
        Ok(())
    }
}
