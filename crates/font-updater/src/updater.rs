//! Main Updater implementation

use indexmap::IndexSet;
use log::{debug, info};

use crate::{
    FontModel, Result, UpdateError, UpdateOptions, closure::collect_glyph_closure,
    groups::reconcile_groups, kerning::reconcile_kerning,
};

/// Updates a target font with glyphs from a source font
///
/// The requested glyphs, and the component glyphs they need, are copied into
/// the target's default layer. Group membership and kerning of the copied
/// glyphs are then brought in line with the source.
pub struct Updater<'a, F: FontModel> {
    source: &'a F,
    target: F,
    glyphs: IndexSet<String>,
    options: UpdateOptions,
}

impl<'a, F: FontModel> Updater<'a, F> {
    pub fn new(
        source: &'a F,
        target: F,
        glyphs: impl IntoIterator<Item = impl Into<String>>,
        options: UpdateOptions,
    ) -> Self {
        let glyphs = glyphs.into_iter().map(Into::into).collect();
        Self { source, target, glyphs, options }
    }

    /// Glyph names that a merge would copy into the target
    pub fn glyph_closure(&self) -> Result<IndexSet<String>> {
        collect_glyph_closure(
            self.source,
            &self.target,
            &self.glyphs,
            self.options.overwrite_components,
        )
    }

    /// Run the merge and return the updated target.
    ///
    /// Nothing is modified if this fails: every lookup happens while computing
    /// the glyph closure, before the target is touched.
    pub fn merge(mut self) -> Result<F> {
        let default_layer = self.target.default_layer_name();
        let unsupported = self.options.unsupported_layers(default_layer);
        if !unsupported.is_empty() {
            return Err(UpdateError::UnsupportedLayers {
                default: default_layer.to_owned(),
                requested: unsupported,
            });
        }

        let closure = self.glyph_closure()?;
        info!(
            "Updating {} glyphs ({} requested)",
            closure.len(),
            self.glyphs.len()
        );

        self.apply_glyphs(&closure);
        let deleted_groups = reconcile_groups(self.source, &mut self.target, &closure);
        let changes =
            reconcile_kerning(self.source, &mut self.target, &closure, &deleted_groups);
        info!(
            "Kerning: {} pairs removed, {} copied, {} pruned",
            changes.removed, changes.copied, changes.pruned
        );

        Ok(self.target)
    }

    /// Copy the closure glyphs into the target's default layer
    fn apply_glyphs(&mut self, closure: &IndexSet<String>) {
        for name in closure {
            // the closure only holds names found in the source
            let Some(glyph) = self.source.glyph(name) else {
                continue;
            };
            if self.target.remove_glyph(name).is_some() {
                debug!("Replacing glyph '{name}'");
            } else {
                debug!("Adding glyph '{name}'");
            }
            self.target.insert_glyph(glyph.clone());
        }

        if let Some(mut order) = self.target.glyph_order() {
            let known: IndexSet<&str> = order.iter().map(String::as_str).collect();
            let missing: Vec<String> =
                closure.iter().filter(|name| !known.contains(name.as_str())).cloned().collect();
            if !missing.is_empty() {
                debug!("Appending {} glyphs to the glyph order", missing.len());
                order.extend(missing);
                self.target.set_glyph_order(order);
            }
        }
    }
}
