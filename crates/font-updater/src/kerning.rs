//! Kerning reconciliation
//!
//! A kerning side is *updated* when it names a glyph of the update closure, or a
//! kerning group whose target members include a closure glyph. Pairs with an
//! updated side are replaced by the source's pairs; everything else is kept.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::debug;
use norad::{Kerning, Name};

use crate::{FontModel, model::is_kern_group};

/// Number of kerning pairs touched by each reconciliation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KerningChanges {
    /// Stale target pairs removed
    pub removed: usize,
    /// Source pairs copied into the target
    pub copied: usize,
    /// Target pairs dropped for referencing a missing kerning group
    pub pruned: usize,
}

/// Bring the target kerning in line with the source for `closure` glyphs.
///
/// Must run after group reconciliation: which kerning groups count as updated
/// is decided from the target's reconciled groups. `deleted_groups` are the
/// groups that reconciliation removed; pairs naming them are pruned, as are
/// copied pairs naming a kerning group the target doesn't have. Pairs that
/// already named a missing group before the merge are left alone.
pub fn reconcile_kerning<F: FontModel>(
    source: &F,
    target: &mut F,
    closure: &IndexSet<String>,
    deleted_groups: &[Name],
) -> KerningChanges {
    let updated_groups = updated_kern_groups(target, closure);
    let is_updated = |side: &str| closure.contains(side) || updated_groups.contains(side);

    let removed = remove_pairs(target.kerning_mut(), |first, second| {
        is_updated(first) || is_updated(second)
    });

    let mut copied = 0;
    let mut dangling: HashSet<Name> =
        deleted_groups.iter().filter(|group| is_kern_group(group)).cloned().collect();
    for (first, seconds) in source.kerning() {
        for (second, value) in seconds {
            if !(is_updated(first) || is_updated(second)) {
                continue;
            }
            target
                .kerning_mut()
                .entry(first.clone())
                .or_default()
                .insert(second.clone(), *value);
            copied += 1;
            for side in [first, second] {
                if is_kern_group(side) && !target.groups().contains_key(side) {
                    dangling.insert(side.clone());
                }
            }
        }
    }

    for group in &dangling {
        debug!("Kerning references missing group '{group}'");
    }
    let pruned = remove_pairs(target.kerning_mut(), |first, second| {
        dangling.contains(first) || dangling.contains(second)
    });

    KerningChanges { removed, copied, pruned }
}

/// Kerning groups of the target with at least one closure glyph
fn updated_kern_groups<F: FontModel>(target: &F, closure: &IndexSet<String>) -> HashSet<Name> {
    target
        .groups()
        .iter()
        .filter(|(name, _)| is_kern_group(name))
        .filter(|(_, members)| members.iter().any(|m| closure.contains(m.as_str())))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Remove all pairs matching `predicate`, returning how many were removed.
///
/// First-side entries emptied by the removal are dropped as well.
fn remove_pairs(kerning: &mut Kerning, predicate: impl Fn(&str, &str) -> bool) -> usize {
    let mut removed = 0;
    kerning.retain(|first, seconds| {
        let before = seconds.len();
        seconds.retain(|second, _| !predicate(first.as_str(), second.as_str()));
        removed += before - seconds.len();
        before == seconds.len() || !seconds.is_empty()
    });
    removed
}
