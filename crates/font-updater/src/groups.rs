//! Group reconciliation
//!
//! After the glyphs are copied, the target's group memberships of every updated
//! glyph must match the source's. Glyphs outside the update closure keep their
//! target memberships, even where they differ from the source.

use indexmap::IndexSet;
use log::debug;
use norad::Name;

use crate::FontModel;

/// Make the target group memberships of `closure` glyphs match the source.
///
/// Runs three passes in order:
/// 1. create source groups missing from the target that contain closure glyphs
/// 2. remove closure glyphs from target groups the source doesn't put them in,
///    deleting groups left empty
/// 3. add closure glyphs to existing target groups the source puts them in
///
/// Returns the names of the groups deleted in pass 2.
pub fn reconcile_groups<F: FontModel>(
    source: &F,
    target: &mut F,
    closure: &IndexSet<String>,
) -> Vec<Name> {
    introduce_missing_groups(source, target, closure);
    let deleted = prune_stale_members(source, target, closure);
    add_new_members(source, target, closure);
    deleted
}

fn introduce_missing_groups<F: FontModel>(source: &F, target: &mut F, closure: &IndexSet<String>) {
    for (group, source_members) in source.groups() {
        if target.groups().contains_key(group) {
            continue;
        }
        let members: Vec<Name> = source_members
            .iter()
            .filter(|name| closure.contains(name.as_str()))
            .cloned()
            .collect();
        if members.is_empty() {
            continue;
        }
        debug!("Adding group '{group}' with {} glyphs", members.len());
        target.groups_mut().insert(group.clone(), members);
    }
}

fn prune_stale_members<F: FontModel>(
    source: &F,
    target: &mut F,
    closure: &IndexSet<String>,
) -> Vec<Name> {
    let mut emptied = Vec::new();

    for (group, members) in target.groups_mut().iter_mut() {
        let source_members = source.groups().get(group);
        let before = members.len();
        members.retain(|name| {
            !closure.contains(name.as_str()) || source_members.is_some_and(|s| s.contains(name))
        });
        if members.len() < before {
            debug!("Removed {} glyphs from group '{group}'", before - members.len());
            if members.is_empty() {
                emptied.push(group.clone());
            }
        }
    }

    for group in &emptied {
        debug!("Removing empty group '{group}'");
        target.groups_mut().remove(group);
    }
    emptied
}

fn add_new_members<F: FontModel>(source: &F, target: &mut F, closure: &IndexSet<String>) {
    for (group, source_members) in source.groups() {
        let Some(members) = target.groups_mut().get_mut(group) else {
            continue;
        };
        for (idx, name) in source_members.iter().enumerate() {
            if !closure.contains(name.as_str()) || members.contains(name) {
                continue;
            }
            let at = insertion_point(members, source_members, idx);
            debug!("Adding '{name}' to group '{group}'");
            members.insert(at, name.clone());
        }
    }
}

/// Position for `source_members[idx]` in `members` that keeps source order:
/// after the closest preceding source member, else before the closest
/// following one, else at the end.
fn insertion_point(members: &[Name], source_members: &[Name], idx: usize) -> usize {
    let position = |name: &Name| members.iter().position(|m| m == name);
    if let Some(prev) = source_members[..idx].iter().rev().find_map(position) {
        return prev + 1;
    }
    source_members[idx + 1..].iter().find_map(position).unwrap_or(members.len())
}
