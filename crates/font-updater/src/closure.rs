//! Glyph closure: requested glyphs plus the component glyphs they depend on

use indexmap::IndexSet;
use log::debug;

use crate::{FontModel, Result, UpdateError};

/// Compute the set of glyph names to copy from `source` to `target`.
///
/// Every requested glyph is included, together with the base glyphs of its
/// components, recursively. A base glyph already present in `target` is left
/// out (and not descended into) unless `overwrite_components` is set.
///
/// Names are returned in discovery order. A requested glyph always follows
/// the components it pulled in.
pub fn collect_glyph_closure<F: FontModel>(
    source: &F,
    target: &F,
    requested: &IndexSet<String>,
    overwrite_components: bool,
) -> Result<IndexSet<String>> {
    let mut closure = IndexSet::with_capacity(requested.len());

    for name in requested {
        if closure.contains(name.as_str()) {
            continue;
        }
        let glyph = source.glyph(name).ok_or_else(|| UpdateError::MissingGlyph(name.clone()))?;
        collect_components(source, target, name, glyph, overwrite_components, &mut closure)?;
    }

    Ok(closure)
}

fn collect_components<F: FontModel>(
    source: &F,
    target: &F,
    name: &str,
    glyph: &F::Glyph,
    overwrite_components: bool,
    closure: &mut IndexSet<String>,
) -> Result<()> {
    for base in F::component_bases(glyph) {
        if closure.contains(base) {
            continue;
        }
        if !overwrite_components && target.contains_glyph(base) {
            debug!("Keeping existing component glyph '{base}' used by '{name}'");
            continue;
        }
        let base_glyph = source.glyph(base).ok_or_else(|| UpdateError::MissingComponent {
            glyph: name.to_owned(),
            base: base.to_owned(),
        })?;
        // Insert before descending so component cycles terminate
        closure.insert(base.to_owned());
        collect_components(source, target, base, base_glyph, overwrite_components, closure)?;
    }
    closure.insert(name.to_owned());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::TestFont;

    fn requested(names: &[&str]) -> IndexSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn sorted(set: &IndexSet<String>) -> Vec<&str> {
        let mut names: Vec<&str> = set.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn accented_source() -> TestFont {
        TestFont::new()
            .with_glyph("A", "src", &[])
            .with_glyph("acutecomb", "src", &[])
            .with_glyph("Aacute", "src", &["A", "acutecomb"])
            .with_glyph("Aacute.ss01", "src", &["Aacute"])
            .with_glyph("B", "src", &[])
    }

    #[test]
    fn test_closure_includes_transitive_components() {
        let source = accented_source();
        let target = TestFont::new();

        let closure =
            collect_glyph_closure(&source, &target, &requested(&["Aacute.ss01"]), false).unwrap();
        assert_eq!(sorted(&closure), vec!["A", "Aacute", "Aacute.ss01", "acutecomb"]);
        // the requested glyph follows its components
        assert_eq!(closure.last().map(String::as_str), Some("Aacute.ss01"));
    }

    #[test]
    fn test_closure_is_superset_of_request() {
        let source = accented_source();
        let target = TestFont::new().with_glyph("A", "tgt", &[]);
        let glyphs = requested(&["B", "Aacute", "A"]);

        let closure = collect_glyph_closure(&source, &target, &glyphs, false).unwrap();
        assert!(glyphs.iter().all(|g| closure.contains(g)));
    }

    #[test]
    fn test_closure_is_idempotent() {
        let source = accented_source();
        let target = TestFont::new().with_glyph("acutecomb", "tgt", &[]);

        let once =
            collect_glyph_closure(&source, &target, &requested(&["Aacute.ss01"]), false).unwrap();
        let twice = collect_glyph_closure(&source, &target, &once, false).unwrap();
        assert_eq!(sorted(&once), sorted(&twice));
    }

    #[test]
    fn test_existing_components_are_kept() {
        let source = accented_source();
        let target = TestFont::new().with_glyph("A", "tgt", &[]);

        let closure =
            collect_glyph_closure(&source, &target, &requested(&["Aacute"]), false).unwrap();
        assert_eq!(sorted(&closure), vec!["Aacute", "acutecomb"]);
    }

    #[test]
    fn test_existing_components_are_overwritten() {
        let source = accented_source();
        let target = TestFont::new().with_glyph("A", "tgt", &[]);

        let closure =
            collect_glyph_closure(&source, &target, &requested(&["Aacute"]), true).unwrap();
        assert_eq!(sorted(&closure), vec!["A", "Aacute", "acutecomb"]);
    }

    #[test]
    fn test_requested_glyph_in_target_is_always_included() {
        let source = accented_source();
        let target = TestFont::new().with_glyph("A", "tgt", &[]);

        let closure =
            collect_glyph_closure(&source, &target, &requested(&["Aacute", "A"]), false).unwrap();
        assert!(closure.contains("A"));
    }

    #[test]
    fn test_component_cycle_terminates() {
        let source = TestFont::new()
            .with_glyph("A", "src", &["B"])
            .with_glyph("B", "src", &["A"]);
        let target = TestFont::new();

        let closure = collect_glyph_closure(&source, &target, &requested(&["A"]), true).unwrap();
        assert_eq!(closure.len(), 2);
        assert_eq!(sorted(&closure), vec!["A", "B"]);
    }

    #[test]
    fn test_self_referencing_glyph_terminates() {
        let source = TestFont::new().with_glyph("A", "src", &["A"]);
        let closure =
            collect_glyph_closure(&source, &TestFont::new(), &requested(&["A"]), true).unwrap();
        assert_eq!(sorted(&closure), vec!["A"]);
    }

    #[test]
    fn test_missing_requested_glyph() {
        let source = accented_source();
        let result = collect_glyph_closure(&source, &TestFont::new(), &requested(&["Z"]), false);
        assert_eq!(result, Err(UpdateError::MissingGlyph("Z".into())));
    }

    #[test]
    fn test_missing_component_glyph() {
        let source = TestFont::new().with_glyph("Aring", "src", &["A", "ringcomb"]);
        let result = collect_glyph_closure(&source, &TestFont::new(), &requested(&["Aring"]), true);
        assert_eq!(
            result,
            Err(UpdateError::MissingComponent { glyph: "Aring".into(), base: "A".into() })
        );
    }
}
