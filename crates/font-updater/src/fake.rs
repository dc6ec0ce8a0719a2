//! In-memory font used by the unit tests

use indexmap::IndexMap;
use norad::{Groups, Kerning, Name};

use crate::model::FontModel;

#[derive(Debug, Clone, PartialEq)]
pub struct TestGlyph {
    pub name: String,
    pub components: Vec<String>,
    /// Stands in for the outline so tests can tell source and target glyphs apart
    pub outline: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestFont {
    pub glyphs: IndexMap<String, TestGlyph>,
    pub groups: Groups,
    pub kerning: Kerning,
    pub glyph_order: Option<Vec<String>>,
}

impl TestFont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph(mut self, name: &str, outline: &'static str, components: &[&str]) -> Self {
        let glyph = TestGlyph {
            name: name.to_owned(),
            components: components.iter().map(|c| c.to_string()).collect(),
            outline,
        };
        self.glyphs.insert(name.to_owned(), glyph);
        self
    }

    pub fn with_group(mut self, name: &str, members: &[&str]) -> Self {
        self.groups.insert(name_of(name), names(members));
        self
    }

    pub fn with_kern(mut self, first: &str, second: &str, value: f64) -> Self {
        self.kerning.entry(name_of(first)).or_default().insert(name_of(second), value);
        self
    }

    pub fn with_glyph_order(mut self, order: &[&str]) -> Self {
        self.glyph_order = Some(order.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn outline(&self, name: &str) -> Option<&'static str> {
        self.glyphs.get(name).map(|g| g.outline)
    }

    pub fn members(&self, group: &str) -> Option<Vec<&str>> {
        self.groups.get(group).map(|m| m.iter().map(Name::as_str).collect())
    }

    pub fn pair(&self, first: &str, second: &str) -> Option<f64> {
        self.kerning.get(first)?.get(second).copied()
    }
}

fn name_of(name: &str) -> Name {
    Name::new(name).unwrap()
}

pub fn names(members: &[&str]) -> Vec<Name> {
    members.iter().map(|m| name_of(m)).collect()
}

impl FontModel for TestFont {
    type Glyph = TestGlyph;

    fn default_layer_name(&self) -> &str {
        "public.default"
    }

    fn glyph(&self, name: &str) -> Option<&TestGlyph> {
        self.glyphs.get(name)
    }

    fn component_bases(glyph: &TestGlyph) -> Vec<&str> {
        glyph.components.iter().map(String::as_str).collect()
    }

    fn remove_glyph(&mut self, name: &str) -> Option<TestGlyph> {
        self.glyphs.shift_remove(name)
    }

    fn insert_glyph(&mut self, glyph: TestGlyph) {
        self.glyphs.insert(glyph.name.clone(), glyph);
    }

    fn groups(&self) -> &Groups {
        &self.groups
    }

    fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }

    fn kerning(&self) -> &Kerning {
        &self.kerning
    }

    fn kerning_mut(&mut self) -> &mut Kerning {
        &mut self.kerning
    }

    fn glyph_order(&self) -> Option<Vec<String>> {
        self.glyph_order.clone()
    }

    fn set_glyph_order(&mut self, order: Vec<String>) {
        self.glyph_order = Some(order);
    }
}
