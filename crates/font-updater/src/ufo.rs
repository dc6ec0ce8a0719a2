//! [`FontModel`] for norad's UFO font

use norad::{Font, Glyph, Groups, Kerning};
use plist::Value;

use crate::model::{FontModel, GLYPH_ORDER_KEY};

impl FontModel for Font {
    type Glyph = Glyph;

    fn default_layer_name(&self) -> &str {
        self.default_layer().name().as_str()
    }

    fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.default_layer().get_glyph(name)
    }

    fn contains_glyph(&self, name: &str) -> bool {
        self.default_layer().contains_glyph(name)
    }

    fn component_bases(glyph: &Glyph) -> Vec<&str> {
        glyph.components.iter().map(|c| c.base.as_str()).collect()
    }

    fn remove_glyph(&mut self, name: &str) -> Option<Glyph> {
        self.default_layer_mut().remove_glyph(name)
    }

    fn insert_glyph(&mut self, glyph: Glyph) {
        self.default_layer_mut().insert_glyph(glyph);
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
        let order = self.lib.get(GLYPH_ORDER_KEY)?.as_array()?;
        Some(order.iter().filter_map(Value::as_string).map(str::to_owned).collect())
    }

    fn set_glyph_order(&mut self, order: Vec<String>) {
        let order = order.into_iter().map(Value::String).collect();
        self.lib.insert(GLYPH_ORDER_KEY.to_owned(), Value::Array(order));
    }
}

#[cfg(test)]
mod tests {
    use norad::Name;

    use super::*;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn test_default_layer_glyphs() {
        let mut font = Font::new();
        assert_eq!(font.default_layer_name(), "public.default");
        assert!(!font.contains_glyph("A"));

        font.insert_glyph(Glyph::new("A"));
        assert!(font.contains_glyph("A"));
        assert_eq!(font.glyph("A").map(|g| g.name().as_str()), Some("A"));

        let removed = font.remove_glyph("A");
        assert!(removed.is_some());
        assert!(!font.contains_glyph("A"));
    }

    #[test]
    fn test_component_bases() {
        let mut glyph = Glyph::new("Aacute");
        glyph.components = vec![
            norad::Component::new(name("A"), Default::default(), None),
            norad::Component::new(name("acutecomb"), Default::default(), None),
        ];
        assert_eq!(Font::component_bases(&glyph), vec!["A", "acutecomb"]);
    }

    #[test]
    fn test_glyph_order() {
        let mut font = Font::new();
        assert_eq!(font.glyph_order(), None);

        font.set_glyph_order(vec!["A".into(), "B".into()]);
        assert_eq!(font.glyph_order(), Some(vec!["A".to_string(), "B".to_string()]));
        assert!(font.lib.get(GLYPH_ORDER_KEY).and_then(Value::as_array).is_some());
    }
}
