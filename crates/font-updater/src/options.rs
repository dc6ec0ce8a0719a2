//! Options for updating a target font

/// Options for [`Updater`](crate::Updater)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Replace base glyphs already present in the target when an updated glyph
    /// uses them as components
    pub overwrite_components: bool,

    /// Layers to update. `None` means the default layer.
    pub layers: Option<Vec<String>>,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overwrite_components(mut self, overwrite: bool) -> Self {
        self.overwrite_components = overwrite;
        self
    }

    /// Set the layers to update (accepts any iterable of string-like values)
    pub fn layers(mut self, layers: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.layers = Some(layers.into_iter().map(|s| s.as_ref().to_owned()).collect());
        self
    }

    /// Layers other than `default_layer` that were requested
    pub fn unsupported_layers(&self, default_layer: &str) -> Vec<String> {
        self.layers
            .iter()
            .flatten()
            .filter(|name| name.as_str() != default_layer)
            .cloned()
            .collect()
    }
}
