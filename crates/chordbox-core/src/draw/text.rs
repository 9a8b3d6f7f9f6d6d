//! Font definitions for centered diagram text.
//!
//! Chord diagrams draw three kinds of text: the position number beside the
//! grid, tuning labels below it, and finger labels inside markers. All three
//! share a [`TextDefinition`] that differs only in size and weight.
//!
//! ```
//! # use chordbox_core::draw::TextDefinition;
//! let base = TextDefinition::new("sans-serif", 10.0, "light", "100");
//! let label = base.clone().with_size(5.5).with_weight("bold");
//! assert_eq!(label.font_family(), "sans-serif");
//! assert_eq!(label.font_size(), 5.5);
//! ```

/// Defines the font used when a canvas draws text.
///
/// Glyph measurement is left to the canvas. Text is always positioned by its
/// center point, so the layout never needs to know glyph extents.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    font_style: String,
    font_weight: String,
}

impl TextDefinition {
    /// Creates a new text definition.
    ///
    /// # Arguments
    ///
    /// * `family` - CSS font family list
    /// * `size` - Font size in canvas units
    /// * `style` - Font style (e.g. "normal", "italic", "light")
    /// * `weight` - Font weight (e.g. "100", "bold")
    pub fn new(family: &str, size: f32, style: &str, weight: &str) -> Self {
        Self {
            font_family: family.to_string(),
            font_size: size,
            font_style: style.to_string(),
            font_weight: weight.to_string(),
        }
    }

    /// Returns a copy of this definition with a different font size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Returns a copy of this definition with a different font weight.
    pub fn with_weight(mut self, weight: &str) -> Self {
        self.font_weight = weight.to_string();
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_style(&self) -> &str {
        &self.font_style
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self::new("sans-serif", 12.0, "normal", "normal")
    }
}
