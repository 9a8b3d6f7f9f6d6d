//! Stroke definitions for lines and outlines.
//!
//! A [`StrokeDefinition`] carries the color and width used when a canvas
//! strokes a line, a circle outline or a text glyph. Strings, frets, marker
//! outlines and mute crosses each get their own definition, so they can be
//! styled independently.
//!
//! # Applying to SVG Elements
//!
//! ```
//! use chordbox_core::draw::StrokeDefinition;
//! use chordbox_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#666").unwrap(), 1.0);
//! let line = svg_element::Line::new()
//!     .set("x1", 0)
//!     .set("y1", 0);
//!
//! let line = chordbox_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use chordbox_core::draw::StrokeDefinition;
/// use chordbox_core::color::Color;
///
/// // Default stroke (black, 1px)
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// let label = StrokeDefinition::new(Color::new("#fff").unwrap(), 0.7);
/// assert_eq!(label.width(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply stroke color, opacity and width to an SVG element.
///
/// # Examples
///
/// ```
/// use chordbox_core::draw::StrokeDefinition;
/// use chordbox_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let circle = svg_element::Circle::new()
///     .set("cx", 10)
///     .set("cy", 10)
///     .set("r", 4);
///
/// let circle = chordbox_core::apply_stroke!(circle, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_stroke_new() {
        let color = Color::new("#666").unwrap();
        let stroke = StrokeDefinition::new(color, 0.7);

        assert_eq!(stroke.color(), color);
        assert_eq!(stroke.width(), 0.7);
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::new("#666").unwrap(), 2.0);
        let line = crate::apply_stroke!(svg::node::element::Line::new(), &stroke);

        let markup = line.to_string();
        assert!(markup.contains(r#"stroke-width="2""#));
        assert!(markup.contains(r#"stroke-opacity="1""#));
    }
}
