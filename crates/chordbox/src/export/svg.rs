//! SVG canvas backend.
//!
//! [`SvgCanvas`] turns each primitive into one SVG element appended to a
//! [`Document`] in call order. Its [`Display`](fmt::Display) output is the
//! complete SVG markup.
//!
//! ```
//! use chordbox::{ChordBox, ChordRequest, FingerMarker, config::ChordBoxOptions};
//! use chordbox::export::svg::SvgCanvas;
//!
//! let mut chord_box = ChordBox::new(SvgCanvas::new(), &ChordBoxOptions::default())?;
//! chord_box.draw(ChordRequest::new(vec![FingerMarker::new(2, 1)]))?;
//!
//! let markup = chord_box.into_canvas().to_string();
//! assert!(markup.starts_with("<svg"));
//! # Ok::<(), chordbox::ChordBoxError>(())
//! ```

use std::{fmt, mem};

use log::debug;
use svg::{
    Document, Node,
    node::element::{Circle, Line, Rectangle, Text},
};

use chordbox_core::{
    apply_stroke,
    color::Color,
    draw::{Canvas, StrokeDefinition, TextDefinition},
    geometry::{Point, Size},
};

/// A canvas that accumulates an SVG document.
#[derive(Debug)]
pub struct SvgCanvas {
    document: Document,
    size: Size,
    element_count: usize,
}

impl SvgCanvas {
    /// Creates an empty, unsized SVG canvas.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            size: Size::default(),
            element_count: 0,
        }
    }

    /// Returns the size set by the last resize.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of drawing elements appended so far.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    fn update(&mut self, f: impl FnOnce(Document) -> Document) {
        let document = mem::replace(&mut self.document, Document::new());
        self.document = f(document);
    }

    fn push<T: Into<Box<dyn Node>>>(&mut self, node: T) {
        self.update(|document| document.add(node));
        self.element_count += 1;
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document)
    }
}

impl Canvas for SvgCanvas {
    fn resize(&mut self, size: Size) {
        debug!(width = size.width(), height = size.height(); "Sizing SVG canvas");

        self.size = size;
        self.update(|document| {
            document
                .set(
                    "viewBox",
                    format!("0 0 {} {}", size.width(), size.height()),
                )
                .set("width", size.width())
                .set("height", size.height())
        });
    }

    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let line = Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        self.push(apply_stroke!(line, stroke));
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: &StrokeDefinition, fill: Color) {
        let circle = Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", fill);
        self.push(apply_stroke!(circle, stroke));
    }

    fn rect(
        &mut self,
        top_left: Point,
        size: Size,
        corner_radius: f32,
        stroke: Option<&StrokeDefinition>,
        fill: Color,
    ) {
        let mut rect = Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", fill);

        if corner_radius > 0.0 {
            rect = rect.set("rx", corner_radius).set("ry", corner_radius);
        }

        let rect = match stroke {
            Some(stroke) => apply_stroke!(rect, stroke),
            None => rect.set("stroke", "none"),
        };
        self.push(rect);
    }

    fn text(
        &mut self,
        center: Point,
        content: &str,
        font: &TextDefinition,
        stroke: &StrokeDefinition,
        fill: Color,
    ) {
        let text = Text::new(content)
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", font.font_family())
            .set("font-size", font.font_size())
            .set("font-style", font.font_style())
            .set("font-weight", font.font_weight())
            .set("fill", fill);
        self.push(apply_stroke!(text, stroke));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Color {
        Color::new("#666").unwrap()
    }

    #[test]
    fn test_resize_sets_document_size() {
        let mut canvas = SvgCanvas::new();
        canvas.resize(Size::new(100.0, 120.0));

        let markup = canvas.to_string();
        assert!(markup.contains(r#"width="100""#));
        assert!(markup.contains(r#"height="120""#));
        assert!(markup.contains(r#"viewBox="0 0 100 120""#));
        assert_eq!(canvas.size(), Size::new(100.0, 120.0));
        assert_eq!(canvas.element_count(), 0);
    }

    #[test]
    fn test_each_primitive_becomes_one_element() {
        let mut canvas = SvgCanvas::new();
        let stroke = StrokeDefinition::new(grey(), 1.0);

        canvas.line(Point::new(0.0, 0.0), Point::new(0.0, 10.0), &stroke);
        canvas.circle(Point::new(5.0, 5.0), 3.75, &stroke, grey());
        canvas.rect(
            Point::new(0.0, 0.0),
            Size::new(10.0, 3.0),
            0.0,
            None,
            grey(),
        );
        canvas.text(
            Point::new(5.0, 20.0),
            "E",
            &TextDefinition::default(),
            &stroke,
            grey(),
        );

        let markup = canvas.to_string();
        assert_eq!(canvas.element_count(), 4);
        assert_eq!(markup.matches("<line").count(), 1);
        assert_eq!(markup.matches("<circle").count(), 1);
        assert_eq!(markup.matches("<rect").count(), 1);
        assert_eq!(markup.matches("<text").count(), 1);
    }

    #[test]
    fn test_rect_corner_radius_and_stroke() {
        let mut canvas = SvgCanvas::new();
        canvas.rect(
            Point::new(1.0, 2.0),
            Size::new(30.0, 6.0),
            3.0,
            None,
            grey(),
        );

        let markup = canvas.to_string();
        assert!(markup.contains(r#"rx="3""#));
        assert!(markup.contains(r#"stroke="none""#));
    }

    #[test]
    fn test_text_is_centered() {
        let mut canvas = SvgCanvas::new();
        canvas.text(
            Point::new(10.0, 10.0),
            "G",
            &TextDefinition::new("Helvetica", 10.0, "light", "100"),
            &StrokeDefinition::new(grey(), 1.0),
            grey(),
        );

        let markup = canvas.to_string();
        assert!(markup.contains(r#"text-anchor="middle""#));
        assert!(markup.contains(r#"dominant-baseline="central""#));
        assert!(markup.contains(r#"font-family="Helvetica""#));

        let element = &markup[markup.find("<text").unwrap()..];
        let content = &element[element.find('>').unwrap() + 1..element.find("</text>").unwrap()];
        assert_eq!(content.trim(), "G");
    }
}
