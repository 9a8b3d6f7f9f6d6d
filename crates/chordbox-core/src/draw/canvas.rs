//! The drawing surface a chord diagram is laid out against.
//!
//! [`Canvas`] is the seam between layout and rendering: the layout engine
//! computes coordinates and styles, and a canvas turns each primitive into
//! pixels, SVG nodes, or anything else. [`RecordingCanvas`] keeps the
//! primitives as [`DrawCommand`] values so the emitted sequence can be
//! inspected directly.

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Point, Size},
};

/// Primitive drawing operations required by the layout engine.
///
/// All positions are absolute canvas coordinates. Implementations must not
/// reorder calls; later primitives paint over earlier ones.
pub trait Canvas {
    /// Sizes the drawing surface.
    fn resize(&mut self, size: Size);

    /// Draws a straight line between two points.
    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition);

    /// Draws a circle centered at `center`.
    fn circle(&mut self, center: Point, radius: f32, stroke: &StrokeDefinition, fill: Color);

    /// Draws a rectangle whose top-left corner is at `top_left`.
    ///
    /// A `corner_radius` of zero draws square corners. `None` for the stroke
    /// means the outline is not painted at all.
    fn rect(
        &mut self,
        top_left: Point,
        size: Size,
        corner_radius: f32,
        stroke: Option<&StrokeDefinition>,
        fill: Color,
    );

    /// Draws `content` centered both horizontally and vertically on `center`.
    fn text(
        &mut self,
        center: Point,
        content: &str,
        font: &TextDefinition,
        stroke: &StrokeDefinition,
        fill: Color,
    );
}

/// A single primitive captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(Size),
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    Circle {
        center: Point,
        radius: f32,
        stroke: StrokeDefinition,
        fill: Color,
    },
    Rect {
        top_left: Point,
        size: Size,
        corner_radius: f32,
        stroke: Option<StrokeDefinition>,
        fill: Color,
    },
    Text {
        center: Point,
        content: String,
        font: TextDefinition,
        stroke: StrokeDefinition,
        fill: Color,
    },
}

impl DrawCommand {
    /// Returns a short name for the primitive kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resize(_) => "resize",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Rect { .. } => "rect",
            Self::Text { .. } => "text",
        }
    }
}

/// A canvas that records every primitive in call order.
///
/// # Example
///
/// ```
/// # use chordbox_core::draw::{Canvas, DrawCommand, RecordingCanvas, StrokeDefinition};
/// # use chordbox_core::geometry::Point;
/// let mut canvas = RecordingCanvas::new();
/// canvas.line(
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     &StrokeDefinition::default(),
/// );
///
/// assert_eq!(canvas.commands().len(), 1);
/// assert_eq!(canvas.commands()[0].kind(), "line");
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the size set by the last [`Canvas::resize`] call.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns all recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the recorded commands of one kind, in call order.
    pub fn commands_of_kind<'a>(
        &'a self,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a DrawCommand> + 'a {
        self.commands.iter().filter(move |cmd| cmd.kind() == kind)
    }

    /// Removes and returns all recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discards all recorded commands. The size is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn resize(&mut self, size: Size) {
        self.size = size;
        self.commands.push(DrawCommand::Resize(size));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: &StrokeDefinition, fill: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            stroke: stroke.clone(),
            fill,
        });
    }

    fn rect(
        &mut self,
        top_left: Point,
        size: Size,
        corner_radius: f32,
        stroke: Option<&StrokeDefinition>,
        fill: Color,
    ) {
        self.commands.push(DrawCommand::Rect {
            top_left,
            size,
            corner_radius,
            stroke: stroke.cloned(),
            fill,
        });
    }

    fn text(
        &mut self,
        center: Point,
        content: &str,
        font: &TextDefinition,
        stroke: &StrokeDefinition,
        fill: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            center,
            content: content.to_string(),
            font: font.clone(),
            stroke: stroke.clone(),
            fill,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_keeps_call_order() {
        let mut canvas = RecordingCanvas::new();
        let stroke = StrokeDefinition::default();

        canvas.resize(Size::new(100.0, 120.0));
        canvas.circle(Point::new(5.0, 5.0), 2.0, &stroke, Color::default());
        canvas.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &stroke);
        canvas.rect(
            Point::new(0.0, 0.0),
            Size::new(4.0, 2.0),
            1.0,
            None,
            Color::default(),
        );
        canvas.text(
            Point::new(3.0, 3.0),
            "E",
            &TextDefinition::default(),
            &stroke,
            Color::default(),
        );

        let kinds: Vec<_> = canvas.commands().iter().map(DrawCommand::kind).collect();
        assert_eq!(kinds, ["resize", "circle", "line", "rect", "text"]);
        assert_eq!(canvas.size(), Size::new(100.0, 120.0));
    }

    #[test]
    fn test_recording_canvas_filters_by_kind() {
        let mut canvas = RecordingCanvas::new();
        let stroke = StrokeDefinition::default();
        canvas.line(Point::new(0.0, 0.0), Point::new(1.0, 0.0), &stroke);
        canvas.circle(Point::new(0.0, 0.0), 1.0, &stroke, Color::default());
        canvas.line(Point::new(0.0, 1.0), Point::new(1.0, 1.0), &stroke);

        assert_eq!(canvas.commands_of_kind("line").count(), 2);
        assert_eq!(canvas.commands_of_kind("circle").count(), 1);
        assert_eq!(canvas.commands_of_kind("text").count(), 0);
    }

    #[test]
    fn test_clear_and_take_keep_size() {
        let mut canvas = RecordingCanvas::new();
        canvas.resize(Size::new(10.0, 10.0));
        canvas.line(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            &StrokeDefinition::default(),
        );

        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(canvas.commands().is_empty());

        canvas.resize(Size::new(20.0, 20.0));
        canvas.clear();
        assert!(canvas.commands().is_empty());
        assert_eq!(canvas.size(), Size::new(20.0, 20.0));
    }
}
