//! The chord diagram layout engine.
//!
//! [`ChordBox`] owns a [`Canvas`], a resolved configuration and the metrics
//! derived from it. Each call to [`ChordBox::draw`] lays out one chord and
//! issues its primitives in a fixed order:
//!
//! 1. nut cap, or the position number when the chord starts above fret 1
//! 2. strings
//! 3. frets
//! 4. tuning labels
//! 5. finger markers, in request order
//! 6. barres, in request order

use log::{debug, info, trace, warn};

use chordbox_core::{
    draw::{Canvas, StrokeDefinition, TextDefinition},
    geometry::{Point, Size},
};

use crate::{
    chord::{Barre, ChordRequest, FingerMarker, Fret},
    config::{ChordBoxConfig, ChordBoxOptions},
    error::ChordBoxError,
    metrics::Metrics,
};

/// Tuning labels sit this many font sizes below the last fret.
const TUNING_OFFSET: f32 = 0.66;
/// Finger labels use this fraction of the base font size.
const LABEL_FONT_SCALE: f32 = 0.55;
const LABEL_STROKE_WIDTH: f32 = 0.7;
/// Half-width of a mute cross relative to its half-height.
const MUTE_ASPECT: f32 = 0.8;

/// Lays out chord diagrams onto a canvas.
///
/// # Examples
///
/// ```
/// use chordbox::{ChordBox, ChordRequest, FingerMarker, config::ChordBoxOptions};
/// use chordbox::draw::RecordingCanvas;
///
/// let mut chord_box = ChordBox::new(RecordingCanvas::new(), &ChordBoxOptions::default())?;
///
/// // A minor: x 0 2 2 1 0
/// chord_box.draw(ChordRequest::new(vec![
///     FingerMarker::muted(6),
///     FingerMarker::new(5, 0),
///     FingerMarker::new(4, 2),
///     FingerMarker::new(3, 2),
///     FingerMarker::new(2, 1),
///     FingerMarker::new(1, 0),
/// ]))?;
///
/// assert_eq!(chord_box.canvas().commands_of_kind("circle").count(), 5);
/// # Ok::<(), chordbox::ChordBoxError>(())
/// ```
#[derive(Debug)]
pub struct ChordBox<C: Canvas> {
    canvas: C,
    config: ChordBoxConfig,
    metrics: Metrics,
    request: ChordRequest,
}

impl<C: Canvas> ChordBox<C> {
    /// Resolves `options`, sizes `canvas` and derives the layout metrics.
    ///
    /// # Errors
    ///
    /// Returns [`ChordBoxError::InvalidConfig`] if the options do not resolve
    /// to a valid configuration. The canvas is not touched in that case.
    pub fn new(canvas: C, options: &ChordBoxOptions) -> Result<Self, ChordBoxError> {
        let config = ChordBoxConfig::resolve(options)?;
        Ok(Self::with_config(canvas, config))
    }

    /// Creates a chord box from an already resolved configuration.
    pub fn with_config(mut canvas: C, config: ChordBoxConfig) -> Self {
        info!(
            num_strings = config.num_strings(),
            num_frets = config.num_frets(),
            width = config.width(),
            height = config.height();
            "Creating chord box"
        );

        canvas.resize(Size::new(config.width(), config.height()));
        let metrics = Metrics::derive(&config);

        Self {
            canvas,
            config,
            metrics,
            request: ChordRequest::default(),
        }
    }

    /// Draws one chord onto the canvas.
    ///
    /// The request replaces the previously drawn one. Drawing the same
    /// request twice issues the same primitives twice.
    ///
    /// # Errors
    ///
    /// Returns [`ChordBoxError::StringOutOfRange`] or
    /// [`ChordBoxError::NegativeFret`] if the request does not fit the board.
    /// Nothing is drawn and the previous request is kept.
    pub fn draw(&mut self, request: ChordRequest) -> Result<(), ChordBoxError> {
        if let Err(err) = request.validate(self.config.num_strings()) {
            warn!(err:%; "Rejected chord request");
            return Err(err);
        }

        debug!(
            markers = request.chord.len(),
            barres = request.barres.len(),
            position = request.position,
            position_text = request.position_text;
            "Drawing chord"
        );

        self.request = request;
        DrawPass::new(&self.config, &self.metrics, &self.request).run(&mut self.canvas);

        Ok(())
    }

    pub fn config(&self) -> &ChordBoxConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Finger markers of the last drawn chord.
    pub fn chord(&self) -> &[FingerMarker] {
        &self.request.chord
    }

    /// Starting position of the last drawn chord.
    pub fn position(&self) -> u32 {
        self.request.position
    }

    pub fn position_text(&self) -> u32 {
        self.request.position_text
    }

    pub fn barres(&self) -> &[Barre] {
        &self.request.barres
    }

    pub fn tuning(&self) -> &[String] {
        &self.request.tuning
    }

    /// The last drawn request, or the default request before the first draw.
    pub fn request(&self) -> &ChordRequest {
        &self.request
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Consumes the chord box and returns its canvas.
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

/// Layout state for a single validated request.
struct DrawPass<'a> {
    config: &'a ChordBoxConfig,
    metrics: &'a Metrics,
    request: &'a ChordRequest,
    origin: Point,
    fret_spacing: f32,
    tuning_row: bool,
    fret_shift: i32,
    show_labels: bool,
}

impl<'a> DrawPass<'a> {
    fn new(config: &'a ChordBoxConfig, metrics: &'a Metrics, request: &'a ChordRequest) -> Self {
        let tuning_row = config.show_tuning() && !request.tuning.is_empty();

        Self {
            config,
            metrics,
            request,
            origin: metrics.origin(),
            fret_spacing: metrics.fret_spacing_for(!request.tuning.is_empty()),
            tuning_row,
            fret_shift: request.fret_shift(),
            show_labels: config.label_policy().shows_labels(request.chord.len()),
        }
    }

    fn run(&self, canvas: &mut impl Canvas) {
        if self.request.position <= 1 {
            self.draw_bridge(canvas);
        } else {
            self.draw_position(canvas);
        }

        self.draw_strings(canvas);
        self.draw_frets(canvas);

        if self.tuning_row {
            self.draw_tuning(canvas);
        }

        for marker in &self.request.chord {
            self.light_up(canvas, marker);
        }

        for barre in &self.request.barres {
            self.light_bar(canvas, barre);
        }
    }

    /// Visual column of a validated 1-indexed string; string 1 is rightmost.
    fn column(&self, string: u32) -> u32 {
        self.config.num_strings() - string
    }

    fn column_x(&self, column: u32) -> f32 {
        self.origin.x() + self.metrics.spacing() * column as f32
    }

    fn fret_y(&self, fret: i32) -> f32 {
        self.origin.y() + self.fret_spacing * fret as f32
    }

    /// X coordinate of the rightmost string.
    fn last_string_x(&self) -> f32 {
        self.column_x(self.config.num_strings() - 1)
    }

    fn base_font(&self) -> TextDefinition {
        TextDefinition::new(
            self.config.font_family(),
            self.metrics.font_size(),
            self.config.font_style(),
            self.config.font_weight(),
        )
    }

    fn draw_text(&self, canvas: &mut impl Canvas, center: Point, content: &str) {
        let color = self.config.text_color();
        canvas.text(
            center,
            content,
            &self.base_font(),
            &StrokeDefinition::new(color, self.config.stroke_width()),
            color,
        );
    }

    fn draw_bridge(&self, canvas: &mut impl Canvas) {
        let half_stroke = self.config.stroke_width() / 2.0;
        let bridge_height = self.metrics.bridge_stroke_width();
        let top_left = self.origin.offset(-half_stroke, -bridge_height);
        let width = self.last_string_x() + half_stroke - top_left.x();

        trace!(x = top_left.x(), y = top_left.y(), width; "Drawing nut cap");
        canvas.rect(
            top_left,
            Size::new(width, bridge_height),
            0.0,
            None,
            self.config.bridge_color(),
        );
    }

    fn draw_position(&self, canvas: &mut impl Canvas) {
        let center = Point::new(
            self.origin.x() - self.metrics.spacing() / 3.0 - self.metrics.font_size() / 2.0,
            self.origin.y()
                + self.fret_spacing * self.request.position_text as f32
                + self.fret_spacing / 2.0,
        );

        trace!(position = self.request.position; "Drawing position number");
        self.draw_text(canvas, center, &self.request.position.to_string());
    }

    fn draw_strings(&self, canvas: &mut impl Canvas) {
        let stroke = StrokeDefinition::new(self.config.string_color(), self.config.string_width());
        let bottom = self.fret_y(self.config.num_frets() as i32);

        for column in 0..self.config.num_strings() {
            let x = self.column_x(column);
            canvas.line(
                Point::new(x, self.origin.y()),
                Point::new(x, bottom),
                &stroke,
            );
        }
    }

    fn draw_frets(&self, canvas: &mut impl Canvas) {
        let stroke = StrokeDefinition::new(self.config.fret_color(), self.config.fret_width());
        let right = self.last_string_x();

        for fret in 0..=self.config.num_frets() {
            let y = self.fret_y(fret as i32);
            canvas.line(
                Point::new(self.origin.x(), y),
                Point::new(right, y),
                &stroke,
            );
        }
    }

    fn draw_tuning(&self, canvas: &mut impl Canvas) {
        let y = self.fret_y(self.config.num_frets() as i32)
            + self.metrics.font_size() * TUNING_OFFSET;

        for (column, name) in (0..self.config.num_strings()).zip(&self.request.tuning) {
            self.draw_text(canvas, Point::new(self.column_x(column), y), name);
        }
    }

    fn light_up(&self, canvas: &mut impl Canvas, marker: &FingerMarker) {
        let column = self.column(marker.string);
        let fret_num = match marker.fret {
            Fret::Muted => 0,
            Fret::At(fret) => fret - self.fret_shift,
        };

        let mut y = self.fret_y(fret_num);
        if fret_num == 0 {
            // Sit on the nut cap rather than straddle it.
            y -= self.metrics.bridge_stroke_width();
        }
        let center = Point::new(self.column_x(column), y - self.fret_spacing / 2.0);

        trace!(
            string = marker.string,
            fret:% = marker.fret,
            column,
            fret_num;
            "Lighting up marker"
        );

        let stroke = StrokeDefinition::new(self.config.stroke_color(), self.config.stroke_width());
        let radius = self.metrics.circle_radius();

        if marker.fret.is_muted() {
            let dx = radius * MUTE_ASPECT;
            canvas.line(
                center.offset(-dx, -radius),
                center.offset(dx, radius),
                &stroke,
            );
            canvas.line(
                center.offset(dx, -radius),
                center.offset(-dx, radius),
                &stroke,
            );
            return;
        }

        let fill = if fret_num > 0 {
            self.config.stroke_color()
        } else {
            self.config.bg_color()
        };
        canvas.circle(center, radius, &stroke, fill);

        if let Some(label) = marker.label.as_deref().filter(|_| self.show_labels) {
            let color = if fret_num != 0 {
                self.config.label_color()
            } else {
                self.config.stroke_color()
            };
            let font = self
                .base_font()
                .with_size(self.metrics.font_size() * LABEL_FONT_SCALE)
                .with_weight(self.config.label_weight());

            canvas.text(
                center,
                label,
                &font,
                &StrokeDefinition::new(color, LABEL_STROKE_WIDTH),
                color,
            );
        }
    }

    fn light_bar(&self, canvas: &mut impl Canvas, barre: &Barre) {
        let fret_num = barre.fret - self.fret_shift;
        let from = self.column(barre.from_string);
        let to = self.column(barre.to_string);
        let (left, right) = (from.min(to), from.max(to));

        let shift_x = self.metrics.bar_shift_x();
        let x = self.column_x(left) - shift_x;
        let x_to = self.column_x(right) + shift_x;

        let row_top = self.fret_y(fret_num - 1);
        let y = row_top + self.fret_spacing / 4.0;
        let y_to = row_top + self.fret_spacing / 4.0 * 3.0;

        trace!(left, right, fret_num; "Lighting up barre");
        canvas.rect(
            Point::new(x, y),
            Size::new(x_to - x, y_to - y),
            self.metrics.barre_radius(),
            None,
            self.config.stroke_color(),
        );
    }
}
