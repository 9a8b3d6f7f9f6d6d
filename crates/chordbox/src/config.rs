//! Configuration types for chord diagram layout.
//!
//! Configuration comes in two forms:
//!
//! - [`ChordBoxOptions`] - the caller-facing, partial record. Every field is
//!   optional and it implements [`serde::Deserialize`], so it can be loaded
//!   from a TOML file. Unknown fields are ignored.
//! - [`ChordBoxConfig`] - the resolved, validated record produced by merging
//!   options over the defaults. It cannot be built in an invalid state.
//!
//! Five colors (bridge, string, fret, stroke, text) fall back to
//! `default_color` when unset, and string/fret widths fall back to
//! `stroke_width`.
//!
//! # Example
//!
//! ```
//! # use chordbox::config::{ChordBoxConfig, ChordBoxOptions};
//! let options = ChordBoxOptions {
//!     num_frets: Some(4),
//!     default_color: Some("#222".to_string()),
//!     ..ChordBoxOptions::default()
//! };
//! let config = ChordBoxConfig::resolve(&options).unwrap();
//! assert_eq!(config.num_frets(), 4);
//! assert_eq!(config.num_strings(), 6);
//! assert_eq!(config.string_color(), config.bridge_color());
//! ```

use log::warn;
use serde::Deserialize;

use chordbox_core::color::Color;

use crate::error::ChordBoxError;

const DEFAULT_NUM_STRINGS: u32 = 6;
const DEFAULT_NUM_FRETS: u32 = 5;
/// Upper bound for `num_strings` and `num_frets`.
pub const MAX_COUNT: u32 = 64;
const DEFAULT_WIDTH: f32 = 100.0;
const DEFAULT_HEIGHT: f32 = 120.0;
const DEFAULT_STROKE_WIDTH: f32 = 1.0;
const DEFAULT_COLOR: &str = "#666";
const DEFAULT_BG_COLOR: &str = "#fff";
const DEFAULT_LABEL_COLOR: &str = "#fff";
const DEFAULT_FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\"";
const DEFAULT_FONT_STYLE: &str = "light";
const DEFAULT_FONT_WEIGHT: &str = "100";
const DEFAULT_LABEL_WEIGHT: &str = "100";

/// Decides when finger labels are drawn inside markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPolicy {
    /// Labels are drawn only when the chord has more than two markers.
    #[default]
    CountThreshold,
    /// Every supplied label is drawn.
    PerMarker,
}

impl LabelPolicy {
    /// Minimum marker count (exclusive) for [`LabelPolicy::CountThreshold`].
    pub const MARKER_THRESHOLD: usize = 2;

    /// Returns true if labels should be drawn for a chord with `marker_count` markers.
    pub fn shows_labels(self, marker_count: usize) -> bool {
        match self {
            Self::CountThreshold => marker_count > Self::MARKER_THRESHOLD,
            Self::PerMarker => true,
        }
    }
}

/// Partial chord box configuration. Unset fields use the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChordBoxOptions {
    pub num_strings: Option<u32>,
    pub num_frets: Option<u32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub stroke_width: Option<f32>,
    pub show_tuning: Option<bool>,

    /// Seed for the bridge, string, fret, stroke and text colors.
    pub default_color: Option<String>,
    pub bridge_color: Option<String>,
    pub string_color: Option<String>,
    pub fret_color: Option<String>,
    pub stroke_color: Option<String>,
    pub text_color: Option<String>,
    pub bg_color: Option<String>,
    pub label_color: Option<String>,

    pub string_width: Option<f32>,
    pub fret_width: Option<f32>,

    pub font_family: Option<String>,
    /// Overrides the font size derived from the board width.
    pub font_size: Option<f32>,
    pub font_style: Option<String>,
    pub font_weight: Option<String>,
    pub label_weight: Option<String>,

    /// Overrides the marker radius derived from the board width.
    pub circle_radius: Option<f32>,
    pub label_policy: Option<LabelPolicy>,
}

/// Resolved chord box configuration.
///
/// Obtained from [`ChordBoxConfig::resolve`] or [`ChordBoxConfig::default`].
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordBoxConfig {
    num_strings: u32,
    num_frets: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    stroke_width: f32,
    show_tuning: bool,

    bridge_color: Color,
    string_color: Color,
    fret_color: Color,
    stroke_color: Color,
    text_color: Color,
    bg_color: Color,
    label_color: Color,

    string_width: f32,
    fret_width: f32,

    font_family: String,
    font_size: Option<f32>,
    font_style: String,
    font_weight: String,
    label_weight: String,

    circle_radius: Option<f32>,
    label_policy: LabelPolicy,
}

impl ChordBoxConfig {
    /// Merges `options` over the defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ChordBoxError::InvalidConfig`] naming the first offending
    /// field when:
    /// - `num_strings` or `num_frets` is zero or above [`MAX_COUNT`]
    /// - `width` or `height` is not a positive finite number
    /// - `stroke_width`, `string_width` or `fret_width` is negative or not finite
    /// - an explicit `font_size` or `circle_radius` is not positive
    /// - a color string cannot be parsed
    pub fn resolve(options: &ChordBoxOptions) -> Result<Self, ChordBoxError> {
        let result = Self::resolve_inner(options);
        if let Err(err) = &result {
            warn!(err:%; "Rejected chord box configuration");
        }
        result
    }

    fn resolve_inner(options: &ChordBoxOptions) -> Result<Self, ChordBoxError> {
        let num_strings = count(
            "num_strings",
            options.num_strings.unwrap_or(DEFAULT_NUM_STRINGS),
        )?;
        let num_frets = count("num_frets", options.num_frets.unwrap_or(DEFAULT_NUM_FRETS))?;

        let width = positive("width", options.width.unwrap_or(DEFAULT_WIDTH))?;
        let height = positive("height", options.height.unwrap_or(DEFAULT_HEIGHT))?;
        let x = finite("x", options.x.unwrap_or(0.0))?;
        let y = finite("y", options.y.unwrap_or(0.0))?;

        let stroke_width = non_negative(
            "stroke_width",
            options.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH),
        )?;
        let string_width = non_negative(
            "string_width",
            options.string_width.unwrap_or(stroke_width),
        )?;
        let fret_width = non_negative("fret_width", options.fret_width.unwrap_or(stroke_width))?;

        let font_size = options
            .font_size
            .map(|size| positive("font_size", size))
            .transpose()?;
        let circle_radius = options
            .circle_radius
            .map(|radius| positive("circle_radius", radius))
            .transpose()?;

        let default_color = options.default_color.as_deref().unwrap_or(DEFAULT_COLOR);
        let seeded = |field: &'static str, value: &Option<String>| {
            parse_color(field, value.as_deref().unwrap_or(default_color))
        };

        Ok(Self {
            num_strings,
            num_frets,
            x,
            y,
            width,
            height,
            stroke_width,
            show_tuning: options.show_tuning.unwrap_or(true),

            bridge_color: seeded("bridge_color", &options.bridge_color)?,
            string_color: seeded("string_color", &options.string_color)?,
            fret_color: seeded("fret_color", &options.fret_color)?,
            stroke_color: seeded("stroke_color", &options.stroke_color)?,
            text_color: seeded("text_color", &options.text_color)?,
            bg_color: parse_color(
                "bg_color",
                options.bg_color.as_deref().unwrap_or(DEFAULT_BG_COLOR),
            )?,
            label_color: parse_color(
                "label_color",
                options.label_color.as_deref().unwrap_or(DEFAULT_LABEL_COLOR),
            )?,

            string_width,
            fret_width,

            font_family: options
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size,
            font_style: options
                .font_style
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_STYLE.to_string()),
            font_weight: options
                .font_weight
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_WEIGHT.to_string()),
            label_weight: options
                .label_weight
                .clone()
                .unwrap_or_else(|| DEFAULT_LABEL_WEIGHT.to_string()),

            circle_radius,
            label_policy: options.label_policy.unwrap_or_default(),
        })
    }

    pub fn num_strings(&self) -> u32 {
        self.num_strings
    }

    pub fn num_frets(&self) -> u32 {
        self.num_frets
    }

    /// Horizontal offset of the diagram on the canvas.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical offset of the diagram on the canvas.
    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn show_tuning(&self) -> bool {
        self.show_tuning
    }

    pub fn bridge_color(&self) -> Color {
        self.bridge_color
    }

    pub fn string_color(&self) -> Color {
        self.string_color
    }

    pub fn fret_color(&self) -> Color {
        self.fret_color
    }

    /// Color of marker outlines, fretted marker fills, mute crosses and barres.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Fill of markers that sit on the nut.
    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    pub fn label_color(&self) -> Color {
        self.label_color
    }

    pub fn string_width(&self) -> f32 {
        self.string_width
    }

    pub fn fret_width(&self) -> f32 {
        self.fret_width
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Explicit font size, if one was configured.
    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn font_style(&self) -> &str {
        &self.font_style
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }

    pub fn label_weight(&self) -> &str {
        &self.label_weight
    }

    /// Explicit marker radius, if one was configured.
    pub fn circle_radius(&self) -> Option<f32> {
        self.circle_radius
    }

    pub fn label_policy(&self) -> LabelPolicy {
        self.label_policy
    }
}

impl Default for ChordBoxConfig {
    fn default() -> Self {
        Self::resolve_inner(&ChordBoxOptions::default()).expect("default options are valid")
    }
}

fn count(field: &'static str, value: u32) -> Result<u32, ChordBoxError> {
    if (1..=MAX_COUNT).contains(&value) {
        Ok(value)
    } else {
        Err(ChordBoxError::invalid_config(
            field,
            format!("must be between 1 and {MAX_COUNT}, got {value}"),
        ))
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ChordBoxError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChordBoxError::invalid_config(
            field,
            format!("must be a finite number, got {value}"),
        ))
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32, ChordBoxError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ChordBoxError::invalid_config(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ChordBoxError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ChordBoxError::invalid_config(
            field,
            format!("must not be negative, got {value}"),
        ))
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ChordBoxError> {
    Color::new(value).map_err(|reason| ChordBoxError::invalid_config(field, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> Color {
        Color::new(s).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = ChordBoxConfig::default();

        assert_eq!(config.num_strings(), 6);
        assert_eq!(config.num_frets(), 5);
        assert_eq!(config.width(), 100.0);
        assert_eq!(config.height(), 120.0);
        assert_eq!(config.stroke_width(), 1.0);
        assert!(config.show_tuning());
        assert_eq!(config.bridge_color(), color("#666"));
        assert_eq!(config.stroke_color(), color("#666"));
        assert_eq!(config.bg_color(), color("#fff"));
        assert_eq!(config.label_color(), color("#fff"));
        assert_eq!(config.string_width(), 1.0);
        assert_eq!(config.fret_width(), 1.0);
        assert_eq!(config.font_style(), "light");
        assert_eq!(config.font_weight(), "100");
        assert_eq!(config.label_weight(), "100");
        assert_eq!(config.font_size(), None);
        assert_eq!(config.circle_radius(), None);
        assert_eq!(config.label_policy(), LabelPolicy::CountThreshold);
    }

    #[test]
    fn test_default_color_seeds_unset_colors() {
        let options = ChordBoxOptions {
            default_color: Some("#123456".to_string()),
            fret_color: Some("red".to_string()),
            ..ChordBoxOptions::default()
        };
        let config = ChordBoxConfig::resolve(&options).unwrap();

        assert_eq!(config.bridge_color(), color("#123456"));
        assert_eq!(config.string_color(), color("#123456"));
        assert_eq!(config.stroke_color(), color("#123456"));
        assert_eq!(config.text_color(), color("#123456"));
        assert_eq!(config.fret_color(), color("red"));
        // bg and label colors are not seeded
        assert_eq!(config.bg_color(), color("#fff"));
    }

    #[test]
    fn test_stroke_width_seeds_string_and_fret_width() {
        let options = ChordBoxOptions {
            stroke_width: Some(2.0),
            fret_width: Some(3.0),
            ..ChordBoxOptions::default()
        };
        let config = ChordBoxConfig::resolve(&options).unwrap();

        assert_eq!(config.string_width(), 2.0);
        assert_eq!(config.fret_width(), 3.0);
    }

    #[test]
    fn test_rejects_non_positive_geometry() {
        let cases = [
            (
                ChordBoxOptions {
                    num_strings: Some(0),
                    ..ChordBoxOptions::default()
                },
                "num_strings",
            ),
            (
                ChordBoxOptions {
                    num_frets: Some(0),
                    ..ChordBoxOptions::default()
                },
                "num_frets",
            ),
            (
                ChordBoxOptions {
                    num_strings: Some(MAX_COUNT + 1),
                    ..ChordBoxOptions::default()
                },
                "num_strings",
            ),
            (
                ChordBoxOptions {
                    num_frets: Some(u32::MAX),
                    ..ChordBoxOptions::default()
                },
                "num_frets",
            ),
            (
                ChordBoxOptions {
                    width: Some(0.0),
                    ..ChordBoxOptions::default()
                },
                "width",
            ),
            (
                ChordBoxOptions {
                    height: Some(-10.0),
                    ..ChordBoxOptions::default()
                },
                "height",
            ),
            (
                ChordBoxOptions {
                    width: Some(f32::NAN),
                    ..ChordBoxOptions::default()
                },
                "width",
            ),
            (
                ChordBoxOptions {
                    stroke_width: Some(-1.0),
                    ..ChordBoxOptions::default()
                },
                "stroke_width",
            ),
            (
                ChordBoxOptions {
                    circle_radius: Some(0.0),
                    ..ChordBoxOptions::default()
                },
                "circle_radius",
            ),
            (
                ChordBoxOptions {
                    font_size: Some(-3.0),
                    ..ChordBoxOptions::default()
                },
                "font_size",
            ),
        ];

        for (options, expected_field) in cases {
            match ChordBoxConfig::resolve(&options) {
                Err(ChordBoxError::InvalidConfig { field, .. }) => {
                    assert_eq!(field, expected_field)
                }
                other => panic!("expected InvalidConfig for {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepts_largest_counts() {
        let options = ChordBoxOptions {
            num_strings: Some(MAX_COUNT),
            num_frets: Some(MAX_COUNT),
            ..ChordBoxOptions::default()
        };
        let config = ChordBoxConfig::resolve(&options).unwrap();
        assert_eq!(config.num_strings(), MAX_COUNT);
        assert_eq!(config.num_frets(), MAX_COUNT);
    }

    #[test]
    fn test_rejects_bad_color() {
        let options = ChordBoxOptions {
            label_color: Some("definitely-not-a-color".to_string()),
            ..ChordBoxOptions::default()
        };

        let err = ChordBoxConfig::resolve(&options).unwrap_err();
        assert!(matches!(
            err,
            ChordBoxError::InvalidConfig {
                field: "label_color",
                ..
            }
        ));
        assert!(err.to_string().contains("definitely-not-a-color"));
    }

    #[test]
    fn test_label_policy() {
        assert!(!LabelPolicy::CountThreshold.shows_labels(0));
        assert!(!LabelPolicy::CountThreshold.shows_labels(2));
        assert!(LabelPolicy::CountThreshold.shows_labels(3));
        assert!(LabelPolicy::PerMarker.shows_labels(1));
    }

    #[test]
    fn test_options_from_toml() {
        let options: ChordBoxOptions = toml::from_str(
            r##"
            num_frets = 4
            width = 200.0
            stroke_color = "#000"
            label_policy = "per-marker"
            some_unknown_field = true
            "##,
        )
        .unwrap();

        assert_eq!(options.num_frets, Some(4));
        assert_eq!(options.width, Some(200.0));
        assert_eq!(options.stroke_color.as_deref(), Some("#000"));
        assert_eq!(options.label_policy, Some(LabelPolicy::PerMarker));
        assert_eq!(options.num_strings, None);
    }
}
