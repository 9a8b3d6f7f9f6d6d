//! Derived layout metrics.
//!
//! Every distance in a chord diagram is derived from the configured canvas
//! size and string/fret counts. The board occupies 75% of the canvas in each
//! direction; the remaining margin leaves room for the position number on the
//! left, tuning labels below, and markers that overhang the outer strings.

use log::debug;

use chordbox_core::geometry::Point;

use crate::config::ChordBoxConfig;

/// Share of the canvas width and height used by the board itself.
const BOARD_SCALE: f32 = 0.75;
/// Share of the canvas width and height left as the top-left margin.
const MARGIN_SCALE: f32 = 0.15;

/// Spacing, offsets and sizes derived once from a [`ChordBoxConfig`].
///
/// `Metrics::derive` is a pure function: the same configuration always
/// produces the same metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    spacing: f32,
    fret_spacing: f32,
    compact_fret_spacing: f32,
    origin: Point,
    circle_radius: f32,
    barre_radius: f32,
    font_size: f32,
    bar_shift_x: f32,
    bridge_stroke_width: f32,
}

impl Metrics {
    /// Derives all metrics from `config`.
    pub fn derive(config: &ChordBoxConfig) -> Self {
        let board_width = config.width() * BOARD_SCALE;
        let board_height = config.height() * BOARD_SCALE;

        let spacing = board_width / config.num_strings() as f32;
        // One extra row above the nut for open/muted markers, one below for tuning.
        let fret_spacing = board_height / (config.num_frets() + 2) as f32;
        let compact_fret_spacing = board_height / (config.num_frets() + 1) as f32;

        let origin = Point::new(
            config.x() + config.width() * MARGIN_SCALE + spacing / 2.0,
            config.y() + config.height() * MARGIN_SCALE + fret_spacing,
        );

        let metrics = Self {
            spacing,
            fret_spacing,
            compact_fret_spacing,
            origin,
            circle_radius: config.circle_radius().unwrap_or(board_width / 20.0),
            barre_radius: board_width / 25.0,
            font_size: config
                .font_size()
                .unwrap_or_else(|| (board_width / 8.0).ceil()),
            bar_shift_x: board_width / 28.0,
            bridge_stroke_width: (board_height / 36.0).ceil(),
        };

        debug!(
            spacing = metrics.spacing,
            fret_spacing = metrics.fret_spacing,
            circle_radius = metrics.circle_radius,
            font_size = metrics.font_size;
            "Derived chord box metrics"
        );

        metrics
    }

    /// Horizontal distance between adjacent strings.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Vertical distance between adjacent frets for a chord with a tuning.
    pub fn fret_spacing(&self) -> f32 {
        self.fret_spacing
    }

    /// Vertical distance between adjacent frets for a chord with an empty
    /// tuning.
    pub fn compact_fret_spacing(&self) -> f32 {
        self.compact_fret_spacing
    }

    /// Returns the fret spacing for a chord with or without a tuning.
    ///
    /// Hiding the tuning row through configuration does not compact the grid.
    pub fn fret_spacing_for(&self, has_tuning: bool) -> f32 {
        if has_tuning {
            self.fret_spacing
        } else {
            self.compact_fret_spacing
        }
    }

    /// Top of the leftmost string, where the nut meets the first column.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    pub fn barre_radius(&self) -> f32 {
        self.barre_radius
    }

    /// Base font size for the position number and tuning labels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Horizontal overhang of a barre past its outer strings.
    pub fn bar_shift_x(&self) -> f32 {
        self.bar_shift_x
    }

    /// Height of the nut cap.
    pub fn bridge_stroke_width(&self) -> f32 {
        self.bridge_stroke_width
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::config::ChordBoxOptions;

    #[test]
    fn test_default_metrics() {
        let metrics = Metrics::derive(&ChordBoxConfig::default());

        // Board is 75 x 90.
        assert_approx_eq!(f32, metrics.spacing(), 12.5);
        assert_approx_eq!(f32, metrics.fret_spacing(), 90.0 / 7.0);
        assert_approx_eq!(f32, metrics.compact_fret_spacing(), 15.0);
        assert_approx_eq!(f32, metrics.origin().x(), 15.0 + 6.25);
        assert_approx_eq!(f32, metrics.origin().y(), 18.0 + 90.0 / 7.0);
        assert_approx_eq!(f32, metrics.circle_radius(), 3.75);
        assert_approx_eq!(f32, metrics.barre_radius(), 3.0);
        assert_approx_eq!(f32, metrics.font_size(), 10.0);
        assert_approx_eq!(f32, metrics.bar_shift_x(), 75.0 / 28.0);
        assert_approx_eq!(f32, metrics.bridge_stroke_width(), 3.0);
    }

    #[test]
    fn test_explicit_overrides_win() {
        let options = ChordBoxOptions {
            font_size: Some(17.0),
            circle_radius: Some(6.0),
            ..ChordBoxOptions::default()
        };
        let metrics = Metrics::derive(&ChordBoxConfig::resolve(&options).unwrap());

        assert_approx_eq!(f32, metrics.font_size(), 17.0);
        assert_approx_eq!(f32, metrics.circle_radius(), 6.0);
    }

    #[test]
    fn test_offset_moves_origin_only() {
        let base = Metrics::derive(&ChordBoxConfig::default());
        let options = ChordBoxOptions {
            x: Some(40.0),
            y: Some(-10.0),
            ..ChordBoxOptions::default()
        };
        let shifted = Metrics::derive(&ChordBoxConfig::resolve(&options).unwrap());

        assert_approx_eq!(f32, shifted.origin().x(), base.origin().x() + 40.0);
        assert_approx_eq!(f32, shifted.origin().y(), base.origin().y() - 10.0);
        assert_approx_eq!(f32, shifted.spacing(), base.spacing());
        assert_approx_eq!(f32, shifted.fret_spacing(), base.fret_spacing());
    }

    #[test]
    fn test_fret_spacing_for() {
        let metrics = Metrics::derive(&ChordBoxConfig::default());
        assert_eq!(metrics.fret_spacing_for(true), metrics.fret_spacing());
        assert_eq!(
            metrics.fret_spacing_for(false),
            metrics.compact_fret_spacing()
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::ChordBoxOptions;

    // ===================
    // Strategies
    // ===================

    fn options_strategy() -> impl Strategy<Value = ChordBoxOptions> {
        (
            1u32..13,
            1u32..25,
            1.0f32..2000.0,
            1.0f32..2000.0,
            -500.0f32..500.0,
            -500.0f32..500.0,
        )
            .prop_map(
                |(num_strings, num_frets, width, height, x, y)| ChordBoxOptions {
                    num_strings: Some(num_strings),
                    num_frets: Some(num_frets),
                    width: Some(width),
                    height: Some(height),
                    x: Some(x),
                    y: Some(y),
                    ..ChordBoxOptions::default()
                },
            )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Deriving metrics twice from the same configuration gives identical values.
    fn check_derive_is_deterministic(options: ChordBoxOptions) -> Result<(), TestCaseError> {
        let config = ChordBoxConfig::resolve(&options).expect("strategy yields valid options");

        prop_assert_eq!(Metrics::derive(&config), Metrics::derive(&config));
        prop_assert_eq!(
            Metrics::derive(&config),
            Metrics::derive(&ChordBoxConfig::resolve(&options).unwrap())
        );
        Ok(())
    }

    /// The compact layout always spaces frets further apart.
    fn check_compact_spacing_is_wider(options: ChordBoxOptions) -> Result<(), TestCaseError> {
        let metrics = Metrics::derive(&ChordBoxConfig::resolve(&options).unwrap());

        prop_assert!(metrics.compact_fret_spacing() > metrics.fret_spacing());
        prop_assert!(metrics.spacing() > 0.0);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn derive_is_deterministic(options in options_strategy()) {
            check_derive_is_deterministic(options)?;
        }

        #[test]
        fn compact_spacing_is_wider(options in options_strategy()) {
            check_compact_spacing_is_wider(options)?;
        }
    }
}
