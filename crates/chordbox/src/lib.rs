//! Chordbox - layout engine for stringed-instrument chord diagrams.
//!
//! Given a chord shape (fretted and muted strings, barres, starting
//! position, tuning), [`ChordBox`] computes the diagram geometry and issues
//! primitive drawing calls against a [`Canvas`](draw::Canvas). Two canvases
//! ship with the crate: [`draw::RecordingCanvas`] for inspecting the emitted
//! primitives, and [`export::svg::SvgCanvas`] for SVG output.
//!
//! # Example
//!
//! ```
//! use chordbox::{Barre, ChordBox, ChordRequest, FingerMarker, config::ChordBoxOptions};
//! use chordbox::export::svg::SvgCanvas;
//!
//! let options = ChordBoxOptions {
//!     width: Some(200.0),
//!     height: Some(240.0),
//!     ..ChordBoxOptions::default()
//! };
//! let mut chord_box = ChordBox::new(SvgCanvas::new(), &options)?;
//!
//! // F major barre chord
//! chord_box.draw(
//!     ChordRequest::new(vec![
//!         FingerMarker::new(5, 3).with_label("3"),
//!         FingerMarker::new(4, 3).with_label("4"),
//!         FingerMarker::new(3, 2).with_label("2"),
//!     ])
//!     .with_barres(vec![Barre::new(1, 6, 1)]),
//! )?;
//!
//! let svg = chord_box.into_canvas().to_string();
//! assert!(svg.contains("<circle"));
//! # Ok::<(), chordbox::ChordBoxError>(())
//! ```

pub mod config;
pub mod export;

mod chord;
mod engine;
mod error;
mod metrics;

pub use chordbox_core::{color, draw, geometry};

pub use chord::{Barre, ChordRequest, FingerMarker, Fret, STANDARD_TUNING, standard_tuning};
pub use engine::ChordBox;
pub use error::{ChordBoxError, RequestItem};
pub use metrics::Metrics;
