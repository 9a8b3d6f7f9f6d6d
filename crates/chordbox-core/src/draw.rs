//! Drawing primitives for chord diagrams.
//!
//! This module provides the style definitions passed to a canvas and the
//! [`Canvas`] trait itself. Layout code only ever talks to a canvas through
//! these types.
mod canvas;
mod stroke;
mod text;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use stroke::StrokeDefinition;
pub use text::TextDefinition;
