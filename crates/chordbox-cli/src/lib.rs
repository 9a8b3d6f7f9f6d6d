//! CLI logic for the chordbox renderer.
//!
//! Reads a chord from a TOML file, lays it out with [`chordbox::ChordBox`]
//! on an SVG canvas and writes the result to disk.
//!
//! A chord file holds the fields of [`chordbox::ChordRequest`]:
//!
//! ```toml
//! position = 1
//! chord = [[6, "x"], [5, 3, "3"], [4, 2, "2"], [3, 0], [2, 1, "1"], [1, 0]]
//! ```

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::load_config;
pub use error::{CliError, FileKind};

use std::{fs, path::Path};

use log::{debug, info};

use chordbox::{ChordBox, ChordRequest, export::svg::SvgCanvas};

/// Run the chordbox CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Chord file parsing errors
/// - Chords that do not fit the configured board
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Rendering chord"
    );

    let options = config::load_config(args.config.as_ref())?;
    let request: ChordRequest = config::read_toml(Path::new(&args.input), FileKind::Chord)?;

    let mut chord_box = ChordBox::new(SvgCanvas::new(), &options).map_err(CliError::Config)?;
    chord_box.draw(request).map_err(CliError::Request)?;

    let canvas = chord_box.into_canvas();
    let size = canvas.size();
    debug!(
        elements = canvas.element_count(),
        width = size.width(),
        height = size.height();
        "Chord laid out"
    );

    fs::write(&args.output, canvas.to_string())
        .map_err(|source| CliError::io(&args.output, source))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
