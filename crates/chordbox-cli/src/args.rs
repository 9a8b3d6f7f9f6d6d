//! Command-line arguments for rendering one chord file.
//!
//! A chord file is a TOML document with the fields of a chord request
//! (`chord`, `barres`, `position`, `position_text`, `tuning`). The layout
//! file passed with `--config` holds board options such as `num_frets`,
//! `width` or `label_policy`.

use clap::Parser;

/// Render a chord diagram from a TOML chord file into SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chord file to render, e.g. `demos/c-major.toml`
    #[arg(help = "Path to the TOML chord file")]
    pub input: String,

    /// Where the rendered SVG diagram is written
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Board layout options (TOML). Falls back to `chordbox/config.toml`,
    /// then the user config directory, then the built-in defaults.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
