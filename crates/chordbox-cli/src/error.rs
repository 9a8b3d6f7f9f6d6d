//! Errors reported by the chordbox CLI.
//!
//! [`CliError`] derives [`miette::Diagnostic`], so `main` can render it with
//! [`miette::GraphicalReportHandler`]. TOML parse failures carry the offending
//! file as source code, which lets the report point at the exact span.

use std::{fmt, io, ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use chordbox::ChordBoxError;

/// What kind of file a TOML document was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Config,
    Chord,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("configuration"),
            Self::Chord => f.write_str("chord file"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error on `{}`", .path.display())]
    #[diagnostic(code(chordbox::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing configuration file: {}", .0.display())]
    #[diagnostic(
        code(chordbox::config::missing),
        help("check the path passed to --config")
    )]
    MissingConfig(PathBuf),

    #[error("Failed to parse {kind}: {message}")]
    #[diagnostic(code(chordbox::parse))]
    Parse {
        kind: FileKind,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Invalid layout configuration")]
    #[diagnostic(code(chordbox::config::invalid))]
    Config(#[source] ChordBoxError),

    #[error("Chord does not fit the board")]
    #[diagnostic(
        code(chordbox::request),
        help("strings are numbered from 1 up to the configured string count, and frets start at 0")
    )]
    Request(#[source] ChordBoxError),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        kind: FileKind,
        path: impl Into<PathBuf>,
        content: String,
        message: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Self {
        let path = path.into();
        Self::Parse {
            kind,
            message: message.into(),
            src: NamedSource::new(path.display().to_string(), content),
            span: span.map(SourceSpan::from),
        }
    }
}
