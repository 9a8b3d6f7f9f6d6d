//! Error types for Chordbox operations.
//!
//! [`ChordBoxError`] covers the two places a chord diagram can be rejected:
//! resolving the configuration at construction, and validating a chord
//! request before it is drawn. Both fail before any primitive reaches the
//! canvas.

use std::fmt;

use thiserror::Error;

/// The main error type for Chordbox operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChordBoxError {
    #[error("invalid configuration `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("{item} references string {string}, expected a value in 1..={num_strings}")]
    StringOutOfRange {
        item: RequestItem,
        string: u32,
        num_strings: u32,
    },

    #[error("{item} has negative fret {fret}")]
    NegativeFret { item: RequestItem, fret: i32 },
}

impl ChordBoxError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Identifies the entry of a chord request that failed validation.
///
/// Indices are zero-based positions in the request's marker or barre list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestItem {
    Marker(usize),
    Barre(usize),
}

impl fmt::Display for RequestItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(index) => write!(f, "finger marker #{index}"),
            Self::Barre(index) => write!(f, "barre #{index}"),
        }
    }
}
