//! Chord request types.
//!
//! A [`ChordRequest`] describes one diagram: which strings are fretted or
//! muted ([`FingerMarker`]), which are covered by a [`Barre`], the starting
//! position, and the tuning labels. Strings are numbered from 1, with string
//! 1 drawn in the rightmost column.
//!
//! Requests deserialize from a compact TOML form:
//!
//! ```
//! # use chordbox::{ChordRequest, Fret};
//! let request: ChordRequest = toml::from_str(r#"
//!     chord = [[1, 2], [2, 3, "3"], [3, 2], [4, 0], [5, "x"], [6, "x"]]
//!     position = 1
//! "#).unwrap();
//!
//! assert_eq!(request.chord.len(), 6);
//! assert_eq!(request.chord[4].fret, Fret::Muted);
//! assert_eq!(request.tuning, ["E", "A", "D", "G", "B", "E"]);
//! ```

use std::fmt;

use serde::Deserialize;

use crate::error::{ChordBoxError, RequestItem};

/// Standard six-string guitar tuning, lowest string first.
pub const STANDARD_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Returns [`STANDARD_TUNING`] as owned labels.
pub fn standard_tuning() -> Vec<String> {
    STANDARD_TUNING.iter().map(|name| name.to_string()).collect()
}

/// The fret a finger marker sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FretValue")]
pub enum Fret {
    /// Fret number, where 0 is the open string.
    At(i32),
    /// The string is not played.
    Muted,
}

impl Fret {
    /// An explicitly marked open string.
    pub const OPEN: Fret = Fret::At(0);

    pub fn is_muted(self) -> bool {
        matches!(self, Self::Muted)
    }
}

impl From<i32> for Fret {
    fn from(fret: i32) -> Self {
        Self::At(fret)
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(fret) => write!(f, "{fret}"),
            Self::Muted => f.write_str("x"),
        }
    }
}

/// Serialized form of a fret: a number, or `"x"` for a muted string.
#[derive(Deserialize)]
#[serde(untagged)]
enum FretValue {
    Number(i32),
    Symbol(String),
}

impl TryFrom<FretValue> for Fret {
    type Error = String;

    fn try_from(value: FretValue) -> Result<Self, Self::Error> {
        match value {
            FretValue::Number(fret) => Ok(Self::At(fret)),
            FretValue::Symbol(symbol) if symbol.eq_ignore_ascii_case("x") => Ok(Self::Muted),
            FretValue::Symbol(symbol) => Err(format!(
                "invalid fret `{symbol}`, expected a number or \"x\""
            )),
        }
    }
}

/// One fretted, open or muted string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "MarkerValue")]
pub struct FingerMarker {
    /// 1-indexed string number.
    pub string: u32,
    pub fret: Fret,
    /// Optional finger label drawn inside the marker.
    pub label: Option<String>,
}

impl FingerMarker {
    pub fn new(string: u32, fret: impl Into<Fret>) -> Self {
        Self {
            string,
            fret: fret.into(),
            label: None,
        }
    }

    /// A muted string.
    pub fn muted(string: u32) -> Self {
        Self::new(string, Fret::Muted)
    }

    /// Attaches a finger label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Accepted layouts of a finger marker: `[string, fret]`,
/// `[string, fret, label]`, or a table with named fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum MarkerValue {
    Labeled(u32, Fret, String),
    Plain(u32, Fret),
    Table {
        string: u32,
        fret: Fret,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<MarkerValue> for FingerMarker {
    fn from(value: MarkerValue) -> Self {
        match value {
            MarkerValue::Labeled(string, fret, label) => Self {
                string,
                fret,
                label: Some(label),
            },
            MarkerValue::Plain(string, fret) => Self {
                string,
                fret,
                label: None,
            },
            MarkerValue::Table {
                string,
                fret,
                label,
            } => Self {
                string,
                fret,
                label,
            },
        }
    }
}

/// A single finger covering an inclusive range of strings at one fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Barre {
    pub from_string: u32,
    pub to_string: u32,
    pub fret: i32,
}

impl Barre {
    pub fn new(from_string: u32, to_string: u32, fret: i32) -> Self {
        Self {
            from_string,
            to_string,
            fret,
        }
    }
}

/// Everything needed to draw one chord.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChordRequest {
    pub chord: Vec<FingerMarker>,
    /// Starting fret. Values of 0 or 1 draw the nut; larger values draw the
    /// number beside the grid instead.
    pub position: u32,
    /// Fret row the position number is aligned to.
    pub position_text: u32,
    pub barres: Vec<Barre>,
    /// String names, left to right. Empty hides the tuning row.
    pub tuning: Vec<String>,
}

impl ChordRequest {
    /// Creates a request at the open position with standard tuning.
    pub fn new(chord: Vec<FingerMarker>) -> Self {
        Self {
            chord,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn with_position_text(mut self, position_text: u32) -> Self {
        self.position_text = position_text;
        self
    }

    pub fn with_barres(mut self, barres: Vec<Barre>) -> Self {
        self.barres = barres;
        self
    }

    pub fn with_tuning<I, S>(mut self, tuning: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tuning = tuning.into_iter().map(Into::into).collect();
        self
    }

    /// Frets are drawn one row higher when `position` and `position_text`
    /// are both 1.
    pub(crate) fn fret_shift(&self) -> i32 {
        if self.position == 1 && self.position_text == 1 {
            1
        } else {
            0
        }
    }

    /// Checks every marker and barre against a board with `num_strings` strings.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in request order (markers first):
    /// - [`ChordBoxError::StringOutOfRange`] for a string outside `1..=num_strings`
    /// - [`ChordBoxError::NegativeFret`] for a fret below zero
    pub fn validate(&self, num_strings: u32) -> Result<(), ChordBoxError> {
        let check_string = |item: RequestItem, string: u32| {
            if (1..=num_strings).contains(&string) {
                Ok(())
            } else {
                Err(ChordBoxError::StringOutOfRange {
                    item,
                    string,
                    num_strings,
                })
            }
        };
        let check_fret = |item: RequestItem, fret: i32| {
            if fret < 0 {
                Err(ChordBoxError::NegativeFret { item, fret })
            } else {
                Ok(())
            }
        };

        for (index, marker) in self.chord.iter().enumerate() {
            let item = RequestItem::Marker(index);
            check_string(item, marker.string)?;
            if let Fret::At(fret) = marker.fret {
                check_fret(item, fret)?;
            }
        }

        for (index, barre) in self.barres.iter().enumerate() {
            let item = RequestItem::Barre(index);
            check_string(item, barre.from_string)?;
            check_string(item, barre.to_string)?;
            check_fret(item, barre.fret)?;
        }

        Ok(())
    }
}

impl Default for ChordRequest {
    fn default() -> Self {
        Self {
            chord: Vec::new(),
            position: 0,
            position_text: 0,
            barres: Vec::new(),
            tuning: standard_tuning(),
        }
    }
}
