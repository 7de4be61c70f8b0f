//! Signal: one timestamped, directional, asset-labelled record.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ParseError;

/// Display format for signal times (24-hour, minutes resolution).
pub const TIME_FORMAT: &str = "%H:%M";

/// The two mutually exclusive directional tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Call,
    Put,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Call => "CALL",
            Direction::Put => "PUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CALL" => Ok(Direction::Call),
            "PUT" => Ok(Direction::Put),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// A generated signal. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Zero-based position in the pre-filter generation loop.
    pub index: usize,
    /// Full timestamp; `time()` renders the `HH:MM` label.
    pub at: NaiveDateTime,
    /// Symbol with the brand suffix, e.g. `EUR/USD NEXTGEN`.
    pub asset: String,
    pub direction: Direction,
}

impl Signal {
    pub fn time(&self) -> String {
        self.at.format(TIME_FORMAT).to_string()
    }
}
