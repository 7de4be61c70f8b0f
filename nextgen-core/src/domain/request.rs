//! Generation request: the parameters of one generator call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Asset, Direction, ParseError};

/// Smallest count the input control accepts.
pub const MIN_COUNT: usize = 1;
/// Largest count the input control accepts.
pub const MAX_COUNT: usize = 30;

/// Clamp a user-entered count into the input control's range.
///
/// The generator itself has no bounds; this belongs to callers that own an
/// input control.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// Which directions survive the direction filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DirectionFilter {
    #[default]
    All,
    Call,
    Put,
}

impl DirectionFilter {
    pub const ALL_FILTERS: [DirectionFilter; 3] =
        [DirectionFilter::All, DirectionFilter::Call, DirectionFilter::Put];

    /// True if a candidate with this direction passes the filter.
    pub fn admits(self, direction: Direction) -> bool {
        match self {
            DirectionFilter::All => true,
            DirectionFilter::Call => direction == Direction::Call,
            DirectionFilter::Put => direction == Direction::Put,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DirectionFilter::All => "ALL",
            DirectionFilter::Call => "CALL",
            DirectionFilter::Put => "PUT",
        }
    }

    /// Human-readable option text for selection controls.
    pub fn description(self) -> &'static str {
        match self {
            DirectionFilter::All => "All Signals",
            DirectionFilter::Call => "CALL Only",
            DirectionFilter::Put => "PUT Only",
        }
    }

    pub fn next(self) -> DirectionFilter {
        match self {
            DirectionFilter::All => DirectionFilter::Call,
            DirectionFilter::Call => DirectionFilter::Put,
            DirectionFilter::Put => DirectionFilter::All,
        }
    }

    pub fn prev(self) -> DirectionFilter {
        match self {
            DirectionFilter::All => DirectionFilter::Put,
            DirectionFilter::Call => DirectionFilter::All,
            DirectionFilter::Put => DirectionFilter::Call,
        }
    }
}

impl fmt::Display for DirectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DirectionFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(DirectionFilter::All),
            "CALL" => Ok(DirectionFilter::Call),
            "PUT" => Ok(DirectionFilter::Put),
            _ => Err(ParseError::UnknownFilter(s.to_string())),
        }
    }
}

/// Parameters for one generation call. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub count: usize,
    pub asset: Asset,
    pub direction_filter: DirectionFilter,
    /// Drops roughly 5% of surviving candidates when set.
    pub backtest_filter: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            count: 10,
            asset: Asset::default(),
            direction_filter: DirectionFilter::All,
            backtest_filter: false,
        }
    }
}

impl GenerationRequest {
    pub fn new(count: usize, asset: Asset) -> Self {
        Self {
            count,
            asset,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: DirectionFilter) -> Self {
        self.direction_filter = filter;
        self
    }

    pub fn with_backtest(mut self, enabled: bool) -> Self {
        self.backtest_filter = enabled;
        self
    }
}
