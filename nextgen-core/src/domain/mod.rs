//! Domain types for NEXTGEN

pub mod asset;
pub mod request;
pub mod signal;

pub use asset::{Asset, BRAND_SUFFIX};
pub use request::{clamp_count, DirectionFilter, GenerationRequest, MAX_COUNT, MIN_COUNT};
pub use signal::{Direction, Signal, TIME_FORMAT};

use thiserror::Error;

/// Errors from parsing user-supplied symbols and tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown asset: {0}")]
    UnknownAsset(String),
    #[error("unknown direction: {0} (expected CALL or PUT)")]
    UnknownDirection(String),
    #[error("unknown direction filter: {0} (expected ALL, CALL or PUT)")]
    UnknownFilter(String),
}
