//! NEXTGEN Core: signal batch generator and the contracts around it.
//!
//! This crate contains everything with behaviour worth testing:
//! - Domain types (assets, directions, signals, generation requests)
//! - The batch generator with its two random draw points
//! - Plain-text export used by the clipboard feature
//! - The access gate (a literal-match lock, not authentication)
//! - TOML configuration and seedable randomness

pub mod clock;
pub mod config;
pub mod domain;
pub mod export;
pub mod gate;
pub mod generator;
pub mod rng;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError, GeneratorSettings};
pub use domain::{Asset, Direction, DirectionFilter, GenerationRequest, ParseError, Signal};
pub use export::{format_batch, format_line};
pub use gate::{AccessGate, GateError, GateState};
pub use generator::{candidates, generate_with, SignalGenerator};
pub use rng::SeedPolicy;
