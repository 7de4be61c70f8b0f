//! Access gate: a one-way Locked → Unlocked switch behind a literal pair.
//!
//! This is a cosmetic gate, not authentication. The pair is compiled into the
//! binary and anyone can read it.

use thiserror::Error;
use tracing::info;

const USERNAME: &str = "NEXTGEN";
const PASSWORD: &str = "NEXTGEN20";

/// Shown on a mismatch.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Shown when a field is left empty.
pub const MISSING_FIELDS: &str = "Username and password are required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,
    #[error("{}", MISSING_FIELDS)]
    MissingFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

/// Login form state plus the lock.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    pub username: String,
    pub password: String,
    state: GateState,
    error: Option<GateError>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Last error from `submit`, cleared on success.
    pub fn error(&self) -> Option<GateError> {
        self.error
    }

    /// Compare the current fields against the literal pair.
    ///
    /// Once unlocked, the gate stays unlocked and further submissions succeed.
    pub fn submit(&mut self) -> Result<(), GateError> {
        if self.is_unlocked() {
            return Ok(());
        }

        let result = check(&self.username, &self.password);
        match result {
            Ok(()) => {
                self.state = GateState::Unlocked;
                self.error = None;
                info!("access gate unlocked");
            }
            Err(e) => {
                self.error = Some(e);
                info!(reason = %e, "access gate rejected submission");
            }
        }
        result
    }
}

/// Stateless check of one pair. Empty fields are rejected before comparison.
pub fn check(username: &str, password: &str) -> Result<(), GateError> {
    if username.is_empty() || password.is_empty() {
        return Err(GateError::MissingFields);
    }
    if username == USERNAME && password == PASSWORD {
        Ok(())
    } else {
        Err(GateError::InvalidCredentials)
    }
}
