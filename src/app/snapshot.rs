//! Instance-state bundle: the values that survive an interrupted session
//!
//! Exactly three fields, matching what the screen needs to come back
//! where it left off: score, remaining time, and whether a round was
//! running. Everything else is rebuilt from settings.

use serde::{Deserialize, Serialize};

use crate::app::state::AppState;
use crate::config::GameSettings;
use crate::domain::Round;

/// Serializable snapshot of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u32,
    pub remaining_ms: u64,
    pub round_active: bool,
}

impl GameSnapshot {
    /// Captures the current state
    pub fn capture(state: &AppState) -> Self {
        Self {
            score: state.round.score(),
            remaining_ms: state.round.remaining_ms(),
            round_active: state.round.is_active(),
        }
    }

    /// Rebuilds screen state from this snapshot
    ///
    /// A snapshot of a running round resumes it with the exact score and
    /// remaining time. Anything else (round never started, or saved right
    /// at expiry) comes back as a fresh game.
    pub fn restore(&self, settings: &GameSettings) -> AppState {
        if self.round_active && self.remaining_ms > 0 {
            AppState::resumed(Round::restored(self.score, self.remaining_ms, true))
        } else {
            AppState::fresh(settings)
        }
    }
}
