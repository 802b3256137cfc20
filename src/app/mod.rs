//! Application orchestration layer
//!
//! This module coordinates between input, domain, UI, and platform layers.
//! It manages the screen state machine, the event loop, and save/restore
//! of the instance state.

pub mod controller;
pub mod snapshot;
pub mod state;

pub use controller::{run, AppError, GameController};
pub use snapshot::GameSnapshot;
pub use state::{AppState, GameEvent, GamePhase};
