//! Domain logic and core data structures
//!
//! This module contains pure game rules that are independent
//! of the terminal backend and any file I/O.

pub mod round;

pub use round::{Round, RoundSummary, TickOutcome};
