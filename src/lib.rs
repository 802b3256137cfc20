//! Tap Rally - a single-screen terminal tap game
//!
//! Tap as many times as you can before a 60-second countdown expires.
//! The screen shows the score, the remaining time, and a tap button;
//! when the timer hits zero a round summary appears and the game resets.
//! A mid-round session is snapshotted to disk on exit and resumed at the
//! next launch.
//!
//! # Architecture
//!
//! - [`domain`]: pure round rules (score counting, the countdown), no I/O
//! - [`app`]: screen state machine, controller, event loop, and the
//!   instance-state snapshot
//! - [`config`]: TOML-backed settings with built-in defaults
//! - [`input`]: key-event to game-action mapping
//! - [`ui`]: ratatui rendering of the single screen
//! - [`platform`]: raw-mode terminal guard and the on-disk save file

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod platform;
pub mod ui;

/// Game version, shown in the about dialog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
