//! Configuration module for tap-rally
//!
//! Settings are optional: the game runs with built-in defaults (60 second
//! rounds, 1 second ticks) and only reads a TOML file when one exists.
//! All values are clamped to playable bounds before use.

pub mod settings;

pub use settings::{GameSettings, SettingsError};
