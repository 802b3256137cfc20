//! Keyboard input mapping

pub mod keys;

pub use keys::GameAction;
