//! Terminal and filesystem plumbing
//!
//! This module encapsulates everything that touches the outside world:
//! raw-mode terminal setup and the on-disk snapshot file. The rest of
//! the application stays free of I/O.

pub mod savefile;
pub mod terminal;

pub use savefile::{SaveFileError, SaveFileStore};
pub use terminal::{TerminalError, TerminalGuard};
