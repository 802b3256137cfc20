//! RAII terminal setup for the game screen
//!
//! The guard owns the ratatui terminal: raw mode and the alternate
//! screen are entered on construction and left again on drop, so the
//! user's shell is restored on every exit path, including panics.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Failed to set up the terminal: {0}")]
    Setup(#[source] io::Error),
    #[error("Failed to draw the screen: {0}")]
    Draw(#[source] io::Error),
    #[error("Failed to read terminal input: {0}")]
    Input(#[source] io::Error),
}

/// Owns the terminal for the lifetime of the game
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen
    ///
    /// Also installs a panic hook that restores the terminal first, so
    /// a panic message is readable instead of being swallowed by the
    /// alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(TerminalError::Setup(err));
        }

        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));

        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
