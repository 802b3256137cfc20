//! Game controller and main event loop
//!
//! The controller owns the screen state and translates player actions
//! into state-machine events. The loop below it is the whole runtime:
//! draw, poll the keyboard with a timeout, and deliver one tick per
//! elapsed interval, all on a single thread.

use std::time::Instant;

use crossterm::event::{self, Event};
use thiserror::Error;

use crate::app::snapshot::GameSnapshot;
use crate::app::state::{AppState, GameEvent};
use crate::config::{GameSettings, SettingsError};
use crate::input::keys::{self, GameAction};
use crate::platform::savefile::SaveFileError;
use crate::platform::terminal::{TerminalError, TerminalGuard};
use crate::ui;

/// Errors surfaced by the application layer
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Terminal(#[from] TerminalError),
    #[error(transparent)]
    SaveFile(#[from] SaveFileError),
}

/// Coordinates settings, state, and incoming events
#[derive(Debug)]
pub struct GameController {
    settings: GameSettings,
    state: AppState,
}

impl GameController {
    /// Starts a fresh game
    pub fn new(settings: GameSettings) -> Self {
        let state = AppState::fresh(&settings);
        Self { settings, state }
    }

    /// Resumes from a saved snapshot, or starts fresh when the snapshot
    /// describes a round that never began
    pub fn from_snapshot(settings: GameSettings, snapshot: GameSnapshot) -> Self {
        let state = snapshot.restore(&settings);
        tracing::debug!(
            score = state.round.score(),
            remaining_ms = state.round.remaining_ms(),
            active = state.round.is_active(),
            "restored game state"
        );
        Self { settings, state }
    }

    /// Applies a player action
    pub fn handle_action(&mut self, action: GameAction) {
        let game_event = match action {
            GameAction::Tap => GameEvent::Tap,
            GameAction::ToggleAbout => GameEvent::ToggleAbout,
            GameAction::CloseDialog => GameEvent::CloseDialog,
            GameAction::Quit => GameEvent::Quit,
        };
        self.state.apply(game_event, &self.settings);
    }

    /// Advances the countdown by one tick interval
    pub fn handle_tick(&mut self) {
        self.state.apply(GameEvent::Tick, &self.settings);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Captures the instance state for persistence
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }
}

/// Runs the game until the player quits
///
/// Input is polled with whatever time is left until the next tick, so
/// taps are handled immediately while ticks stay on schedule. Ticks are
/// delivered from the same thread as key events.
pub fn run(controller: &mut GameController, guard: &mut TerminalGuard) -> Result<(), AppError> {
    let tick_interval = controller.settings().tick_interval();
    let mut last_tick = Instant::now();

    while !controller.should_quit() {
        guard
            .terminal_mut()
            .draw(|frame| ui::render(frame, controller.state(), controller.settings()))
            .map_err(TerminalError::Draw)?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).map_err(TerminalError::Input)? {
            match event::read().map_err(TerminalError::Input)? {
                Event::Key(key) => {
                    if let Some(action) = keys::action_for(key) {
                        controller.handle_action(action);
                    }
                }
                // Resize is handled implicitly by the redraw at the top
                // of the loop.
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            controller.handle_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
