//! Screen state machine and state transitions
//!
//! The state is kept small: one round plus two flags. Every change to
//! it goes through [`AppState::apply`], one event per player input or
//! timer tick.

use crate::config::GameSettings;
use crate::domain::{Round, RoundSummary, TickOutcome};

/// Which part of the round lifecycle the screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh round, countdown not started yet
    Idle,
    /// Countdown running, taps are being scored
    Running,
    /// Previous round just expired; the summary banner is visible
    /// while the displayed score/timer are already back at their
    /// initial values
    Over(RoundSummary),
}

/// Events the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The tap button was pressed
    Tap,
    /// One tick interval elapsed
    Tick,
    /// About dialog requested (or dismissed when already open)
    ToggleAbout,
    /// Escape: closes the dialog if open, otherwise requests quit
    CloseDialog,
    /// Quit requested
    Quit,
}

/// Complete screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub round: Round,
    pub phase: GamePhase,
    pub about_open: bool,
    quit: bool,
}

impl AppState {
    /// Fresh game: score 0, full countdown, nothing running
    pub fn fresh(settings: &GameSettings) -> Self {
        Self {
            round: Round::fresh(settings.round_duration()),
            phase: GamePhase::Idle,
            about_open: false,
            quit: false,
        }
    }

    /// Mid-round state rebuilt from saved values
    pub fn resumed(round: Round) -> Self {
        Self {
            round,
            phase: GamePhase::Running,
            about_open: false,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Processes one event and mutates the state accordingly
    ///
    /// The about dialog is modal to taps but not to the countdown:
    /// ticks keep flowing while it is open, exactly like a dialog
    /// floating over a still-running timer.
    pub fn apply(&mut self, event: GameEvent, settings: &GameSettings) {
        match event {
            GameEvent::Tap => {
                if self.about_open {
                    return;
                }
                let started = self.round.tap();
                if started {
                    tracing::debug!(score = self.round.score(), "round started");
                    self.phase = GamePhase::Running;
                }
            }

            GameEvent::Tick => {
                if let TickOutcome::Expired(summary) = self.round.tick(settings.tick_interval()) {
                    tracing::debug!(score = summary.score, "round over");
                    self.round = Round::fresh(settings.round_duration());
                    self.phase = GamePhase::Over(summary);
                }
            }

            GameEvent::ToggleAbout => {
                self.about_open = !self.about_open;
            }

            GameEvent::CloseDialog => {
                if self.about_open {
                    self.about_open = false;
                } else {
                    self.quit = true;
                }
            }

            GameEvent::Quit => {
                self.quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GameSettings {
        GameSettings::default()
    }

    fn short_settings(round_secs: u64) -> GameSettings {
        GameSettings {
            round_secs,
            ..GameSettings::default()
        }
    }

    #[test]
    fn fresh_state_is_idle_with_zero_score() {
        let state = AppState::fresh(&settings());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.round.score(), 0);
        assert_eq!(state.round.remaining_secs(), 60);
        assert!(!state.should_quit());
    }

    #[test]
    fn first_tap_starts_the_round() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Tap, &cfg);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.round.score(), 1);
    }

    #[test]
    fn taps_increment_by_one_while_running() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        for _ in 0..5 {
            state.apply(GameEvent::Tap, &cfg);
        }
        assert_eq!(state.round.score(), 5);
    }

    #[test]
    fn tick_before_first_tap_leaves_timer_full() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Tick, &cfg);
        assert_eq!(state.round.remaining_secs(), 60);
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn countdown_is_monotonic_while_running() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Tap, &cfg);

        let mut previous = state.round.remaining_ms();
        for _ in 0..10 {
            state.apply(GameEvent::Tick, &cfg);
            assert!(state.round.remaining_ms() < previous);
            previous = state.round.remaining_ms();
        }
        assert_eq!(state.round.remaining_secs(), 50);
    }

    #[test]
    fn expiry_shows_summary_and_resets_everything() {
        let cfg = short_settings(5);
        let mut state = AppState::fresh(&cfg);
        for _ in 0..7 {
            state.apply(GameEvent::Tap, &cfg);
        }
        for _ in 0..5 {
            state.apply(GameEvent::Tick, &cfg);
        }

        assert_eq!(state.phase, GamePhase::Over(RoundSummary { score: 7 }));
        assert_eq!(state.round.score(), 0);
        assert_eq!(state.round.remaining_secs(), 5);
        assert!(!state.round.is_active());
    }

    #[test]
    fn tap_after_expiry_starts_a_new_round() {
        let cfg = short_settings(5);
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Tap, &cfg);
        for _ in 0..5 {
            state.apply(GameEvent::Tick, &cfg);
        }
        assert!(matches!(state.phase, GamePhase::Over(_)));

        state.apply(GameEvent::Tap, &cfg);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.round.score(), 1);
        assert_eq!(state.round.remaining_secs(), 5);
    }

    #[test]
    fn about_dialog_blocks_taps_but_not_the_countdown() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Tap, &cfg);
        state.apply(GameEvent::ToggleAbout, &cfg);
        assert!(state.about_open);

        state.apply(GameEvent::Tap, &cfg);
        assert_eq!(state.round.score(), 1, "tap behind the dialog is ignored");

        state.apply(GameEvent::Tick, &cfg);
        assert_eq!(state.round.remaining_secs(), 59, "timer keeps running");
    }

    #[test]
    fn escape_closes_the_dialog_before_quitting() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::ToggleAbout, &cfg);

        state.apply(GameEvent::CloseDialog, &cfg);
        assert!(!state.about_open);
        assert!(!state.should_quit());

        state.apply(GameEvent::CloseDialog, &cfg);
        assert!(state.should_quit());
    }

    #[test]
    fn quit_event_requests_exit() {
        let cfg = settings();
        let mut state = AppState::fresh(&cfg);
        state.apply(GameEvent::Quit, &cfg);
        assert!(state.should_quit());
    }
}
