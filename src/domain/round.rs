//! Round rules: score counting and the countdown
//!
//! A round is the active period between the first tap and timer expiry.
//! This module works exclusively in milliseconds and has no knowledge
//! of how ticks are scheduled or how the state is displayed.

use std::time::Duration;

/// Summary of a finished round, shown to the player when the timer expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Final score at the moment the countdown reached zero
    pub score: u32,
}

/// Result of advancing the countdown by one tick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round still in progress (or not started; remaining time unchanged)
    Running { remaining_ms: u64 },
    /// Countdown reached zero on this tick
    Expired(RoundSummary),
}

/// A single game round: score, remaining time, and whether the countdown runs
///
/// Starts inactive with a full countdown. The first tap activates it;
/// after that each tick shrinks the remaining time until it hits zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    score: u32,
    remaining_ms: u64,
    active: bool,
}

impl Round {
    /// Creates a fresh, inactive round with a full countdown
    pub fn fresh(duration: Duration) -> Self {
        Self {
            score: 0,
            remaining_ms: duration.as_millis() as u64,
            active: false,
        }
    }

    /// Rebuilds a round from previously saved values
    ///
    /// The caller decides whether a saved-but-inactive round should
    /// instead become a fresh one; this constructor takes the values as-is.
    pub fn restored(score: u32, remaining_ms: u64, active: bool) -> Self {
        Self {
            score,
            remaining_ms,
            active,
        }
    }

    /// Registers a tap: auto-starts the round if needed, then scores it
    ///
    /// # Returns
    /// true if this tap started the round
    pub fn tap(&mut self) -> bool {
        let started = !self.active;
        self.active = true;
        self.score += 1;
        started
    }

    /// Advances the countdown by one tick interval
    ///
    /// Inactive rounds are untouched. Remaining time never underflows:
    /// an interval larger than the remainder clamps to zero and expires.
    pub fn tick(&mut self, interval: Duration) -> TickOutcome {
        if !self.active {
            return TickOutcome::Running {
                remaining_ms: self.remaining_ms,
            };
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(interval.as_millis() as u64);
        if self.remaining_ms == 0 {
            self.active = false;
            TickOutcome::Expired(RoundSummary { score: self.score })
        } else {
            TickOutcome::Running {
                remaining_ms: self.remaining_ms,
            }
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Remaining whole seconds, as shown on the timer label
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms / 1000
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUND: Duration = Duration::from_secs(60);
    const TICK: Duration = Duration::from_secs(1);

    #[test]
    fn fresh_round_starts_at_zero() {
        let round = Round::fresh(ROUND);
        assert_eq!(round.score(), 0);
        assert_eq!(round.remaining_secs(), 60);
        assert!(!round.is_active());
    }

    #[test]
    fn first_tap_starts_the_round_and_counts() {
        let mut round = Round::fresh(ROUND);
        assert!(round.tap());
        assert!(round.is_active());
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn each_tap_adds_exactly_one() {
        let mut round = Round::fresh(ROUND);
        for expected in 1..=10 {
            round.tap();
            assert_eq!(round.score(), expected);
        }
    }

    #[test]
    fn tick_is_noop_while_inactive() {
        let mut round = Round::fresh(ROUND);
        let outcome = round.tick(TICK);
        assert_eq!(outcome, TickOutcome::Running { remaining_ms: 60_000 });
        assert_eq!(round.remaining_secs(), 60);
    }

    #[test]
    fn countdown_decreases_in_one_second_steps() {
        let mut round = Round::fresh(ROUND);
        round.tap();

        let mut previous = round.remaining_ms();
        for expected_secs in (1..60).rev() {
            match round.tick(TICK) {
                TickOutcome::Running { remaining_ms } => {
                    assert_eq!(remaining_ms, previous - 1000);
                    assert_eq!(round.remaining_secs(), expected_secs);
                    previous = remaining_ms;
                }
                TickOutcome::Expired(_) => panic!("expired too early"),
            }
        }
    }

    #[test]
    fn final_tick_expires_with_the_score() {
        let mut round = Round::fresh(Duration::from_secs(2));
        round.tap();
        round.tap();
        round.tap();

        assert!(matches!(round.tick(TICK), TickOutcome::Running { .. }));
        assert_eq!(
            round.tick(TICK),
            TickOutcome::Expired(RoundSummary { score: 3 })
        );
        assert!(!round.is_active());
    }

    #[test]
    fn oversized_interval_clamps_to_zero() {
        let mut round = Round::fresh(Duration::from_millis(500));
        round.tap();
        assert_eq!(
            round.tick(TICK),
            TickOutcome::Expired(RoundSummary { score: 1 })
        );
        assert_eq!(round.remaining_ms(), 0);
    }

    #[test]
    fn restored_round_keeps_exact_values() {
        let round = Round::restored(17, 42_500, true);
        assert_eq!(round.score(), 17);
        assert_eq!(round.remaining_ms(), 42_500);
        assert_eq!(round.remaining_secs(), 42);
        assert!(round.is_active());
    }
}
