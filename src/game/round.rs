//! Round rules: score, countdown clock, clear and game-over detection
//!
//! Lives beside the motion/spawn engine, never inside it: the engine only
//! moves birds, the round decides what a tap or a second is worth.

use serde::{Deserialize, Serialize};

/// Round phase
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Clock running, taps count
    #[default]
    Playing,
    /// Clear score reached before time ran out
    Cleared,
    /// Time ran out
    Over,
}

/// Why a round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEndReason {
    ScoreReached,
    TimeUp,
}

/// Round state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundState {
    pub phase: RoundPhase,
    pub score: i32,
    pub time_left: u32,
    pub clear_score: i32,
    duration: u32,
}

impl RoundState {
    pub fn new(duration: u32, clear_score: i32) -> Self {
        Self {
            phase: RoundPhase::Playing,
            score: 0,
            time_left: duration,
            clear_score,
            duration,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == RoundPhase::Playing
    }

    /// Apply a tap's score. Ignored once the round has stopped.
    pub fn apply_score(&mut self, delta: i32) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.score = self.score.saturating_add(delta);
        true
    }

    /// One second of round clock.
    ///
    /// The clock ticks first; then the clear score is checked before the
    /// time limit, so reaching the score on the last second still clears.
    pub fn tick_second(&mut self) -> Option<RoundEndReason> {
        if !self.is_playing() {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);

        if self.score >= self.clear_score {
            self.phase = RoundPhase::Cleared;
            return Some(RoundEndReason::ScoreReached);
        }

        if self.time_left == 0 {
            self.phase = RoundPhase::Over;
            return Some(RoundEndReason::TimeUp);
        }

        None
    }

    /// Back to a fresh round with the same rules
    pub fn restart(&mut self) {
        *self = Self::new(self.duration, self.clear_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let round = RoundState::new(60, 100);
        assert_eq!(round.phase, RoundPhase::Playing);
        assert_eq!(round.score, 0);
        assert_eq!(round.time_left, 60);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut round = RoundState::new(60, 100);
        assert!(round.apply_score(-5));
        assert!(round.apply_score(-2));
        assert_eq!(round.score, -7);
    }

    #[test]
    fn test_time_up() {
        let mut round = RoundState::new(3, 100);
        assert_eq!(round.tick_second(), None);
        assert_eq!(round.tick_second(), None);
        assert_eq!(round.tick_second(), Some(RoundEndReason::TimeUp));
        assert_eq!(round.phase, RoundPhase::Over);
        assert_eq!(round.time_left, 0);
    }

    #[test]
    fn test_clear_checked_on_clock_tick() {
        let mut round = RoundState::new(60, 10);
        round.apply_score(10);
        // Still playing until the clock notices
        assert!(round.is_playing());

        assert_eq!(round.tick_second(), Some(RoundEndReason::ScoreReached));
        assert_eq!(round.phase, RoundPhase::Cleared);
        assert_eq!(round.time_left, 59);
    }

    #[test]
    fn test_clear_wins_on_last_second() {
        let mut round = RoundState::new(1, 5);
        round.apply_score(5);
        assert_eq!(round.tick_second(), Some(RoundEndReason::ScoreReached));
        assert_eq!(round.phase, RoundPhase::Cleared);
    }

    #[test]
    fn test_stopped_round_ignores_input() {
        let mut round = RoundState::new(1, 100);
        round.tick_second();
        assert_eq!(round.phase, RoundPhase::Over);

        assert!(!round.apply_score(5));
        assert_eq!(round.score, 0);
        assert_eq!(round.tick_second(), None);
        assert_eq!(round.time_left, 0);
    }

    #[test]
    fn test_restart() {
        let mut round = RoundState::new(2, 100);
        round.apply_score(15);
        round.tick_second();
        round.tick_second();
        assert_eq!(round.phase, RoundPhase::Over);

        round.restart();

        assert_eq!(round, RoundState::new(2, 100));
    }
}
