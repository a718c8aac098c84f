//! Gravity clock - the fixed-period scheduler that drives `GameState::step`.
//!
//! The host loop feeds elapsed wall time into the clock; the clock reports
//! how many gravity ticks are due and applies them to the state it is
//! handed. It holds no game state itself.

use crate::game_state::GameState;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl GravityClock {
    /// A running clock with the given period (at least 1ms).
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running: true,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulate elapsed time and return the number of ticks now due.
    /// A cancelled clock never fires.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// Time left before the next tick, `None` while cancelled.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        self.running.then(|| self.interval_ms - self.elapsed_ms)
    }

    /// Stop firing until [`GravityClock::restart`].
    pub fn cancel(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Start a fresh period.
    pub fn restart(&mut self) {
        self.running = true;
        self.elapsed_ms = 0;
    }

    /// Advance by `elapsed_ms` and apply every due tick to `state`.
    ///
    /// Cancels itself as soon as the game is over.
    pub fn drive(&mut self, state: &GameState, elapsed_ms: u32) -> GameState {
        let mut current = state.clone();
        for _ in 0..self.advance(elapsed_ms) {
            current = current.step();
            if current.is_game_over() {
                self.cancel();
                break;
            }
        }
        current
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_whole_periods() {
        let mut clock = GravityClock::new(400);
        assert_eq!(clock.advance(399), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.advance(850), 2);
        assert_eq!(clock.until_next_tick_ms(), Some(350));
    }

    #[test]
    fn test_cancelled_clock_never_fires() {
        let mut clock = GravityClock::default();
        clock.cancel();
        assert!(!clock.is_running());
        assert_eq!(clock.advance(10_000), 0);
        assert_eq!(clock.until_next_tick_ms(), None);

        clock.restart();
        assert_eq!(clock.until_next_tick_ms(), Some(TICK_MS));
        assert_eq!(clock.advance(TICK_MS), 1);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        assert_eq!(GravityClock::new(0).interval_ms(), 1);
    }

    #[test]
    fn test_drive_applies_due_ticks() {
        let mut clock = GravityClock::new(100);
        let state = GameState::new(3);
        let driven = clock.drive(&state, 250);
        assert_eq!(driven.active().row, 2);
        assert!(clock.is_running());
    }

    #[test]
    fn test_drive_cancels_on_game_over() {
        let mut clock = GravityClock::new(10);
        let mut state = GameState::new(3);
        // Enough ticks to stack pieces to the top.
        for _ in 0..2000 {
            state = clock.drive(&state, 10);
            if state.is_game_over() {
                break;
            }
        }
        assert!(state.is_game_over());
        assert!(!clock.is_running());
        assert_eq!(clock.drive(&state, 1000), state);
    }
}
