//! Game State Controller
//!
//! The per-level state machine and move budget. Constructed explicitly
//! per level and owned by the engine; there is no process-wide instance.
//!
//! Transition rules on a valid move: the remaining-block check fires
//! before the move-budget check, so clearing the board on your last
//! permitted move is still a win.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Global game state for the current level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Accepting move requests
    #[default]
    WaitingInput,
    /// Level cleared; a next level exists
    Win,
    /// Move budget exhausted with blocks remaining
    Lose,
    /// Input suspended; resumable
    Pause,
    /// Last level cleared
    Finish,
}

impl GameState {
    /// Whether this state ends the level.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Win | GameState::Lose | GameState::Finish)
    }
}

/// Remaining move allowance.
///
/// Built from the level's `MoveLimit`, where 0 means no limit: an
/// unlimited budget never decrements toward a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveBudget {
    /// No move limit for this level
    Unlimited,
    /// Moves remaining before a loss
    Limited(u32),
}

impl MoveBudget {
    /// Build from a level's move limit (0 = unlimited).
    pub fn from_limit(limit: u32) -> Self {
        if limit == 0 {
            MoveBudget::Unlimited
        } else {
            MoveBudget::Limited(limit)
        }
    }

    /// Moves remaining, or `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            MoveBudget::Unlimited => None,
            MoveBudget::Limited(n) => Some(*n),
        }
    }

    fn spend(&mut self) {
        if let MoveBudget::Limited(n) = self {
            *n = n.saturating_sub(1);
        }
    }

    fn exhausted(&self) -> bool {
        matches!(self, MoveBudget::Limited(0))
    }
}

/// Tracks game state and move budget for one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    state: GameState,
    budget: MoveBudget,
    /// Whether clearing this level finishes the whole sequence
    last_level: bool,
}

impl Progress {
    /// Create a controller in `WaitingInput` with the given budget.
    pub fn new(budget: MoveBudget, last_level: bool) -> Self {
        Self {
            state: GameState::WaitingInput,
            budget,
            last_level,
        }
    }

    /// Current game state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves remaining, or `None` when unlimited.
    pub fn remaining_moves(&self) -> Option<u32> {
        self.budget.remaining()
    }

    /// Whether move requests are currently accepted.
    #[inline]
    pub fn accepting_input(&self) -> bool {
        self.state == GameState::WaitingInput
    }

    /// Consume a `ValidMove`: spend budget and derive the next state from
    /// the remaining block count.
    ///
    /// Returns the new state if it changed. Effects arriving outside
    /// `WaitingInput` are ignored; the input layer gates moves, but the
    /// controller tracks this on its own as well.
    pub fn on_valid_move(&mut self, remaining_blocks: usize) -> Option<GameState> {
        if self.state != GameState::WaitingInput {
            return None;
        }

        self.budget.spend();

        // Board emptiness is checked before budget exhaustion
        if remaining_blocks == 0 {
            let cleared = if self.last_level {
                GameState::Finish
            } else {
                GameState::Win
            };
            return self.set_state(cleared);
        }
        if self.budget.exhausted() {
            return self.set_state(GameState::Lose);
        }
        None
    }

    /// Suspend input. No-op outside `WaitingInput`.
    pub fn pause(&mut self) -> Option<GameState> {
        if self.state == GameState::WaitingInput {
            self.set_state(GameState::Pause)
        } else {
            None
        }
    }

    /// Resume input. No-op outside `Pause`.
    pub fn resume(&mut self) -> Option<GameState> {
        if self.state == GameState::Pause {
            self.set_state(GameState::WaitingInput)
        } else {
            None
        }
    }

    /// Transition to `state`, returning it if it actually changed.
    /// Requesting the current state is an idempotent no-op.
    fn set_state(&mut self, state: GameState) -> Option<GameState> {
        if self.state == state {
            return None;
        }
        info!(from = ?self.state, to = ?state, "game state changed");
        self.state = state;
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_zero_means_unlimited() {
        let budget = MoveBudget::from_limit(0);
        assert_eq!(budget, MoveBudget::Unlimited);
        assert_eq!(budget.remaining(), None);
    }

    #[test]
    fn test_unlimited_never_loses() {
        let mut progress = Progress::new(MoveBudget::Unlimited, false);
        for _ in 0..1000 {
            assert_eq!(progress.on_valid_move(3), None);
        }
        assert_eq!(progress.state(), GameState::WaitingInput);
    }

    #[test]
    fn test_budget_exhaustion_loses() {
        let mut progress = Progress::new(MoveBudget::from_limit(1), false);
        assert_eq!(progress.on_valid_move(2), Some(GameState::Lose));
        assert!(progress.state().is_terminal());
    }

    #[test]
    fn test_emptiness_beats_exhaustion() {
        // Last block exits on the last permitted move: win, not lose
        let mut progress = Progress::new(MoveBudget::from_limit(1), false);
        assert_eq!(progress.on_valid_move(0), Some(GameState::Win));
    }

    #[test]
    fn test_clearing_with_budget_left_wins() {
        let mut progress = Progress::new(MoveBudget::from_limit(3), false);
        assert_eq!(progress.on_valid_move(0), Some(GameState::Win));
        assert_eq!(progress.remaining_moves(), Some(2));
    }

    #[test]
    fn test_last_level_finishes() {
        let mut progress = Progress::new(MoveBudget::from_limit(3), true);
        assert_eq!(progress.on_valid_move(0), Some(GameState::Finish));
    }

    #[test]
    fn test_moves_ignored_after_terminal_state() {
        let mut progress = Progress::new(MoveBudget::from_limit(1), false);
        progress.on_valid_move(2);
        assert_eq!(progress.state(), GameState::Lose);
        // Late effects must not resurrect the level
        assert_eq!(progress.on_valid_move(0), None);
        assert_eq!(progress.state(), GameState::Lose);
    }

    #[test]
    fn test_pause_resume() {
        let mut progress = Progress::new(MoveBudget::Unlimited, false);
        assert_eq!(progress.pause(), Some(GameState::Pause));
        assert!(!progress.accepting_input());
        // Idempotent: pausing a paused game does nothing
        assert_eq!(progress.pause(), None);
        assert_eq!(progress.resume(), Some(GameState::WaitingInput));
        assert!(progress.accepting_input());
    }

    #[test]
    fn test_moves_ignored_while_paused() {
        let mut progress = Progress::new(MoveBudget::from_limit(2), false);
        progress.pause();
        assert_eq!(progress.on_valid_move(1), None);
        assert_eq!(progress.remaining_moves(), Some(2));
    }
}
