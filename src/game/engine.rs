//! Move Executor and Engine Wiring
//!
//! Owns the board and the game state controller for one level and drives
//! a full move: gate on input state, resolve, apply atomically, emit
//! events. Everything is synchronous and single-threaded; a move request
//! is fully resolved and applied before the next one is looked at.
//!
//! Event delivery order is fixed: the controller consumes `ValidMove`
//! before `GameStateChanged` is appended for the presentation layer.

use tracing::debug;

use crate::core::Direction;
use crate::error::{EngineError, LevelError};
use crate::game::board::{BlockId, Board};
use crate::game::events::EngineEvent;
use crate::game::level::LevelData;
use crate::game::resolve::{resolve, Outcome};
use crate::game::state::{GameState, MoveBudget, Progress};

/// Result of one move request: the resolved outcome and the events it
/// produced, in delivery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// How the request resolved
    pub outcome: Outcome,
    /// Events for external observers, controller-first ordering
    pub events: Vec<EngineEvent>,
}

impl MoveReport {
    fn silent(outcome: Outcome) -> Self {
        Self {
            outcome,
            events: Vec::new(),
        }
    }

    /// Whether the request changed the board.
    pub fn moved(&self) -> bool {
        self.outcome.mutates()
    }
}

/// The movement engine for one level.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    progress: Progress,
}

impl Engine {
    /// Build an engine from a level layout.
    ///
    /// `last_level` decides whether clearing the board yields `Finish`
    /// (end of the sequence) or `Win`.
    pub fn new(level: &LevelData, last_level: bool) -> Result<Self, LevelError> {
        let board = Board::from_level(level)?;
        let progress = Progress::new(MoveBudget::from_limit(level.move_limit), last_level);
        Ok(Self { board, progress })
    }

    /// Build an engine from already-constructed parts.
    pub fn from_parts(board: Board, progress: Progress) -> Self {
        Self { board, progress }
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.progress.state()
    }

    /// Moves remaining, or `None` when unlimited.
    pub fn remaining_moves(&self) -> Option<u32> {
        self.progress.remaining_moves()
    }

    /// Suspend input, returning the state-changed event if anything
    /// happened.
    pub fn pause(&mut self) -> Option<EngineEvent> {
        self.progress.pause().map(EngineEvent::GameStateChanged)
    }

    /// Resume input after a pause.
    pub fn resume(&mut self) -> Option<EngineEvent> {
        self.progress.resume().map(EngineEvent::GameStateChanged)
    }

    /// Resolve and apply one move request.
    ///
    /// Rejected and no-op requests leave the board untouched and produce
    /// no events. Errors indicate caller bugs or broken invariants, never
    /// a merely impossible move.
    pub fn try_move(
        &mut self,
        block_id: BlockId,
        direction: Direction,
    ) -> Result<MoveReport, EngineError> {
        // Defensive gating: the input layer should only send moves while
        // waiting for input, but the engine enforces it independently.
        if !self.progress.accepting_input() {
            debug!(?block_id, ?direction, state = ?self.progress.state(),
                "move ignored: not accepting input");
            return Ok(MoveReport::silent(Outcome::Rejected));
        }

        let outcome = resolve(&self.board, block_id, direction)?;
        let mut events = Vec::new();

        match outcome {
            Outcome::Rejected => {
                debug!(?block_id, ?direction, "block cannot move in the requested direction");
            }
            Outcome::NoOp => {
                debug!(?block_id, ?direction, "no room to move");
            }
            Outcome::Slide { distance } => {
                self.board.apply_slide(block_id, direction, distance)?;
                events.push(EngineEvent::ValidMove);
            }
            Outcome::Exit { gate } => {
                self.board.remove_block(block_id)?;
                events.push(EngineEvent::ValidMove);
                events.push(EngineEvent::block_exited(block_id, &gate));
            }
        }

        // Controller first, presentation after: observers reading the
        // event list see the state change only after the move.
        if events.contains(&EngineEvent::ValidMove) {
            if let Some(new_state) = self.progress.on_valid_move(self.board.block_count()) {
                events.push(EngineEvent::GameStateChanged(new_state));
            }
        }

        Ok(MoveReport { outcome, events })
    }
}
