//! Engine Events
//!
//! Domain events the executor emits for external observers. The engine
//! returns them ordered: the game state controller consumes `ValidMove`
//! before any `GameStateChanged` is appended, so a presentation layer
//! reading the list front to back always sees state changes after the
//! move that caused them.

use serde::{Deserialize, Serialize};

use crate::core::Direction;
use crate::game::board::{BlockColor, BlockId, ExitGate};
use crate::game::state::GameState;

/// Event raised while applying a resolved move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A move was applied (slide or exit). Drives the move budget.
    ValidMove,

    /// A block left the board through an exit gate. Carries what an
    /// effects layer needs to animate the departure.
    BlockExited {
        /// The departed block
        block_id: BlockId,
        /// The gate's color
        color: BlockColor,
        /// The edge the block left through
        direction: Direction,
    },

    /// The global game state changed (Win, Lose, Finish, Pause, ...).
    GameStateChanged(GameState),
}

impl EngineEvent {
    /// Create a block-exited event from the gate the block left through.
    pub fn block_exited(block_id: BlockId, gate: &ExitGate) -> Self {
        EngineEvent::BlockExited {
            block_id,
            color: gate.color,
            direction: gate.direction,
        }
    }
}
