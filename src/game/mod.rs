//! Game Logic Module
//!
//! The movement-resolution and game-state engine. Synchronous and
//! single-threaded: one move request is fully resolved and applied
//! before the next is accepted.
//!
//! ## Module Structure
//!
//! - `level`: level layouts and JSON parsing
//! - `board`: cell grid, block registry, exit gates
//! - `resolve`: pure movement resolution
//! - `engine`: move executor and event wiring
//! - `state`: game state machine and move budget
//! - `events`: domain events for external observers

pub mod board;
pub mod engine;
pub mod events;
pub mod level;
pub mod resolve;
pub mod state;

// Re-export key types
pub use board::{Block, BlockColor, BlockId, Board, CellState, ExitGate};
pub use engine::{Engine, MoveReport};
pub use events::EngineEvent;
pub use level::{load_levels, LevelData};
pub use resolve::{resolve, Outcome};
pub use state::{GameState, MoveBudget, Progress};
