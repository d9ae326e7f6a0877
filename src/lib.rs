//! # Slide Core
//!
//! Deterministic movement-resolution engine for sliding-block puzzles:
//! a rectangular board holds movable multi-cell blocks and color-tagged
//! exit gates on the perimeter. The engine resolves directional move
//! requests, applies them transactionally, and drives the win/lose
//! state machine from remaining blocks and move budget.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        SLIDE CORE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Deterministic primitives                 │
//! │  ├── coord.rs     - Integer (col, row) grid coordinate       │
//! │  └── direction.rs - Cardinal directions and block axes       │
//! │                                                              │
//! │  game/            - Engine logic (deterministic)             │
//! │  ├── level.rs     - Level layouts, JSON level files          │
//! │  ├── board.rs     - Cell grid, block and exit registries     │
//! │  ├── resolve.rs   - Pure movement resolution                 │
//! │  ├── engine.rs    - Move executor and event wiring           │
//! │  ├── state.rs     - Game state machine, move budget          │
//! │  └── events.rs    - Events for presentation layers           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering, animation, input capture, and persistence are external
//! collaborators: the engine consumes `(block, direction)` requests and
//! emits plain [`EngineEvent`] data for observers.
//!
//! ## Determinism Guarantee
//!
//! Resolution is a pure function of board occupancy. The block registry
//! is a `BTreeMap`, so iteration order is stable, and the board is never
//! left with a partially applied move: every `try_move` returns with the
//! no-overlap invariant intact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use core::{Axis, Coord, Direction};
pub use error::{EngineError, LevelError};
pub use game::{
    Block, BlockColor, BlockId, Board, CellState, Engine, EngineEvent, ExitGate, GameState,
    LevelData, MoveBudget, MoveReport, Outcome, Progress,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
