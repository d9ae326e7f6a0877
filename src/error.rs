//! Error Taxonomy
//!
//! Structural errors only. A move that simply cannot happen (wrong
//! direction, no room) is an [`Outcome`](crate::game::resolve::Outcome)
//! variant, not an error: the board silently stays as it is. Errors here
//! mean a caller bug or a broken invariant and are never recovered from
//! by repairing state.

use thiserror::Error;

use crate::core::{Coord, Direction};
use crate::game::board::BlockId;

/// Fatal engine errors: caller bugs and invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside the board grid.
    #[error("coordinate {coord} outside the {cols}x{rows} board")]
    OutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Board column count
        cols: u32,
        /// Board row count
        rows: u32,
    },

    /// Referenced block id is not in the live registry.
    #[error("block {0:?} is not in the live registry")]
    UnknownBlock(BlockId),

    /// A mutation would mark an already-occupied cell.
    #[error("cell {coord} already occupied by {occupant:?}")]
    OverlapDetected {
        /// The contested cell
        coord: Coord,
        /// The block already holding it
        occupant: BlockId,
    },
}

/// Level layout validation and parsing errors.
#[derive(Debug, Error)]
pub enum LevelError {
    /// Grid dimensions must both be at least 1.
    #[error("level grid must have at least one row and one column")]
    EmptyGrid,

    /// A block's cells fall outside the grid.
    #[error("block {index} cell {coord} outside the grid")]
    BlockOutOfRange {
        /// Index of the block in the level's movable list
        index: usize,
        /// The out-of-range cell
        coord: Coord,
    },

    /// A block was declared with length 0.
    #[error("block {index} has zero length")]
    ZeroLength {
        /// Index of the block in the level's movable list
        index: usize,
    },

    /// A block has an empty allowed-direction list.
    #[error("block {index} has no allowed directions")]
    NoDirections {
        /// Index of the block in the level's movable list
        index: usize,
    },

    /// A block mixes horizontal and vertical directions.
    #[error("block {index} mixes horizontal and vertical directions")]
    MixedAxes {
        /// Index of the block in the level's movable list
        index: usize,
    },

    /// Direction index outside 0-3.
    #[error("unknown direction index {0}")]
    UnknownDirection(u8),

    /// Color index outside the color table.
    #[error("unknown color index {0}")]
    UnknownColor(u8),

    /// Two blocks claim the same cell.
    #[error("blocks {first:?} and {second:?} overlap at {coord}")]
    OverlappingBlocks {
        /// Block already holding the cell
        first: BlockId,
        /// Block that tried to claim it
        second: BlockId,
        /// The contested cell
        coord: Coord,
    },

    /// Exit gate coordinate is not on the edge its direction opens toward.
    #[error("exit gate {index} at {coord} is not on the {direction:?} edge")]
    ExitOffPerimeter {
        /// Index of the gate in the level's exit list
        index: usize,
        /// The gate coordinate
        coord: Coord,
        /// The gate direction
        direction: Direction,
    },

    /// Level JSON could not be parsed.
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),

    /// Level file could not be read.
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
}
