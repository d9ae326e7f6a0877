//! Movement Resolver
//!
//! Pure resolution of a move request against board occupancy. Nothing in
//! this module mutates the board; the executor applies the returned
//! [`Outcome`].
//!
//! One generalized scan handles all four directions: find the block's
//! leading edge, walk outward counting empty cells, and stop at the first
//! obstruction or the board boundary. The boundary behaves like a wall
//! unless a direction- and color-matching exit gate sits on the edge cell
//! in the block's lane.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Direction};
use crate::error::EngineError;
use crate::game::board::{Block, BlockId, Board, CellState, ExitGate};

/// Result of resolving one move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Direction not in the block's allowed set; nothing happens.
    Rejected,
    /// Block is already flush against an obstruction; nothing happens.
    NoOp,
    /// Block travels `distance` cells and stays on the board.
    Slide {
        /// Number of empty cells traversed
        distance: u32,
    },
    /// Block reaches a matching perimeter gate and leaves the board.
    Exit {
        /// The gate the block leaves through
        gate: ExitGate,
    },
}

impl Outcome {
    /// Whether applying this outcome changes the board.
    pub fn mutates(&self) -> bool {
        matches!(self, Outcome::Slide { .. } | Outcome::Exit { .. })
    }
}

/// Resolve a move request into an [`Outcome`] without touching the board.
///
/// Fails only on caller bugs (`UnknownBlock`); a direction the block does
/// not allow is the `Rejected` outcome, not an error.
pub fn resolve(
    board: &Board,
    block_id: BlockId,
    direction: Direction,
) -> Result<Outcome, EngineError> {
    let block = board.block(block_id)?;
    if !block.allows(direction) {
        return Ok(Outcome::Rejected);
    }

    // Walk outward from the leading edge, one cell at a time. The scan
    // stops at the first non-empty cell or the first boundary crossing;
    // cells beyond an obstruction are never considered.
    let mut probe = leading_probe(block, direction);
    let mut distance = 0u32;
    while board.in_bounds(probe) {
        match board.occupancy(probe)? {
            CellState::Empty => {
                distance += 1;
                probe = probe.step(direction);
            }
            CellState::Occupied(_) => {
                return Ok(if distance == 0 {
                    Outcome::NoOp
                } else {
                    Outcome::Slide { distance }
                });
            }
        }
    }

    // Boundary reached with no blocking block. A gate on the edge cell in
    // the block's lane lets a color match through; otherwise the edge is
    // just another wall.
    let edge = edge_coord(board, block, direction);
    if let Some(gate) = board.exit_at(edge, block.directions()) {
        if gate.color == block.color {
            return Ok(Outcome::Exit { gate: *gate });
        }
    }

    Ok(if distance == 0 {
        Outcome::NoOp
    } else {
        Outcome::Slide { distance }
    })
}

/// The first cell outside the block on its travel side.
fn leading_probe(block: &Block, direction: Direction) -> Coord {
    match direction {
        Direction::Up | Direction::Left => block.anchor.step(direction),
        Direction::Down | Direction::Right => {
            block.anchor.offset(direction, block.length as i32)
        }
    }
}

/// The perimeter cell where a gate would sit for this block and direction.
fn edge_coord(board: &Board, block: &Block, direction: Direction) -> Coord {
    match direction {
        Direction::Up => Coord::new(block.anchor.col, 0),
        Direction::Down => Coord::new(block.anchor.col, board.rows() as i32 - 1),
        Direction::Left => Coord::new(0, block.anchor.row),
        Direction::Right => Coord::new(board.cols() as i32 - 1, block.anchor.row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::level::{ExitInfo, LevelData, MovableInfo};

    fn level_6x6(movables: Vec<MovableInfo>, exits: Vec<ExitInfo>) -> LevelData {
        LevelData {
            move_limit: 0,
            row_count: 6,
            col_count: 6,
            cell_info: Vec::new(),
            movable_info: movables,
            exit_info: exits,
        }
    }

    fn movable(row: i32, col: i32, dirs: &[u8], length: u32, colors: u8) -> MovableInfo {
        MovableInfo {
            row,
            col,
            direction: dirs.to_vec(),
            length,
            colors,
        }
    }

    fn exit(row: i32, col: i32, direction: u8, colors: u8) -> ExitInfo {
        ExitInfo {
            row,
            col,
            direction,
            colors,
        }
    }

    #[test]
    fn test_rejects_direction_outside_allowed_set() {
        let level = level_6x6(vec![movable(2, 0, &[1, 3], 2, 0)], Vec::new());
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Up).unwrap(),
            Outcome::Rejected
        );
    }

    #[test]
    fn test_exit_on_matching_gate() {
        // Scenario: horizontal length-2 block at (0,2), matching gate at (5,2)
        let level = level_6x6(
            vec![movable(2, 0, &[1, 3], 2, 0)],
            vec![exit(2, 5, 1, 0)],
        );
        let board = Board::from_level(&level).unwrap();
        match resolve(&board, BlockId(0), Direction::Right).unwrap() {
            Outcome::Exit { gate } => {
                assert_eq!(gate.coord, Coord::new(5, 2));
                assert_eq!(gate.direction, Direction::Right);
            }
            other => panic!("expected exit, got {:?}", other),
        }
    }

    #[test]
    fn test_color_mismatch_treats_edge_as_wall() {
        let level = level_6x6(
            vec![movable(2, 0, &[1, 3], 2, 0)],
            vec![exit(2, 5, 1, 1)],
        );
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Right).unwrap(),
            Outcome::Slide { distance: 4 }
        );
    }

    #[test]
    fn test_no_gate_treats_edge_as_wall() {
        let level = level_6x6(vec![movable(2, 0, &[1, 3], 2, 0)], Vec::new());
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Right).unwrap(),
            Outcome::Slide { distance: 4 }
        );
    }

    #[test]
    fn test_slide_stops_at_first_blocking_block() {
        // Vertical length-3 block at (2,0); a blocker occupies (2,4)
        let level = level_6x6(
            vec![movable(0, 2, &[0, 2], 3, 0), movable(4, 2, &[0, 2], 1, 1)],
            Vec::new(),
        );
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Down).unwrap(),
            Outcome::Slide { distance: 1 }
        );
    }

    #[test]
    fn test_adjacent_blocker_yields_noop() {
        let level = level_6x6(
            vec![movable(0, 2, &[0, 2], 3, 0), movable(3, 2, &[0, 2], 1, 1)],
            Vec::new(),
        );
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Down).unwrap(),
            Outcome::NoOp
        );
    }

    #[test]
    fn test_flush_against_wall_yields_noop() {
        let level = level_6x6(vec![movable(2, 0, &[1, 3], 2, 0)], Vec::new());
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Left).unwrap(),
            Outcome::NoOp
        );
    }

    #[test]
    fn test_block_flush_against_matching_gate_exits_at_zero_distance() {
        // Block already touches the right edge; the gate still lets it out
        let level = level_6x6(
            vec![movable(2, 4, &[1, 3], 2, 0)],
            vec![exit(2, 5, 1, 0)],
        );
        let board = Board::from_level(&level).unwrap();
        assert!(matches!(
            resolve(&board, BlockId(0), Direction::Right).unwrap(),
            Outcome::Exit { .. }
        ));
    }

    #[test]
    fn test_no_lookahead_past_obstruction() {
        // Empty cells beyond the blocker must not extend the slide
        let level = level_6x6(
            vec![movable(2, 0, &[1, 3], 1, 0), movable(2, 2, &[0, 2], 1, 1)],
            vec![exit(2, 5, 1, 0)],
        );
        let board = Board::from_level(&level).unwrap();
        assert_eq!(
            resolve(&board, BlockId(0), Direction::Right).unwrap(),
            Outcome::Slide { distance: 1 }
        );
    }

    #[test]
    fn test_gate_direction_must_be_in_allowed_set() {
        // Gate on the right edge pointing up: the block moves right but
        // never up, so the gate is invisible to it
        let level = level_6x6(
            vec![movable(2, 0, &[1, 3], 2, 0)],
            vec![exit(2, 5, 0, 0)],
        );
        // Gate direction 0 (up) on row 2 is off-perimeter; use a top-row
        // gate and a vertical block to exercise the membership filter
        assert!(Board::from_level(&level).is_err());

        let level = level_6x6(
            vec![movable(1, 3, &[1, 3], 1, 0)],
            vec![exit(0, 5, 0, 0), exit(1, 5, 1, 0)],
        );
        let board = Board::from_level(&level).unwrap();
        // Right-edge gate on the block's row matches; it exits
        assert!(matches!(
            resolve(&board, BlockId(0), Direction::Right).unwrap(),
            Outcome::Exit { .. }
        ));
    }

    #[test]
    fn test_unknown_block_is_fatal() {
        let level = level_6x6(Vec::new(), Vec::new());
        let board = Board::from_level(&level).unwrap();
        assert!(matches!(
            resolve(&board, BlockId(3), Direction::Up),
            Err(EngineError::UnknownBlock(_))
        ));
    }

    #[test]
    fn test_resolve_does_not_mutate() {
        let level = level_6x6(
            vec![movable(2, 0, &[1, 3], 2, 0)],
            vec![exit(2, 5, 1, 0)],
        );
        let board = Board::from_level(&level).unwrap();
        let before = board.clone();
        let _ = resolve(&board, BlockId(0), Direction::Right).unwrap();
        let _ = resolve(&board, BlockId(0), Direction::Left).unwrap();
        assert_eq!(board, before);
    }
}
