//! Board Model
//!
//! The cell grid, the live block registry, and the exit gate registry for
//! one level. Uses BTreeMap for the block registry so iteration order is
//! deterministic.
//!
//! The read surface (`occupancy`, `block`, `exit_at`) is what the movement
//! resolver consumes. Mutation is restricted to the move executor via
//! `pub(crate)` methods that refuse to break the no-overlap invariant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Coord, Direction};
use crate::error::{EngineError, LevelError};
use crate::game::level::LevelData;

// =============================================================================
// BLOCK ID
// =============================================================================

/// Unique block identifier.
///
/// Assigned from the block's position in the level file's movable list.
/// Implements Ord for deterministic BTreeMap ordering.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlockId(pub u32);

// =============================================================================
// COLOR
// =============================================================================

/// Color tag shared by blocks and exit gates.
///
/// Indices match the level file color table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockColor {
    /// Color index 0
    Red = 0,
    /// Color index 1
    Green = 1,
    /// Color index 2
    Blue = 2,
    /// Color index 3
    Yellow = 3,
    /// Color index 4
    Magenta = 4,
}

impl BlockColor {
    /// Get color from its level-file index.
    pub fn from_index(index: u8) -> Option<BlockColor> {
        match index {
            0 => Some(BlockColor::Red),
            1 => Some(BlockColor::Green),
            2 => Some(BlockColor::Blue),
            3 => Some(BlockColor::Yellow),
            4 => Some(BlockColor::Magenta),
            _ => None,
        }
    }
}

// =============================================================================
// BLOCK
// =============================================================================

/// A movable, axis-aligned, color-tagged piece.
///
/// Occupies `length` consecutive cells along `axis` starting at `anchor`
/// (the lowest-index occupied cell). The axis never changes after
/// creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Unique id
    pub id: BlockId,
    /// Lowest-index occupied cell
    pub anchor: Coord,
    /// Number of occupied cells (>= 1)
    pub length: u32,
    /// Axis the block lies on, derived from its allowed directions
    pub axis: Axis,
    /// Color tag matched against exit gates
    pub color: BlockColor,
    /// Allowed move directions; explicit data, not inferred from axis
    directions: Vec<Direction>,
}

impl Block {
    /// Check whether a direction is in the allowed set.
    #[inline]
    pub fn allows(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    /// The allowed-direction set.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// The cells this block occupies, anchor first.
    pub fn cells(&self) -> Vec<Coord> {
        let along = match self.axis {
            Axis::Horizontal => Direction::Right,
            Axis::Vertical => Direction::Down,
        };
        (0..self.length as i32)
            .map(|i| self.anchor.offset(along, i))
            .collect()
    }
}

// =============================================================================
// EXIT GATE
// =============================================================================

/// A fixed, color-tagged opening on the board perimeter.
///
/// Gates never change state. A gate matches a block when the gate's
/// direction is in the block's allowed set and the colors are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitGate {
    /// Perimeter cell the gate sits on
    pub coord: Coord,
    /// Edge the gate opens toward
    pub direction: Direction,
    /// Color a block must match to pass
    pub color: BlockColor,
}

// =============================================================================
// CELL STATE
// =============================================================================

/// Occupancy state of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// No block on this cell
    #[default]
    Empty,
    /// Cell held by a live block
    Occupied(BlockId),
}

// =============================================================================
// BOARD
// =============================================================================

/// The aggregate board for one level: grid, blocks, and exit gates.
///
/// Owns all cells, blocks, and gates for the level's lifetime. Blocks are
/// removed from the registry (and their cells freed) when they exit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cols: u32,
    rows: u32,
    /// Row-major occupancy grid, `cells[row * cols + col]`
    cells: Vec<CellState>,
    /// Live blocks (BTreeMap for deterministic iteration)
    blocks: BTreeMap<BlockId, Block>,
    exits: Vec<ExitGate>,
}

impl Board {
    /// Build a board from a level layout, validating the whole layout.
    pub fn from_level(level: &LevelData) -> Result<Self, LevelError> {
        if level.row_count == 0 || level.col_count == 0 {
            return Err(LevelError::EmptyGrid);
        }

        let mut board = Self {
            cols: level.col_count,
            rows: level.row_count,
            cells: vec![CellState::Empty; (level.col_count * level.row_count) as usize],
            blocks: BTreeMap::new(),
            exits: Vec::with_capacity(level.exit_info.len()),
        };

        for (index, spec) in level.movable_info.iter().enumerate() {
            let id = BlockId(index as u32);
            let block = build_block(id, index, spec)?;

            for coord in block.cells() {
                if !board.in_bounds(coord) {
                    return Err(LevelError::BlockOutOfRange { index, coord });
                }
                match board.cell(coord) {
                    CellState::Empty => board.set_cell(coord, CellState::Occupied(id)),
                    CellState::Occupied(first) => {
                        return Err(LevelError::OverlappingBlocks {
                            first,
                            second: id,
                            coord,
                        });
                    }
                }
            }
            board.blocks.insert(id, block);
        }

        for (index, spec) in level.exit_info.iter().enumerate() {
            let direction = Direction::from_index(spec.direction)
                .ok_or(LevelError::UnknownDirection(spec.direction))?;
            let color =
                BlockColor::from_index(spec.colors).ok_or(LevelError::UnknownColor(spec.colors))?;
            let coord = Coord::new(spec.col, spec.row);
            if !board.in_bounds(coord) || !board.on_edge(coord, direction) {
                return Err(LevelError::ExitOffPerimeter {
                    index,
                    coord,
                    direction,
                });
            }
            board.exits.push(ExitGate {
                coord,
                direction,
                color,
            });
        }

        Ok(board)
    }

    /// Column count.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Row count.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Check whether a coordinate is on the grid.
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.col >= 0
            && coord.row >= 0
            && (coord.col as u32) < self.cols
            && (coord.row as u32) < self.rows
    }

    /// Occupancy state of a cell.
    ///
    /// Fails with `OutOfBounds` when the coordinate is off the grid.
    pub fn occupancy(&self, coord: Coord) -> Result<CellState, EngineError> {
        if !self.in_bounds(coord) {
            return Err(EngineError::OutOfBounds {
                coord,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.cell(coord))
    }

    /// Get a live block by id.
    pub fn block(&self, id: BlockId) -> Result<&Block, EngineError> {
        self.blocks.get(&id).ok_or(EngineError::UnknownBlock(id))
    }

    /// Number of live blocks remaining.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Live blocks in id order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// All exit gates.
    pub fn exits(&self) -> &[ExitGate] {
        &self.exits
    }

    /// Look up an exit gate by exact coordinate, filtered to gates whose
    /// direction is in `allowed`.
    pub fn exit_at(&self, coord: Coord, allowed: &[Direction]) -> Option<&ExitGate> {
        self.exits
            .iter()
            .find(|gate| gate.coord == coord && allowed.contains(&gate.direction))
    }

    /// Relocate a block by `distance` cells along `direction`.
    ///
    /// Leaves the board untouched unless every destination cell is free,
    /// so a failed slide is observable only as the error.
    pub(crate) fn apply_slide(
        &mut self,
        id: BlockId,
        direction: Direction,
        distance: u32,
    ) -> Result<(), EngineError> {
        let block = self.blocks.get(&id).ok_or(EngineError::UnknownBlock(id))?;
        let old_cells = block.cells();
        let new_anchor = block.anchor.offset(direction, distance as i32);
        let new_cells: Vec<Coord> = old_cells
            .iter()
            .map(|c| c.offset(direction, distance as i32))
            .collect();

        // Validate before mutating: destination must be empty or our own.
        for &coord in &new_cells {
            match self.occupancy(coord)? {
                CellState::Empty => {}
                CellState::Occupied(occupant) if occupant == id => {}
                CellState::Occupied(occupant) => {
                    return Err(EngineError::OverlapDetected { coord, occupant });
                }
            }
        }

        for &coord in &old_cells {
            self.set_cell(coord, CellState::Empty);
        }
        for &coord in &new_cells {
            self.set_cell(coord, CellState::Occupied(id));
        }
        if let Some(block) = self.blocks.get_mut(&id) {
            block.anchor = new_anchor;
        }
        Ok(())
    }

    /// Free a block's cells and drop it from the live registry.
    pub(crate) fn remove_block(&mut self, id: BlockId) -> Result<Block, EngineError> {
        let block = self.blocks.remove(&id).ok_or(EngineError::UnknownBlock(id))?;
        for coord in block.cells() {
            self.set_cell(coord, CellState::Empty);
        }
        Ok(block)
    }

    /// Verify the occupancy/registry bijection. Test helper; panics with
    /// a description of the first inconsistency found.
    pub fn assert_consistent(&self) {
        for block in self.blocks.values() {
            for coord in block.cells() {
                let state = self
                    .occupancy(coord)
                    .unwrap_or_else(|_| panic!("block {:?} cell {} off the grid", block.id, coord));
                assert_eq!(
                    state,
                    CellState::Occupied(block.id),
                    "cell {} not held by block {:?}",
                    coord,
                    block.id
                );
            }
        }
        let occupied = self
            .cells
            .iter()
            .filter(|c| matches!(c, CellState::Occupied(_)))
            .count();
        let expected: u32 = self.blocks.values().map(|b| b.length).sum();
        assert_eq!(occupied, expected as usize, "stray occupied cells on the grid");
    }

    #[inline]
    fn cell(&self, coord: Coord) -> CellState {
        self.cells[(coord.row as u32 * self.cols + coord.col as u32) as usize]
    }

    #[inline]
    fn set_cell(&mut self, coord: Coord, state: CellState) {
        self.cells[(coord.row as u32 * self.cols + coord.col as u32) as usize] = state;
    }

    /// Check whether `coord` sits on the edge a gate with `direction`
    /// must occupy (up = top row, down = bottom row, etc.).
    fn on_edge(&self, coord: Coord, direction: Direction) -> bool {
        match direction {
            Direction::Up => coord.row == 0,
            Direction::Down => coord.row == self.rows as i32 - 1,
            Direction::Left => coord.col == 0,
            Direction::Right => coord.col == self.cols as i32 - 1,
        }
    }
}

fn build_block(id: BlockId, index: usize, spec: &crate::game::level::MovableInfo) -> Result<Block, LevelError> {
    if spec.length == 0 {
        return Err(LevelError::ZeroLength { index });
    }
    if spec.direction.is_empty() {
        return Err(LevelError::NoDirections { index });
    }

    let mut directions = Vec::with_capacity(spec.direction.len());
    for &raw in &spec.direction {
        let dir = Direction::from_index(raw).ok_or(LevelError::UnknownDirection(raw))?;
        if !directions.contains(&dir) {
            directions.push(dir);
        }
    }

    let horizontal = directions.iter().any(|d| d.axis() == Axis::Horizontal);
    let vertical = directions.iter().any(|d| d.axis() == Axis::Vertical);
    let axis = match (horizontal, vertical) {
        (true, true) => return Err(LevelError::MixedAxes { index }),
        (true, false) => Axis::Horizontal,
        (false, true) => Axis::Vertical,
        (false, false) => return Err(LevelError::NoDirections { index }),
    };

    let color = BlockColor::from_index(spec.colors).ok_or(LevelError::UnknownColor(spec.colors))?;

    Ok(Block {
        id,
        anchor: Coord::new(spec.col, spec.row),
        length: spec.length,
        axis,
        color,
        directions,
    })
}
