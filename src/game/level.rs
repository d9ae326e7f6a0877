//! Level Layouts
//!
//! The in-memory layout a level loader hands to the engine, plus JSON
//! parsing for the level file format. Field names mirror the level files
//! (`MoveLimit`, `RowCount`, `MovableInfo`, ...), so existing level JSON
//! deserializes directly.
//!
//! Validation lives in [`Board::from_level`](crate::game::board::Board);
//! this module only carries the raw data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Complete layout for one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LevelData {
    /// Moves permitted before losing; 0 means unlimited.
    pub move_limit: u32,

    /// Number of rows in the grid.
    pub row_count: u32,

    /// Number of columns in the grid.
    pub col_count: u32,

    /// Playable cells. Level files list the full rectangle; the engine
    /// derives the grid from `row_count` x `col_count` and keeps this
    /// only so existing files round-trip.
    #[serde(default)]
    pub cell_info: Vec<CellInfo>,

    /// Movable block specs.
    #[serde(default)]
    pub movable_info: Vec<MovableInfo>,

    /// Exit gate specs.
    #[serde(default)]
    pub exit_info: Vec<ExitInfo>,
}

/// One playable cell in the level file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CellInfo {
    /// Row index
    pub row: i32,
    /// Column index
    pub col: i32,
}

/// One movable block in the level file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovableInfo {
    /// Anchor row (lowest occupied row for vertical blocks)
    pub row: i32,
    /// Anchor column (lowest occupied column for horizontal blocks)
    pub col: i32,
    /// Allowed direction indices (0 = up, 1 = right, 2 = down, 3 = left)
    pub direction: Vec<u8>,
    /// Number of consecutive cells the block occupies
    pub length: u32,
    /// Color table index
    pub colors: u8,
}

/// One exit gate in the level file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExitInfo {
    /// Gate row on the perimeter
    pub row: i32,
    /// Gate column on the perimeter
    pub col: i32,
    /// Edge the gate opens toward (direction index)
    pub direction: u8,
    /// Color table index a block must match
    pub colors: u8,
}

impl LevelData {
    /// Parse a single level from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Load every `.json` level file in a directory.
///
/// Files are sorted by name so the level sequence is deterministic
/// regardless of filesystem iteration order.
pub fn load_levels(dir: &Path) -> Result<Vec<LevelData>, LevelError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut levels = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path)?;
        levels.push(LevelData::from_json(&text)?);
    }
    Ok(levels)
}
