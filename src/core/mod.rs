//! Core deterministic primitives.
//!
//! Integer grid coordinates and cardinal directions. Everything here is
//! plain data; no board or game logic.

pub mod coord;
pub mod direction;

// Re-export core types
pub use coord::Coord;
pub use direction::{Axis, Direction};
