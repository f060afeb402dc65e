//! Collision detection - walls, floor, and placed cells
//!
//! Only the receiving grid is consulted; the piece never collides with itself.

use crate::grid::Grid;
use crate::pieces::Tetromino;
use crate::types::Direction;

/// Would `piece` overlap a wall, the floor, or a placed cell after one step in
/// `direction`?
///
/// For [`Direction::Rotate`] pass the already-rotated candidate: it is checked
/// at its unchanged position.
pub fn collides(grid: &Grid, piece: &Tetromino, direction: Direction) -> bool {
    let (dx, dy) = direction.offset();
    piece.cells().any(|(x, y)| !grid.is_valid(x + dx, y + dy))
}
