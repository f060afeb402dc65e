//! Grid module - the 10x20 board of placed cells
//!
//! Uses a flat array for cache locality and cheap copies; every transition
//! that changes the board builds a new `Grid` value.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const GRID_SIZE: usize = WIDTH * HEIGHT;

/// Indices of the rows removed by a line clear, bottom to top.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

/// Result of [`Grid::line_clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub grid: Grid,
    pub cleared_rows: ClearedRows,
}

impl LineClear {
    /// Number of rows removed
    pub fn rows_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Cells of row `y`, left to right, or `None` below the board.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        Some(&self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Stamp a tetromino's filled cells onto a copy of this grid.
    ///
    /// Cells that fall outside the board are skipped.
    pub fn with_tetromino(&self, piece: &Tetromino) -> Grid {
        let mut grid = self.clone();
        for (x, y) in piece.cells() {
            grid.set(x, y, Some(piece.kind()));
        }
        grid
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Remaining rows keep their order and the top is refilled with empty rows,
    /// so the height never changes.
    pub fn line_clear(&self) -> LineClear {
        let mut grid = self.clone();
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Two-pointer compaction, bottom to top.
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    grid.cells
                        .copy_within(read_y * WIDTH..(read_y + 1) * WIDTH, write_y * WIDTH);
                }
            }
        }

        grid.cells[..write_y * WIDTH].fill(None);

        LineClear { grid, cleared_rows }
    }

    /// True when any cell of the top row is filled (game over after a lock).
    pub fn is_topped_out(&self) -> bool {
        self.cells[..WIDTH].iter().any(|cell| cell.is_some())
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
