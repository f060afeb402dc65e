//! Grid tests - dimensions, stamping, line clearing, top-out

use stream_tetris::core::{Grid, Tetromino};
use stream_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(grid: &mut Grid, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, y, Some(PieceKind::J));
    }
}

#[test]
fn test_new_grid_dimensions() {
    let grid = Grid::new();
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert_eq!(grid.rows().count(), BOARD_HEIGHT as usize);
    assert!(grid.rows().all(|row| row.len() == BOARD_WIDTH as usize));
    assert!(grid.is_empty());
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(10, 0), None);
    assert_eq!(grid.get(0, 20), None);
    assert!(!grid.set(0, -1, Some(PieceKind::T)));
    assert!(!grid.is_valid(10, 5));
    assert!(grid.is_valid(9, 19));
}

#[test]
fn test_row_below_the_board_is_none() {
    let grid = Grid::new();
    assert_eq!(grid.row(19).map(|row| row.len()), Some(BOARD_WIDTH as usize));
    assert_eq!(grid.row(BOARD_HEIGHT as usize), None);
    assert_eq!(grid.row(usize::MAX), None);
    assert!(!grid.is_row_full(usize::MAX));
}

#[test]
fn test_line_clear_on_empty_grid() {
    let grid = Grid::new();
    let clear = grid.line_clear();
    assert_eq!(clear.rows_cleared(), 0);
    assert_eq!(clear.grid, grid);
}

#[test]
fn test_line_clear_rows_two_and_five() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 2);
    fill_row(&mut grid, 5);
    grid.set(9, 0, Some(PieceKind::I));
    grid.set(0, 3, Some(PieceKind::S));
    grid.set(4, 19, Some(PieceKind::Z));

    let clear = grid.line_clear();

    assert_eq!(clear.rows_cleared(), 2);
    assert_eq!(clear.cleared_rows.as_slice(), &[5, 2]);
    assert_eq!(clear.grid.height(), 20);

    // Two empty rows on top, everything above a cleared row shifts down.
    for y in 0..2 {
        assert!(clear.grid.row(y).unwrap().iter().all(|c| c.is_none()));
    }
    assert_eq!(clear.grid.get(9, 2), Some(Some(PieceKind::I)));
    assert_eq!(clear.grid.get(0, 4), Some(Some(PieceKind::S)));
    assert_eq!(clear.grid.get(4, 19), Some(Some(PieceKind::Z)));
    assert_eq!(clear.grid.cells().iter().filter(|c| c.is_some()).count(), 3);
}

#[test]
fn test_line_clear_four_bottom_rows() {
    let mut grid = Grid::new();
    for y in 16..20 {
        fill_row(&mut grid, y);
    }
    let clear = grid.line_clear();
    assert_eq!(clear.rows_cleared(), 4);
    assert!(clear.grid.is_empty());
}

#[test]
fn test_with_tetromino_stamps_kind() {
    let grid = Grid::new();
    let piece = Tetromino::new(PieceKind::O, 0, 0, 18);
    let stamped = grid.with_tetromino(&piece);

    for (x, y) in [(0, 18), (1, 18), (0, 19), (1, 19)] {
        assert_eq!(stamped.get(x, y), Some(Some(PieceKind::O)));
    }
    // The source grid is untouched.
    assert!(grid.is_empty());
}

#[test]
fn test_with_tetromino_skips_cells_above_the_board() {
    let piece = Tetromino::new(PieceKind::O, 0, 4, -1);
    let stamped = Grid::new().with_tetromino(&piece);
    assert_eq!(stamped.cells().iter().filter(|c| c.is_some()).count(), 2);
    assert!(stamped.is_topped_out());
}

#[test]
fn test_topped_out_only_checks_first_row() {
    let mut grid = Grid::new();
    grid.set(3, 1, Some(PieceKind::L));
    assert!(!grid.is_topped_out());
    grid.set(3, 0, Some(PieceKind::L));
    assert!(grid.is_topped_out());
}
