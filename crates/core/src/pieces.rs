//! Pieces module - tetromino catalog and the immutable falling piece
//!
//! Every kind has a list of square occupancy matrices, one per rotation state,
//! in clockwise order. The O piece has a single state. No wall kicks are
//! applied: a rotation either fits in place or is rejected.

use crate::types::{PieceKind, BOARD_WIDTH};

/// One rotation state: rows of 0/1 occupancy flags, top row first.
pub type ShapeMatrix = &'static [&'static [u8]];

const I_SHAPES: [ShapeMatrix; 4] = [
    &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]],
    &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]],
    &[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]],
];

const O_SHAPES: [ShapeMatrix; 1] = [&[&[1, 1], &[1, 1]]];

const T_SHAPES: [ShapeMatrix; 4] = [
    &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]],
];

const S_SHAPES: [ShapeMatrix; 4] = [
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]],
    &[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]],
];

const Z_SHAPES: [ShapeMatrix; 4] = [
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]],
];

const J_SHAPES: [ShapeMatrix; 4] = [
    &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]],
];

const L_SHAPES: [ShapeMatrix; 4] = [
    &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]],
    &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]],
];

/// All rotation states of a piece kind, clockwise from the spawn state.
pub fn shapes(kind: PieceKind) -> &'static [ShapeMatrix] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Spawn position (top-left of the shape matrix): horizontally centered, top row.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let size = shapes(kind)[0].len() as i8;
    ((BOARD_WIDTH as i8 - size) / 2, 0)
}

/// A falling piece.
///
/// Values are immutable; movement produces a new tetromino. The rotation index
/// is normalized on construction so it always selects an existing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    rotation: u8,
    x: i8,
    y: i8,
}

impl Tetromino {
    /// Create a tetromino in its spawn rotation at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self::new(kind, 0, x, y)
    }

    /// Create a tetromino at an explicit rotation and position
    pub fn new(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        let count = shapes(kind).len() as u8;
        Self {
            kind,
            rotation: rotation % count,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Anchor of the shape matrix's top-left corner.
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Number of rotation states for this kind (1 or 4)
    pub fn rotation_count(&self) -> u8 {
        shapes(self.kind).len() as u8
    }

    /// Shape matrix of the current rotation
    pub fn shape(&self) -> ShapeMatrix {
        shapes(self.kind)[self.rotation as usize]
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape().iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled != 0)
                .map(move |(dx, _)| (x + dx as i8, y + dy as i8))
        })
    }

    /// Same piece moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece at the next clockwise rotation, position unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % self.rotation_count(),
            ..*self
        }
    }

    /// Fresh copy of this kind at its spawn rotation and position.
    pub fn respawned(&self) -> Self {
        Self::spawn(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            for (rotation, shape) in shapes(kind).iter().enumerate() {
                let filled: usize = shape
                    .iter()
                    .map(|row| row.iter().filter(|&&v| v != 0).count())
                    .sum();
                assert_eq!(filled, 4, "{:?} rotation {}", kind, rotation);
            }
        }
    }

    #[test]
    fn test_shapes_are_square() {
        for kind in PieceKind::ALL {
            for shape in shapes(kind) {
                assert!(shape.iter().all(|row| row.len() == shape.len()));
            }
        }
    }

    #[test]
    fn test_rotation_counts() {
        assert_eq!(shapes(PieceKind::O).len(), 1);
        for kind in [
            PieceKind::I,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(shapes(kind).len(), 4);
        }
    }

    #[test]
    fn test_rotation_is_normalized() {
        let piece = Tetromino::new(PieceKind::O, 3, 0, 0);
        assert_eq!(piece.rotation(), 0);
        let piece = Tetromino::new(PieceKind::T, 5, 0, 0);
        assert_eq!(piece.rotation(), 1);
    }

    #[test]
    fn test_rotated_wraps_around() {
        let mut piece = Tetromino::spawn(PieceKind::J);
        for _ in 0..4 {
            piece = piece.rotated();
        }
        assert_eq!(piece, Tetromino::spawn(PieceKind::J));
        assert_eq!(Tetromino::spawn(PieceKind::O).rotated().rotation(), 0);
    }

    #[test]
    fn test_cells_follow_position() {
        let piece = Tetromino::new(PieceKind::T, 0, 4, 10);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 10), (4, 11), (5, 11), (6, 11)]);
    }
}
