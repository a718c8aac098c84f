//! Pieces module - tetromino catalog and the piece value type
//!
//! Shapes are given as 0/1 matrices in their spawn orientation. Rotation is
//! plain matrix rotation (see [`crate::shape::rotate`]); there is no kick
//! table.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::shape::ShapeMatrix;
use crate::types::{PieceColor, PieceKind, MAX_SHAPE_DIM, SPAWN_COL, SPAWN_ROW};

/// Upper bound on occupied cells of any shape
pub const MAX_PIECE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[1, 0], &[1, 0], &[1, 1]];
const J_ROWS: &[&[u8]] = &[&[0, 1], &[0, 1], &[1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

/// Spawn-orientation matrix for a piece kind
pub fn catalog_shape(kind: PieceKind) -> ShapeMatrix {
    let rows = match kind {
        PieceKind::I => I_ROWS,
        PieceKind::O => O_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::L => L_ROWS,
        PieceKind::J => J_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::Z => Z_ROWS,
    };
    ShapeMatrix::from_rows(rows)
}

/// A piece: shape, color and the grid position of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: PieceColor,
    pub row: i16,
    pub col: i16,
}

impl Piece {
    /// Create a piece of the given kind at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: catalog_shape(kind),
            color: kind.color(),
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Same piece placed at (row, col)
    pub fn at(self, row: i16, col: i16) -> Self {
        Self { row, col, ..self }
    }

    /// Same piece shifted by (d_row, d_col)
    pub fn moved(self, d_row: i16, d_col: i16) -> Self {
        self.at(self.row + d_row, self.col + d_col)
    }

    /// Same position and color with a different shape
    pub fn with_shape(self, shape: ShapeMatrix) -> Self {
        Self { shape, ..self }
    }

    /// Absolute (row, col) of every occupied cell
    pub fn cells(&self) -> ArrayVec<(i16, i16), MAX_PIECE_CELLS> {
        self.shape
            .cells()
            .map(|(r, c)| (self.row + r, self.col + c))
            .collect()
    }
}

/// Spawn a uniformly chosen piece at the spawn position.
///
/// Every call builds a fresh shape value; nothing is shared between pieces.
pub fn spawn_piece(rng: &mut SimpleRng) -> Piece {
    Piece::new(rng.next_kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(catalog_shape(kind).filled_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_new_piece_at_spawn() {
        let piece = Piece::new(PieceKind::T);
        assert_eq!((piece.row, piece.col), (0, 3));
        assert_eq!(piece.color, PieceColor::Purple);
        assert_eq!(piece.shape.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let piece = Piece::new(PieceKind::O).at(5, 2);
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(5, 2), (5, 3), (6, 2), (6, 3)]);
    }

    #[test]
    fn test_moved_keeps_shape() {
        let piece = Piece::new(PieceKind::S);
        let moved = piece.moved(2, -1);
        assert_eq!((moved.row, moved.col), (2, 2));
        assert_eq!(moved.shape, piece.shape);
    }

    #[test]
    fn test_spawn_piece_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(5);
        let mut b = SimpleRng::new(5);
        for _ in 0..20 {
            assert_eq!(spawn_piece(&mut a), spawn_piece(&mut b));
        }
    }
}
