//! Shape matrices and rotation.
//!
//! A shape is a rectangular 0/1 matrix no larger than 4x4. It is stored
//! inline (`Copy`), so rotating or placing a piece can never alias the
//! catalog's definitions.

use crate::types::MAX_SHAPE_DIM;

/// Rectangular occupancy matrix of a piece, relative to its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 flags.
    ///
    /// Rows must be non-empty, of equal length, and at most 4x4. Catalog
    /// shapes satisfy this by construction.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows.first().map_or(0, |r| r.len());
        debug_assert!(cols > 0 && cols <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == cols), "ragged shape matrix");

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate().take(MAX_SHAPE_DIM) {
            for (c, &flag) in row.iter().enumerate().take(MAX_SHAPE_DIM) {
                bits[r][c] = flag != 0;
            }
        }

        Self {
            rows: rows.len().min(MAX_SHAPE_DIM) as u8,
            cols: cols.min(MAX_SHAPE_DIM) as u8,
            bits,
        }
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether cell (row, col) of the bounding box is occupied.
    /// Cells outside the bounding box are never occupied.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// Occupied cells as (row, col) offsets, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> {
        let m = *self;
        (0..m.rows as usize).flat_map(move |r| {
            (0..m.cols as usize)
                .filter(move |&c| m.bits[r][c])
                .map(move |c| (r as i16, c as i16))
        })
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// Expand back into rows of 0/1 flags.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| self.bits[r][c] as u8)
                    .collect()
            })
            .collect()
    }
}

/// Rotate a matrix 90° clockwise.
///
/// Row `c` of the result is column `c` of the input read bottom-to-top, so a
/// `rows x cols` input yields a `cols x rows` output. The input is untouched.
pub fn rotate(matrix: &ShapeMatrix) -> ShapeMatrix {
    let rows = matrix.rows as usize;
    let cols = matrix.cols as usize;

    let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    for (c, out_row) in bits.iter_mut().enumerate().take(cols) {
        for (k, out) in out_row.iter_mut().enumerate().take(rows) {
            *out = matrix.bits[rows - 1 - k][c];
        }
    }

    ShapeMatrix {
        rows: matrix.cols,
        cols: matrix.rows,
        bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_dimensions() {
        let m = ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_filled(0, 0));
        assert!(m.is_filled(0, 1));
        assert!(m.is_filled(1, 2));
        assert!(!m.is_filled(2, 0));
        assert_eq!(m.filled_count(), 4);
    }

    #[test]
    fn test_cells_are_row_major() {
        let m = ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
        let cells: Vec<_> = m.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let t = ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
        let r = rotate(&t);
        assert_eq!(r.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_bar_swaps_dimensions() {
        let i = ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]);
        let r = rotate(&i);
        assert_eq!((r.rows(), r.cols()), (4, 1));
        assert_eq!(r.filled_count(), 4);
    }

    #[test]
    fn test_rotate_does_not_touch_input() {
        let l = ShapeMatrix::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]);
        let before = l;
        let _ = rotate(&l);
        assert_eq!(l, before);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let shapes = [
            ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
            ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeMatrix::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
        ];
        for shape in shapes {
            let back = rotate(&rotate(&rotate(&rotate(&shape))));
            assert_eq!(back, shape);
        }
    }
}
