//! Grid module - the playfield and the pure simulation operations on it
//!
//! The grid is a fixed `height x width` array of cells, stored flat in
//! row-major order. Coordinates are (row, col): row 0 is the top, col 0 the
//! left edge. Dimensions are fixed at creation; only cell contents change.
//!
//! [`has_collision`], [`place_piece`] and [`clear_rows`] never mutate their
//! inputs. The latter two return new grids.

use crate::pieces::Piece;
use crate::types::{Cell, PieceColor};

/// Fixed-size grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a grid from rows of cells.
    ///
    /// Returns `None` unless the rows form a non-empty rectangle of at most
    /// 255x255 cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.len()).ok()?;
        if width == 0 || rows.iter().any(|r| r.len() != width as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i16 || col >= self.width as i16 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a locked block
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Every cell of the row is occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height as usize {
            return None;
        }
        let start = row * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// No cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Fill a whole row with one color (scenario setup helper)
    pub fn fill_row(&mut self, row: usize, color: PieceColor) {
        let width = self.width as usize;
        if row < self.height as usize {
            self.cells[row * width..(row + 1) * width].fill(Some(color));
        }
    }

    /// Convert to rows of cells
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

/// Would `piece`, moved to (`new_row`, `new_col`), hit the floor, a side wall
/// or a locked block?
///
/// Cells above the top edge (negative rows) never collide with grid
/// contents, but they are still checked against the side walls.
pub fn has_collision(grid: &Grid, piece: &Piece, new_row: i16, new_col: i16) -> bool {
    piece.shape.cells().any(|(r, c)| {
        let row = new_row + r;
        let col = new_col + c;
        row >= grid.height() as i16
            || col < 0
            || col >= grid.width() as i16
            || (row >= 0 && grid.is_occupied(row, col))
    })
}

/// Lock a piece into a copy of `grid`.
///
/// Occupied cells outside the grid are dropped silently.
pub fn place_piece(grid: &Grid, piece: &Piece) -> Grid {
    let mut out = grid.clone();
    for (row, col) in piece.cells() {
        out.set(row, col, Some(piece.color));
    }
    out
}

/// Result of [`clear_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClear {
    pub grid: Grid,
    pub cleared: u32,
}

/// Remove every full row.
///
/// Surviving rows keep their relative order and are pushed down; the grid is
/// backfilled with empty rows at the top, so the height never changes.
pub fn clear_rows(grid: &Grid) -> RowClear {
    let width = grid.width() as usize;
    let height = grid.height() as usize;

    let kept: Vec<&[Cell]> = grid
        .rows()
        .enumerate()
        .filter(|&(y, _)| !grid.is_row_full(y))
        .map(|(_, row)| row)
        .collect();
    let cleared = height - kept.len();

    let mut cells = Vec::with_capacity(width * height);
    cells.resize(cleared * width, None);
    for row in kept {
        cells.extend_from_slice(row);
    }

    RowClear {
        grid: Grid {
            width: grid.width(),
            height: grid.height(),
            cells,
        },
        cleared: cleared as u32,
    }
}
