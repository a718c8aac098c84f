//! Grid tests - collision, placement and row clearing

use blockfall::core::{clear_rows, has_collision, place_piece, Grid, Piece};
use blockfall::types::{Cell, PieceColor, PieceKind, GRID_HEIGHT, GRID_WIDTH};

fn game_grid() -> Grid {
    Grid::new(GRID_WIDTH, GRID_HEIGHT)
}

/// Grid where every row has one hole except the listed full rows; each row
/// is tagged with a distinct color pattern so reordering is detectable.
fn grid_with_full_rows(full: &[usize]) -> Grid {
    let colors = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Purple,
        PieceColor::Orange,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Red,
    ];
    let rows: Vec<Vec<Cell>> = (0..GRID_HEIGHT as usize)
        .map(|y| {
            let color = colors[y % colors.len()];
            (0..GRID_WIDTH as usize)
                .map(|x| {
                    if full.contains(&y) || x != y % GRID_WIDTH as usize {
                        Some(color)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

// ============== Grid basics ==============

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert!(grid.is_empty());

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(grid.get(y, x), Some(None), "cell ({}, {})", y, x);
        }
    }
}

#[test]
fn test_grid_custom_dimensions() {
    let grid = Grid::new(4, 6);
    assert_eq!(grid.rows().count(), 6);
    assert!(grid.rows().all(|row| row.len() == 4));
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = game_grid();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_HEIGHT as i16, 0), None);
    assert_eq!(grid.get(0, GRID_WIDTH as i16), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = game_grid();
    assert!(grid.set(10, 5, Some(PieceColor::Purple)));
    assert_eq!(grid.get(10, 5), Some(Some(PieceColor::Purple)));
    assert!(grid.is_occupied(10, 5));

    assert!(grid.set(10, 5, None));
    assert!(!grid.is_occupied(10, 5));

    assert!(!grid.set(-1, 0, Some(PieceColor::Red)));
    assert!(!grid.set(0, GRID_WIDTH as i16, Some(PieceColor::Red)));
}

#[test]
fn test_from_rows_round_trip() {
    let grid = grid_with_full_rows(&[3]);
    assert_eq!(Grid::from_rows(grid.to_rows()), Some(grid));
}

// ============== Collision ==============

#[test]
fn test_no_collision_inside_empty_grid() {
    let grid = game_grid();
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert!(!has_collision(&grid, &piece, 0, 3), "{:?}", kind);
        assert!(!has_collision(&grid, &piece, 10, 0), "{:?}", kind);
    }
}

#[test]
fn test_collision_with_side_walls() {
    let grid = game_grid();
    let piece = Piece::new(PieceKind::O);

    // Column -1 sticks out on the left.
    assert!(has_collision(&grid, &piece, 5, -1));
    // O is two wide: col 9 puts its right half at col == width.
    assert!(has_collision(&grid, &piece, 5, GRID_WIDTH as i16 - 1));
    assert!(!has_collision(&grid, &piece, 5, GRID_WIDTH as i16 - 2));
}

#[test]
fn test_collision_with_floor() {
    let grid = game_grid();
    let piece = Piece::new(PieceKind::L); // three rows tall
    assert!(!has_collision(&grid, &piece, 17, 0));
    assert!(has_collision(&grid, &piece, 18, 0));
}

#[test]
fn test_collision_with_locked_block() {
    let mut grid = game_grid();
    grid.set(6, 4, Some(PieceColor::Green));
    let piece = Piece::new(PieceKind::T); // [[0,1,0],[1,1,1]]

    // Top cell (row 0, col 1) lands on the block.
    assert!(has_collision(&grid, &piece, 6, 3));
    // Empty corner (row 0, col 0) over the block is fine.
    assert!(!has_collision(&grid, &piece, 6, 4));
}

#[test]
fn test_rows_above_grid_ignore_contents() {
    let mut grid = game_grid();
    grid.fill_row(0, PieceColor::Red);
    let piece = Piece::new(PieceKind::L);

    // Rows -3..=-1: above the grid, nothing to hit.
    assert!(!has_collision(&grid, &piece, -3, 4));
    // Row -2 reaches into row 0, which is full.
    assert!(has_collision(&grid, &piece, -2, 4));
    // Side walls still apply above the grid.
    assert!(has_collision(&grid, &piece, -3, -1));
}

// ============== Placement ==============

#[test]
fn test_place_piece_writes_color() {
    let grid = game_grid();
    let piece = Piece::new(PieceKind::S).at(18, 0); // [[0,1,1],[1,1,0]]
    let placed = place_piece(&grid, &piece);

    let green = Some(Some(PieceColor::Green));
    assert_eq!(placed.get(18, 0), Some(None));
    assert_eq!(placed.get(18, 1), green);
    assert_eq!(placed.get(18, 2), green);
    assert_eq!(placed.get(19, 0), green);
    assert_eq!(placed.get(19, 1), green);
    assert_eq!(placed.get(19, 2), Some(None));

    // Input grid is untouched.
    assert!(grid.is_empty());
}

#[test]
fn test_place_piece_keeps_existing_cells() {
    let mut grid = game_grid();
    grid.set(0, 0, Some(PieceColor::Blue));
    let placed = place_piece(&grid, &Piece::new(PieceKind::I).at(19, 0));
    assert_eq!(placed.get(0, 0), Some(Some(PieceColor::Blue)));
    assert!(!placed.is_row_full(19));
    assert_eq!(
        placed.row(19).unwrap().iter().filter(|c| c.is_some()).count(),
        4
    );
}

// ============== Row clearing ==============

#[test]
fn test_clear_rows_keeps_height_and_backfills_top() {
    for full in [&[][..], &[19][..], &[0, 19][..], &[4, 5, 6, 7][..]] {
        let grid = grid_with_full_rows(full);
        let result = clear_rows(&grid);

        assert_eq!(result.grid.height(), GRID_HEIGHT);
        assert_eq!(result.grid.width(), GRID_WIDTH);
        assert_eq!(result.cleared as usize, full.len());

        for y in 0..result.cleared as usize {
            assert!(result.grid.row(y).unwrap().iter().all(Option::is_none));
        }
    }
}

#[test]
fn test_clear_rows_five_and_nine() {
    let grid = grid_with_full_rows(&[5, 9]);
    let result = clear_rows(&grid);

    assert_eq!(result.cleared, 2);

    let empty = vec![None; GRID_WIDTH as usize];
    let before = grid.to_rows();
    let mut expected: Vec<Vec<Cell>> = vec![empty.clone(), empty];
    expected.extend(
        before
            .into_iter()
            .enumerate()
            .filter(|(y, _)| *y != 5 && *y != 9)
            .map(|(_, row)| row),
    );

    assert_eq!(result.grid.to_rows(), expected);
}

#[test]
fn test_clear_rows_entire_grid() {
    let mut grid = Grid::new(3, 4);
    for y in 0..4 {
        grid.fill_row(y, PieceColor::Orange);
    }
    let result = clear_rows(&grid);
    assert_eq!(result.cleared, 4);
    assert!(result.grid.is_empty());
}

#[test]
fn test_clear_rows_does_not_mutate_input() {
    let grid = grid_with_full_rows(&[19]);
    let copy = grid.clone();
    let _ = clear_rows(&grid);
    assert_eq!(grid, copy);
}
