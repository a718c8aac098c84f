//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: the piece catalog, the grid
//! operations, and the controller state machine. It has no dependency on
//! terminal I/O; the only side channel is the `log` facade.
//!
//! # Module Structure
//!
//! - [`shape`]: 0/1 shape matrices and clockwise rotation
//! - [`pieces`]: the seven-piece catalog and the `Piece` value type
//! - [`rng`]: seedable LCG used to pick pieces uniformly
//! - [`grid`]: fixed-size grid with collision, placement and row clearing
//! - [`game_state`]: controller state and its pure transitions
//! - [`clock`]: fixed-period gravity scheduler
//!
//! # Game Rules
//!
//! - **Spawn**: every piece appears at row 0, column 3
//! - **Gravity**: one row per tick (400ms nominal)
//! - **Lock**: a piece that cannot fall on a gravity tick is written into the grid
//! - **Rotation**: 90° clockwise in place, rejected on any overlap (no wall kicks)
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: a piece locks while still at row 0
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::Command;
//!
//! let game = GameState::new(12345);
//! let game = game.apply_command(Command::Left);
//! let game = game.step();
//!
//! assert_eq!(game.active().row, 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod clock;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod shape;

pub use blockfall_types as types;

pub use clock::GravityClock;
pub use game_state::GameState;
pub use grid::{clear_rows, has_collision, place_piece, Grid, RowClear};
pub use pieces::{catalog_shape, spawn_piece, Piece};
pub use rng::SimpleRng;
pub use shape::{rotate, ShapeMatrix};
