//! Game state module - the controller's complete state and its transitions
//!
//! `GameState` is a single value. Every transition ([`GameState::step`],
//! [`GameState::apply_command`], [`GameState::restart`]) takes `&self` and
//! returns the successor, so a caller always works on the latest state and
//! swaps it in wholesale.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::grid::{clear_rows, has_collision, place_piece, Grid, RowClear};
use crate::pieces::{spawn_piece, Piece, MAX_PIECE_CELLS};
use crate::rng::SimpleRng;
use crate::shape::rotate;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    active: Piece,
    next: Piece,
    score: u32,
    phase: Phase,
    rng: SimpleRng,
    /// Set by the gravity step that locked a piece, cleared by the next step.
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Fresh game: empty grid, an active and a queued piece, score 0.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = spawn_piece(&mut rng);
        let next = spawn_piece(&mut rng);

        Self {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            active,
            next,
            score: 0,
            phase: Phase::Falling,
            rng,
            last_event: None,
        }
    }

    /// Replace the grid (scenario setup).
    pub fn with_grid(self, grid: Grid) -> Self {
        Self { grid, ..self }
    }

    /// Replace the active piece (scenario setup).
    pub fn with_active(self, active: Piece) -> Self {
        Self { active, ..self }
    }

    /// Replace the queued piece (scenario setup).
    pub fn with_next(self, next: Piece) -> Self {
        Self { next, ..self }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Absolute cells of the active piece, for overlay rendering
    pub fn active_cells(&self) -> ArrayVec<(i16, i16), MAX_PIECE_CELLS> {
        self.active.cells()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// One gravity tick.
    ///
    /// Moves the active piece down a row, or, if it cannot move, locks it,
    /// clears full rows and either brings in the next piece or ends the game
    /// (when the piece locked at spawn depth). No-op once the game is over.
    #[must_use]
    pub fn step(&self) -> Self {
        if self.is_game_over() {
            return self.clone();
        }

        let mut next = self.clone();
        next.last_event = None;

        let piece = self.active;
        if !has_collision(&self.grid, &piece, piece.row + 1, piece.col) {
            next.active = piece.moved(1, 0);
        } else {
            next.lock_active();
        }
        next
    }

    /// Lock the active piece, clear rows, and advance to the next piece.
    fn lock_active(&mut self) {
        let piece = self.active;
        let placed = place_piece(&self.grid, &piece);
        let RowClear { grid, cleared } = clear_rows(&placed);

        let points = cleared * ROW_CLEAR_POINTS;
        self.grid = grid;
        self.score += points;

        let topped_out = piece.row == SPAWN_ROW;
        self.last_event = Some(LockEvent {
            rows_cleared: cleared,
            points,
            topped_out,
        });
        debug!(
            "locked {} at ({}, {}), cleared {} row(s), score {}",
            piece.kind.as_str(),
            piece.row,
            piece.col,
            cleared,
            self.score
        );

        if topped_out {
            // The locked piece stays as the active piece so it is still drawn.
            self.phase = Phase::GameOver;
            info!("game over, final score {}", self.score);
            return;
        }

        self.active = self.next;
        self.next = spawn_piece(&mut self.rng);
    }

    /// Apply a player command.
    ///
    /// Blocked moves and rotations leave the state unchanged, as does any
    /// command once the game is over.
    #[must_use]
    pub fn apply_command(&self, command: Command) -> Self {
        if self.is_game_over() {
            trace!("ignoring {} after game over", command.as_str());
            return self.clone();
        }

        let piece = self.active;
        let candidate = match command {
            Command::Left => piece.moved(0, -1),
            Command::Right => piece.moved(0, 1),
            Command::Down => piece.moved(1, 0),
            Command::Rotate => piece.with_shape(rotate(&piece.shape)),
        };

        if has_collision(&self.grid, &candidate, candidate.row, candidate.col) {
            trace!("{} blocked", command.as_str());
            return self.clone();
        }

        Self {
            active: candidate,
            ..self.clone()
        }
    }

    /// Start over from any phase.
    ///
    /// The RNG continues from its current state so consecutive games differ.
    #[must_use]
    pub fn restart(&self) -> Self {
        info!("restart (previous score {})", self.score);
        Self::new(self.rng.state())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
