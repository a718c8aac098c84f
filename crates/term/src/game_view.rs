//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Piece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, MAX_SHAPE_DIM};

const BLOCK: char = '█';
const EMPTY_BG: Rgb = Rgb::new(26, 26, 26);
const PANEL_MIN_W: u16 = 12;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left of the grid frame plus its outer size, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer is replaced when the viewport size changed.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        } else {
            fb.fill_rect(0, 0, viewport.width, viewport.height, ' ', CellStyle::default());
        }

        let grid = state.grid();
        let frame_w = grid.width() as u16 * self.cell_w + 2;
        let frame_h = grid.height() as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame);

        // Locked cells, or the empty background.
        for (row, cells) in grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let style = cell_style(*cell);
                let ch = if cell.is_some() { BLOCK } else { ' ' };
                self.fill_grid_cell(fb, frame, row as u16, col as u16, ch, style);
            }
        }

        // Active piece overlays the grid; cells above the top edge are hidden.
        let active = state.active();
        for (row, col) in state.active_cells() {
            if grid.get(row, col).is_some() {
                let style = cell_style(Some(active.color));
                self.fill_grid_cell(fb, frame, row as u16, col as u16, BLOCK, style);
            }
        }

        self.draw_side_panel(fb, state, viewport, frame);

        if state.is_game_over() {
            self.draw_game_over(fb, frame, state.score());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, state.next());
        y = y.saturating_add(MAX_SHAPE_DIM as u16 * self.cell_h + 1);

        for hint in ["←→ move", "↓  drop", "↑  rotate", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, value);
            y = y.saturating_add(1);
        }
    }

    /// 4x4 preview box with the piece in its spawn orientation.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        for row in 0..MAX_SHAPE_DIM {
            for col in 0..MAX_SHAPE_DIM {
                let filled = piece.shape.is_filled(row, col);
                let cell = Cell {
                    ch: if filled { BLOCK } else { ' ' },
                    style: cell_style(filled.then_some(piece.color)),
                };
                let px = x + col as u16 * self.cell_w;
                let py = y + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, cell.ch, cell.style);
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: Frame, score: u32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let centered = |text_w: u16| frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);

        let title = "GAME OVER";
        fb.put_str(centered(title.len() as u16), mid_y.saturating_sub(1), title, style);

        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let x = centered(6 + digits);
        fb.put_str(x, mid_y, "SCORE ", style);
        fb.put_u32(x + 6, mid_y, score, style);

        let hint = "r: play again";
        fb.put_str(centered(hint.len() as u16), mid_y.saturating_add(1), hint, style);
    }
}

/// Foreground color of a locked block.
pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Red => Rgb::new(220, 80, 80),
    }
}

fn cell_style(cell: Option<PieceColor>) -> CellStyle {
    match cell {
        Some(color) => CellStyle::new(color_rgb(color), EMPTY_BG).bold(),
        None => CellStyle::new(Rgb::new(90, 90, 100), EMPTY_BG),
    }
}
