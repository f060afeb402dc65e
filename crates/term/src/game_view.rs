//! GameView: draws a [`State`] into a terminal framebuffer.
//!
//! Pure (no I/O); the layout is a bordered board on the left and a side panel
//! with the score lines and the next/hold preview boxes on the right.

use crate::core::{State, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_ANCHOR};

/// Largest cell size, in terminal columns or rows.
pub const MAX_CELL_SIZE: u16 = 8;

/// Inner size of a preview box, in board cells.
const PREVIEW_CELLS: (u16, u16) = (6, 4);

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps squares roughly square in most fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &State, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let panel_w = self.preview_frame().0 + 2;
        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin = (start_x.saturating_add(1), start_y.saturating_add(1));

        fb.fill_rect(origin.0, origin.1, board_w, board_h, ' ', CellStyle::new(PLAY_BG, PLAY_BG));
        fb.draw_box(start_x, start_y, frame_w, frame_h, border_style());

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in state.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(kind) => self.fill_cell(fb, origin, x, y, '█', piece_style(*kind, PLAY_BG)),
                    None => self.fill_cell(fb, origin, x, y, '·', empty),
                }
            }
        }

        let bounds = (BOARD_WIDTH as u16, BOARD_HEIGHT as u16);
        self.draw_piece(fb, origin, &state.current, bounds, piece_style(state.current.kind(), PLAY_BG));

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, state, viewport, panel_x, start_y);

        if state.game_end {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Allocating convenience wrapper around [`render_into`](Self::render_into).
    pub fn render(&self, state: &State, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Outer size of a preview box in terminal cells.
    fn preview_frame(&self) -> (u16, u16) {
        (
            PREVIEW_CELLS.0 * self.cell_w + 2,
            PREVIEW_CELLS.1 * self.cell_h + 2,
        )
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0.saturating_add(x.saturating_mul(self.cell_w));
        let py = origin.1.saturating_add(y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw the cells of `piece` that fall inside `bounds` (in board cells).
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        piece: &Tetromino,
        bounds: (u16, u16),
        style: CellStyle,
    ) {
        for (x, y) in piece.cells() {
            if x < 0 || y < 0 || x as u16 >= bounds.0 || y as u16 >= bounds.1 {
                continue;
            }
            self.fill_cell(fb, origin, x as u16, y as u16, '█', style);
        }
    }

    /// Boxed preview of `piece` in its spawn rotation at [`PREVIEW_ANCHOR`].
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: Option<&Tetromino>, dim: bool) {
        let (w, h) = self.preview_frame();
        fb.draw_box(x, y, w, h, border_style());
        if let Some(piece) = piece {
            let shown = Tetromino::new(
                piece.kind(),
                0,
                PREVIEW_ANCHOR.0 as i8,
                PREVIEW_ANCHOR.1 as i8,
            );
            let style = piece_style(piece.kind(), PANEL_BG);
            let style = if dim { style.dim() } else { style };
            let origin = (x.saturating_add(1), y.saturating_add(1));
            self.draw_piece(fb, origin, &shown, PREVIEW_CELLS, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &State,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", state.score),
            ("HIGH", state.high_score.max(state.score)),
            ("LEVEL", state.level),
            ("ROWS", state.rows_cleared),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        let preview_h = self.preview_frame().1;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y.saturating_add(1), Some(&state.next), false);
        y = y.saturating_add(preview_h + 2);

        fb.put_str(panel_x, y, "HOLD", label);
        self.draw_preview(fb, panel_x, y.saturating_add(1), state.held.as_ref(), state.used_hold);
    }
}

fn border_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG)
}

fn piece_style(kind: PieceKind, bg: Rgb) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, bg).bold()
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(fb: &FrameBuffer, ch: char) -> usize {
        (0..fb.height())
            .map(|y| fb.row_string(y).chars().filter(|c| *c == ch).count())
            .sum()
    }

    #[test]
    fn fresh_game_shows_current_and_next() {
        let view = GameView::new(1, 1);
        let fb = view.render(&State::new(3), Viewport::new(40, 24));
        // Four cells for the falling piece plus four in the next preview.
        assert_eq!(count(&fb, '█'), 8);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&State::new(3), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn oversized_cells_are_clamped() {
        let view = GameView::new(u16::MAX, u16::MAX);
        assert_eq!((view.cell_w, view.cell_h), (MAX_CELL_SIZE, MAX_CELL_SIZE));

        // 8x8 terminal cells for each of the four current and four next cells.
        let fb = view.render(&State::new(3), Viewport::new(400, 250));
        assert_eq!(count(&fb, '█'), 8 * 8 * 8);

        let fb = GameView::new(0, 0).render(&State::new(3), Viewport::new(40, 24));
        assert_eq!(count(&fb, '█'), 8);
    }

    #[test]
    fn used_hold_dims_the_held_piece() {
        let state = State::new(3).apply(crate::types::GameAction::Hold);
        assert!(state.used_hold);

        let fb = GameView::new(1, 1).render(&state, Viewport::new(40, 30));
        let dimmed = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter_map(|(x, y)| fb.get(x, y))
            .filter(|c| c.ch == '█' && c.style.dim)
            .count();
        assert_eq!(dimmed, 4);
    }
}
