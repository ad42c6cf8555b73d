//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Largest board cell, in terminal columns and rows.
pub const MAX_CELL_W: u16 = 8;
pub const MAX_CELL_H: u16 = 4;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board position of the frame inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_W` and `1..=MAX_CELL_H`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
            cell_h: cell_h.clamp(1, MAX_CELL_H),
            anchor_y: AnchorY::Center,
            ghost: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Toggle the landing-position outline under the falling piece
    pub fn with_ghost(mut self, ghost: bool) -> Self {
        self.ghost = ghost;
        self
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        self.draw_border(fb, frame, border);

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_board_cell(fb, frame, x as u16, y as u16, *kind),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Falling piece and its landing outline, only while a game is live.
        if let Some(piece) = snap.current_piece.filter(|_| snap.is_playing && !snap.game_over) {
            if let Some(ghost_y) = snap.ghost_y.filter(|_| self.ghost) {
                let ghost_style = CellStyle::new(kind_rgb(piece.kind).darken(1, 2), PLAY_BG).dim();
                let ghost = PieceSnapshot {
                    position: Position::new(piece.position.x, ghost_y),
                    ..piece
                };
                for (x, y) in visible_cells(&ghost) {
                    self.fill_cell_rect(fb, frame, x, y, '░', ghost_style);
                }
            }
            for (x, y) in visible_cells(&piece) {
                self.draw_board_cell(fb, frame, x, y, piece.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        // Overlays.
        if snap.game_over {
            self.draw_overlay_text(fb, frame, 0, "GAME OVER");
            self.draw_final_score(fb, frame, 2, snap.score);
            self.draw_overlay_text(fb, frame, 4, "ENTER: new game");
        } else if snap.is_paused {
            self.draw_overlay_text(fb, frame, 0, "PAUSED");
        } else if !snap.is_playing {
            self.draw_overlay_text(fb, frame, 0, "PRESS ENTER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(kind_rgb(kind), PLAY_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match snap.next_piece {
            Some(next) => {
                let style = CellStyle::new(kind_rgb(next.kind), SCREEN_BG).bold();
                for (row_idx, row) in next.shape.rows().enumerate() {
                    let py = y.saturating_add(row_idx as u16);
                    for (col, filled) in row.iter().enumerate() {
                        if *filled {
                            let px = panel_x.saturating_add(col as u16 * 2);
                            fb.put_str(px, py, "██", style);
                        }
                    }
                }
            }
            None => {
                fb.put_char(panel_x, y, '-', value);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, row_offset: u16, text: &str) {
        let (x, y) = overlay_origin(frame, row_offset, text.chars().count() as u16);
        fb.put_str(x, y, text, overlay_style());
    }

    /// `Final Score: N`, centered like the other overlay lines
    fn draw_final_score(&self, fb: &mut FrameBuffer, frame: Frame, row_offset: u16, score: u32) {
        const LABEL: &str = "Final Score: ";
        let digits = score.checked_ilog10().map_or(1, |d| d + 1) as u16;
        let (x, y) = overlay_origin(frame, row_offset, LABEL.len() as u16 + digits);
        let end = fb.put_str(x, y, LABEL, overlay_style());
        fb.put_u32(end, y, score, overlay_style());
    }
}

fn overlay_origin(frame: Frame, row_offset: u16, text_w: u16) -> (u16, u16) {
    let y = frame.y.saturating_add(frame.h / 2).saturating_add(row_offset);
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    (x, y)
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}

/// Display color of a piece kind, from its `#rrggbb` string
fn kind_rgb(kind: PieceKind) -> Rgb {
    Rgb::from_hex(kind.color()).unwrap_or(Rgb::new(200, 200, 200))
}

/// Board cells of a piece that fall inside the visible grid
fn visible_cells(piece: &PieceSnapshot) -> impl Iterator<Item = (u16, u16)> + '_ {
    piece.board_cells().filter_map(|(x, y)| {
        let inside =
            (0..BOARD_WIDTH as i16).contains(&x) && (0..BOARD_HEIGHT as i16).contains(&y);
        inside.then_some((x as u16, y as u16))
    })
}
