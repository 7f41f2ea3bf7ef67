//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_TAG};

const BLOCK: char = '█';
const GRID_DOT: char = '·';

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

/// Draws the board, the falling piece, a side panel and overlays.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            palette: Palette::default(),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render into a new framebuffer sized to `viewport`.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells and the falling piece share one pass over the overlaid grid.
        let grid = snap.overlaid();
        for (y, row) in grid.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                self.draw_tag(fb, start_x, start_y, x as u16, y as u16, tag);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));

        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, y + h - 1, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(x + w - 1, y + 1, 1, h - 2, '│', style);
    }

    fn draw_tag(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tag: u8) {
        let bg = self.palette.empty_color();
        let (ch, style) = if tag == EMPTY_TAG {
            (GRID_DOT, CellStyle::plain(Rgb::new(90, 90, 100), bg).dim())
        } else {
            (BLOCK, CellStyle::plain(self.palette.color(tag), bg).bold())
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        let fields = [
            ("LINES", snap.lines.to_string()),
            ("PIECES", snap.piece_id.to_string()),
            ("PIECE", snap.active.map_or("-", |a| a.kind.as_str()).to_string()),
            ("SEED", snap.seed.map_or_else(|| "-".to_string(), |s| s.to_string())),
        ];
        for (name, text) in &fields {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }

        let hints = [
            "←/→  move",
            "↓    drop",
            "spc  rotate",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        for line in hints {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
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
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
