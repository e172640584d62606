//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against the framebuffer contents.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as Tag, BOARD_HEIGHT, BOARD_WIDTH};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const OUTLINE: Rgb = Rgb::new(0, 0, 0);

/// Fill color for a cell tag (1..=7), `None` for empty or unknown tags.
pub fn tag_color(tag: Tag) -> Option<Rgb> {
    match tag {
        1 => Some(Rgb::new(0, 200, 220)),  // cyan
        2 => Some(Rgb::new(40, 80, 230)),  // blue
        3 => Some(Rgb::new(255, 165, 0)),  // orange
        4 => Some(Rgb::new(240, 220, 60)), // yellow
        5 => Some(Rgb::new(60, 200, 80)),  // green
        6 => Some(Rgb::new(160, 70, 200)), // purple
        7 => Some(Rgb::new(220, 50, 50)),  // red
        _ => None,
    }
}

/// Lays out the playfield (centered, bordered) and a side panel.
///
/// Each board cell is `cell_w` x `cell_h` terminal cells. Filled cells are drawn as a
/// colored block framed by `[` `]` so neighbouring blocks stay distinguishable.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
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

impl GameView {
    /// Total size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the playfield border for a viewport.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render the snapshot into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.origin(viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let grid = snap.composite();
        for (y, row) in grid.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                self.draw_cell(fb, start_x, start_y, x as u16, y as u16, tag);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over() {
            let text = " GAME OVER ";
            let w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(150, 20, 20)).bold();
            fb.put_str(x, start_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_str(x, y, "┌", style);
        fb.put_str(right, y, "┐", style);
        fb.put_str(x, bottom, "└", style);
        fb.put_str(right, bottom, "┘", style);
        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        tag: Tag,
    ) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;

        let Some(color) = tag_color(tag) else {
            let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_str(px + self.cell_w - 1, py, "·", style);
            return;
        };

        let style = CellStyle::new(OUTLINE, color);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if self.cell_w >= 2 {
            fb.put_str(px, py, "[", style);
            fb.put_str(px + self.cell_w - 1, py, "]", style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let status = if snap.game_over() { "GAME OVER" } else { "RUNNING" };
        let lines: [(&str, CellStyle); 10] = [
            ("BLOCKFALL", label),
            ("", value),
            ("STATUS", label),
            (status, value),
            ("", value),
            ("KEYS", label),
            ("←/→  move", dim),
            ("↓    drop", dim),
            ("↑    rotate", dim),
            ("q    quit", dim),
        ];
        for (i, (text, style)) in lines.iter().enumerate() {
            fb.put_str(panel_x, start_y + i as u16, text, *style);
        }
    }
}
