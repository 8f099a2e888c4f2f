//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{decimal_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::score::format_time;
use crate::types::{GameStatus, Tile, GRID_SIZE};

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

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles, in cells.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles close to square on typical terminal glyphs and
        // leaves room for six-digit values.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap: 1,
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        let line = GRID_SIZE as u16;
        let inner_w = self.gap + line * (self.tile_w + self.gap);
        let inner_h = self.gap + line * (self.tile_h + self.gap);
        (inner_w + 2, inner_h + 2)
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// This is the allocation-light hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    /// `best` is the score shown in the BEST box; the caller may fold a live
    /// score into it.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        best: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let page = CellStyle::default();
        fb.clear(Cell { ch: ' ', style: page });

        let (frame_w, frame_h) = self.frame_size();
        let total_h = frame_h + 4;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(total_h) / 2;
        let board_y = top + 3;

        let label = CellStyle { bold: true, ..page };
        let dim = CellStyle { dim: true, ..page };

        // Title row.
        fb.put_str(start_x, top, "2048", label);
        fb.put_str(start_x + 6, top, "Join the tiles, get to 2048!", page);

        // Stats row.
        self.draw_stats(fb, start_x, top + 1, snap, best, page, label);

        // Board frame and tiles.
        let frame = CellStyle {
            fg: Rgb::hex(0xbbada0),
            ..page
        };
        let grid_bg = CellStyle {
            fg: Rgb::hex(0xfaf8ef),
            bg: Rgb::hex(0xbbada0),
            bold: false,
            dim: false,
        };
        fb.fill_rect(start_x + 1, board_y + 1, frame_w - 2, frame_h - 2, ' ', grid_bg);
        draw_border(fb, start_x, board_y, frame_w, frame_h, frame);

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let value = snap.grid.get(x, y).unwrap_or(0);
                self.draw_tile(fb, start_x, board_y, x as u16, y as u16, value);
            }
        }

        // Status overlays.
        match snap.status {
            GameStatus::Won => {
                self.draw_overlay(
                    fb,
                    start_x,
                    board_y,
                    snap.celebrated,
                    "You Win!",
                    "press c to keep going, n for a new game",
                );
            }
            GameStatus::Lost => {
                self.draw_overlay(
                    fb,
                    start_x,
                    board_y,
                    false,
                    "Game Over!",
                    "press n for a new game",
                );
            }
            GameStatus::Playing => {}
        }

        // Key help.
        let help = "arrows / wasd move · n new game · t scores · q quit";
        let help_x = viewport.width.saturating_sub(help.chars().count() as u16) / 2;
        fb.put_str(help_x, board_y + frame_h, help, dim);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, best: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, best, viewport, &mut fb);
        fb
    }

    fn draw_stats(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        snap: &SessionSnapshot,
        best: u32,
        value: CellStyle,
        label: CellStyle,
    ) {
        let mut x = start_x;
        fb.put_str(x, y, "SCORE", label);
        x += 6;
        fb.put_u32(x, y, snap.score, value);
        x += decimal_width(snap.score) + 2;

        fb.put_str(x, y, "BEST", label);
        x += 5;
        fb.put_u32(x, y, best, value);
        x += decimal_width(best) + 2;

        fb.put_str(x, y, "MOVES", label);
        x += 6;
        fb.put_u32(x, y, snap.moves, value);
        x += decimal_width(snap.moves) + 2;

        fb.put_str(x, y, "TIME", label);
        x += 5;
        fb.put_str(x, y, &format_time(snap.seconds), value);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        x: u16,
        y: u16,
        value: Tile,
    ) {
        let px = start_x + 1 + self.gap + x * (self.tile_w + self.gap);
        let py = board_y + 1 + self.gap + y * (self.tile_h + self.gap);

        let style = tile_style(value);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        if value > 0 {
            let text_x = px + self.tile_w.saturating_sub(decimal_width(value)) / 2;
            let text_y = py + self.tile_h / 2;
            fb.put_u32(text_x, text_y, value, style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        celebrated: bool,
        text: &str,
        hint: &str,
    ) {
        let (frame_w, frame_h) = self.frame_size();
        let band_h = 5;
        let band_y = board_y + frame_h.saturating_sub(band_h) / 2;

        let page = CellStyle::default();
        fb.fill_rect(start_x, band_y, frame_w, band_h, ' ', page);

        if celebrated {
            let gold = CellStyle {
                fg: Rgb::hex(0xedc22e),
                bold: true,
                ..page
            };
            put_centered(fb, start_x, frame_w, band_y + 1, "* * * * * * *", gold);
        }
        let title = CellStyle { bold: true, ..page };
        let dim = CellStyle { dim: true, ..page };
        put_centered(fb, start_x, frame_w, band_y + 2, text, title);
        put_centered(fb, start_x, frame_w, band_y + 3, hint, dim);
    }
}

pub(crate) fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

/// Canonical 2048 tile palette.
fn tile_style(value: Tile) -> CellStyle {
    let (bg, fg) = match value {
        0 => (0xcdc1b4, 0xcdc1b4),
        2 => (0xeee4da, 0x776e65),
        4 => (0xede0c8, 0x776e65),
        8 => (0xf2b179, 0xf9f6f2),
        16 => (0xf59563, 0xf9f6f2),
        32 => (0xf67c5f, 0xf9f6f2),
        64 => (0xf65e3b, 0xf9f6f2),
        128 => (0xedcf72, 0xf9f6f2),
        256 => (0xedcc61, 0xf9f6f2),
        512 => (0xedc850, 0xf9f6f2),
        1024 => (0xedc53f, 0xf9f6f2),
        2048 => (0xedc22e, 0xf9f6f2),
        // Tiles past the win value share the dark "super" look.
        _ => (0x3c3a32, 0xf9f6f2),
    };
    CellStyle {
        fg: Rgb::hex(fg),
        bg: Rgb::hex(bg),
        bold: true,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::types::GameStatus;

    fn snapshot(grid: Grid, status: GameStatus) -> SessionSnapshot {
        SessionSnapshot {
            grid,
            status,
            score: 120,
            moves: 7,
            seconds: 65,
            celebrated: status == GameStatus::Won,
            seed: 1,
        }
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_tile_values_and_stats() {
        let mut grid = Grid::default();
        grid.set(0, 0, 2);
        grid.set(3, 3, 2048);

        let snap = snapshot(grid, GameStatus::Playing);
        let fb = GameView::default().render(&snap, 500, Viewport::new(80, 24));
        let text = screen_text(&fb);

        assert!(text.contains("2048"));
        assert!(text.contains("SCORE"));
        assert!(text.contains("120"));
        assert!(text.contains("BEST"));
        assert!(text.contains("500"));
        assert!(text.contains("1:05"));
        assert!(text.contains("Join the tiles"));
    }

    #[test]
    fn test_win_overlay_with_hint() {
        let snap = snapshot(Grid::default(), GameStatus::Won);
        let fb = GameView::default().render(&snap, 0, Viewport::new(80, 24));
        let text = screen_text(&fb);

        assert!(text.contains("You Win!"));
        assert!(text.contains("press c to keep going"));
    }

    #[test]
    fn test_game_over_overlay() {
        let snap = snapshot(Grid::default(), GameStatus::Lost);
        let fb = GameView::default().render(&snap, 0, Viewport::new(80, 24));
        let text = screen_text(&fb);

        assert!(text.contains("Game Over!"));
        assert!(text.contains("press n for a new game"));
        assert!(!text.contains("You Win!"));
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let snap = snapshot(Grid::default(), GameStatus::Playing);
        let view = GameView::default();
        let _ = view.render(&snap, 0, Viewport::new(10, 5));
        let _ = view.render(&snap, 0, Viewport::new(0, 0));
    }

    #[test]
    fn test_tile_palette_distinguishes_values() {
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
        assert_ne!(tile_style(2).fg, tile_style(8).fg);
        assert_eq!(tile_style(4096).bg, tile_style(8192).bg);
    }
}
