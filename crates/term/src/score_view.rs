//! ScoreView: renders the scoreboard and aggregate stats.
//!
//! Pure like `GameView`; all layout happens against the framebuffer.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::{put_centered, Viewport};
use crate::score::{format_date, format_time, GameStats, ScoreEntry};

/// Table width in columns; the last column is the 12-char date.
const TABLE_W: u16 = 43;

const COL_RANK: u16 = 0;
const COL_SCORE: u16 = 4;
const COL_MOVES: u16 = 12;
const COL_TIME: u16 = 19;
const COL_WON: u16 = 26;
const COL_DATE: u16 = 31;

/// Renders the top-scores table with a stats strip underneath.
#[derive(Debug, Default)]
pub struct ScoreView;

impl ScoreView {
    pub fn render_into(
        &self,
        scores: &[ScoreEntry],
        stats: &GameStats,
        clear_armed: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let page = CellStyle::default();
        fb.clear(Cell { ch: ' ', style: page });

        let label = CellStyle { bold: true, ..page };
        let dim = CellStyle { dim: true, ..page };

        let n = scores.len() as u16;
        let total_h = if scores.is_empty() { 5 } else { n + 7 };
        let top = viewport.height.saturating_sub(total_h) / 2;
        let table_x = viewport.width.saturating_sub(TABLE_W) / 2;

        put_centered(fb, table_x, TABLE_W, top, "TOP SCORES", label);

        if scores.is_empty() {
            put_centered(fb, table_x, TABLE_W, top + 2, "No games played yet.", page);
            self.draw_help(fb, table_x, top + 4, clear_armed);
            return;
        }

        self.draw_table(fb, scores, table_x, top + 2, page, label);
        self.draw_stats_strip(fb, stats, table_x, top + n + 4, page, label);
        self.draw_help(fb, table_x, top + n + 6, clear_armed);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        scores: &[ScoreEntry],
        stats: &GameStats,
        clear_armed: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scores, stats, clear_armed, viewport, &mut fb);
        fb
    }

    fn draw_table(
        &self,
        fb: &mut FrameBuffer,
        scores: &[ScoreEntry],
        x: u16,
        y: u16,
        value: CellStyle,
        label: CellStyle,
    ) {
        fb.put_str(x + COL_RANK, y, "#", label);
        fb.put_str(x + COL_SCORE, y, "SCORE", label);
        fb.put_str(x + COL_MOVES, y, "MOVES", label);
        fb.put_str(x + COL_TIME, y, "TIME", label);
        fb.put_str(x + COL_WON, y, "WON", label);
        fb.put_str(x + COL_DATE, y, "DATE", label);

        let win = CellStyle {
            fg: Rgb::hex(0xedc22e),
            bold: true,
            ..value
        };
        let dim = CellStyle { dim: true, ..value };

        for (i, entry) in scores.iter().enumerate() {
            let row = y + 1 + i as u16;
            let rank = i as u32 + 1;

            fb.put_u32(x + COL_RANK, row, rank, value);
            fb.put_char(x + COL_RANK + if rank < 10 { 1 } else { 2 }, row, '.', value);
            fb.put_u32(x + COL_SCORE, row, entry.score, value);
            fb.put_u32(x + COL_MOVES, row, entry.moves, value);
            fb.put_str(x + COL_TIME, row, &format_time(entry.time), value);
            if entry.won {
                fb.put_str(x + COL_WON, row, "WIN", win);
            } else {
                fb.put_char(x + COL_WON, row, '-', dim);
            }
            fb.put_str(x + COL_DATE, row, &format_date(&entry.date), value);
        }
    }

    fn draw_stats_strip(
        &self,
        fb: &mut FrameBuffer,
        stats: &GameStats,
        x: u16,
        y: u16,
        value: CellStyle,
        label: CellStyle,
    ) {
        use crate::fb::decimal_width;

        let mut cx = x;
        fb.put_str(cx, y, "GAMES", label);
        cx += 6;
        fb.put_u32(cx, y, stats.total_games, value);
        cx += decimal_width(stats.total_games) + 2;

        fb.put_str(cx, y, "WIN RATE", label);
        cx += 9;
        fb.put_u32(cx, y, stats.win_rate, value);
        cx += decimal_width(stats.win_rate);
        fb.put_char(cx, y, '%', value);
        cx += 3;

        fb.put_str(cx, y, "BEST", label);
        cx += 5;
        fb.put_u32(cx, y, stats.best_score, value);
        cx += decimal_width(stats.best_score) + 2;

        fb.put_str(cx, y, "AVG", label);
        cx += 4;
        fb.put_u32(cx, y, stats.average_score, value);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, x: u16, y: u16, clear_armed: bool) {
        let page = CellStyle::default();
        if clear_armed {
            let warn = CellStyle {
                fg: Rgb::hex(0xf65e3b),
                bold: true,
                ..page
            };
            put_centered(fb, x, TABLE_W, y, "press x again to clear all scores", warn);
        } else {
            let dim = CellStyle { dim: true, ..page };
            put_centered(fb, x, TABLE_W, y, "t game · x clear scores · q quit", dim);
        }
    }
}
