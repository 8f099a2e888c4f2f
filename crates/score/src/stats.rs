//! Aggregate statistics and display formatting

use chrono::{DateTime, Utc};

use crate::entry::ScoreEntry;

/// Aggregates over the stored scoreboard
///
/// All-integer: averages and the win rate round half up, and the per-game
/// bests fall back to 0 when no qualifying entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    pub total_games: u32,
    pub average_score: u32,
    pub average_moves: u32,
    pub average_time: u32,
    /// Percentage of stored games that were won, 0-100
    pub win_rate: u32,
    pub best_score: u32,
    /// Fewest moves among entries with a positive score, 0 when none qualify
    pub best_moves: u32,
    /// Shortest time among entries with a positive score, 0 when none qualify
    pub best_time: u32,
}

impl GameStats {
    /// Compute stats over the stored entries; an empty board is all zeros
    pub fn from_entries(entries: &[ScoreEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let n = entries.len() as u64;
        let total_score: u64 = entries.iter().map(|e| u64::from(e.score)).sum();
        let total_moves: u64 = entries.iter().map(|e| u64::from(e.moves)).sum();
        let total_time: u64 = entries.iter().map(|e| u64::from(e.time)).sum();
        let wins = entries.iter().filter(|e| e.won).count() as u64;

        let best_moves = entries
            .iter()
            .filter(|e| e.score > 0)
            .map(|e| e.moves)
            .min()
            .unwrap_or(0);
        let best_time = entries
            .iter()
            .filter(|e| e.score > 0)
            .map(|e| e.time)
            .min()
            .unwrap_or(0);

        Self {
            total_games: entries.len() as u32,
            average_score: round_div(total_score, n) as u32,
            average_moves: round_div(total_moves, n) as u32,
            average_time: round_div(total_time, n) as u32,
            win_rate: round_div(wins * 100, n) as u32,
            best_score: entries.iter().map(|e| e.score).max().unwrap_or(0),
            best_moves,
            best_time,
        }
    }
}

/// Integer division rounding half up
fn round_div(sum: u64, n: u64) -> u64 {
    (sum + n / 2) / n
}

/// Format whole seconds as `M:SS`; minutes are uncapped
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format a date like `Aug 25, 2026`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
