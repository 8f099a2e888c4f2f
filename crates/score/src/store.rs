//! Scoreboard persistence and ranking
//!
//! The whole board lives under one storage key as a ranked JSON array.
//! Reads degrade to empty on missing or corrupt data and saves degrade to
//! `false` on storage failure; clearing is the only operation that reports
//! its errors.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::entry::ScoreEntry;
use crate::error::Result;
use crate::stats::GameStats;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::types::MAX_SCORES;

/// Storage key holding the scoreboard document
pub const STORAGE_KEY: &str = "2048-scoreboard";

/// Ranked, bounded scoreboard over a string key-value backend
#[derive(Debug)]
pub struct ScoreStore<S: Storage> {
    storage: S,
}

impl ScoreStore<FileStorage> {
    /// Open a scoreboard stored in the given directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            storage: FileStorage::open(dir)?,
        })
    }
}

impl ScoreStore<MemoryStorage> {
    /// Create a scoreboard backed by memory only
    pub fn in_memory() -> Self {
        Self {
            storage: MemoryStorage::new(),
        }
    }
}

impl<S: Storage> ScoreStore<S> {
    /// Wrap an arbitrary storage backend
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// Record a finished game, stamped with the current time
    ///
    /// Returns whether the entry made the board. Storage failures read as
    /// `false`.
    pub fn save_score(&mut self, score: u32, moves: u32, time: u32, won: bool) -> bool {
        self.save_score_at(score, moves, time, won, Utc::now())
    }

    /// Record a finished game with an explicit timestamp
    pub fn save_score_at(
        &mut self,
        score: u32,
        moves: u32,
        time: u32,
        won: bool,
        at: DateTime<Utc>,
    ) -> bool {
        let entry = ScoreEntry::new(score, moves, time, won, at);
        let id = entry.id.clone();

        let mut scores = self.read_scores();
        scores.push(entry);
        rank(&mut scores);
        scores.truncate(MAX_SCORES);

        let doc = match serde_json::to_string(&scores) {
            Ok(doc) => doc,
            Err(_) => return false,
        };
        if self.storage.set(STORAGE_KEY, &doc).is_err() {
            return false;
        }

        scores.iter().any(|s| s.id == id)
    }

    /// Ranked entries, best first
    ///
    /// A missing or unreadable document reads as an empty board.
    pub fn get_scores(&self) -> Vec<ScoreEntry> {
        self.read_scores()
    }

    /// Best stored score, 0 when the board is empty
    pub fn get_best_score(&self) -> u32 {
        self.read_scores().first().map(|s| s.score).unwrap_or(0)
    }

    /// Aggregate statistics over the stored entries
    pub fn get_game_stats(&self) -> GameStats {
        GameStats::from_entries(&self.read_scores())
    }

    /// Remove every stored score
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(STORAGE_KEY)
    }

    fn read_scores(&self) -> Vec<ScoreEntry> {
        let doc = match self.storage.get(STORAGE_KEY) {
            Ok(Some(doc)) => doc,
            _ => return Vec::new(),
        };
        serde_json::from_str(&doc).unwrap_or_default()
    }
}

/// Rank by score descending, then moves ascending, then time ascending
///
/// The sort is stable, so entries tied on all three keys keep save order.
fn rank(scores: &mut [ScoreEntry]) {
    scores.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.moves.cmp(&b.moves))
            .then(a.time.cmp(&b.time))
    });
}
