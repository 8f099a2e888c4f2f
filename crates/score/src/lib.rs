//! # tui-2048-score
//!
//! Persistent scoreboard for finished games.
//!
//! Results land in a single JSON document holding at most
//! [`MAX_SCORES`](types::MAX_SCORES) entries, ranked by score, then move
//! count, then elapsed time. The document lives behind the [`Storage`]
//! trait, with a file backend for the binary and a memory backend for
//! tests.
//!
//! ## Module Structure
//!
//! - `entry`: the stored record for one finished game
//! - `error`: crate error type
//! - `stats`: aggregate statistics and display formatting
//! - `storage`: key-value backends (file, memory)
//! - `store`: ranking, retention, and the save/read/clear API
//!
//! ## Example
//!
//! ```
//! use tui_2048_score::ScoreStore;
//!
//! let mut store = ScoreStore::in_memory();
//! assert!(store.save_score(2048, 120, 300, true));
//! assert_eq!(store.get_best_score(), 2048);
//! assert_eq!(store.get_game_stats().total_games, 1);
//! ```

pub mod entry;
pub mod error;
pub mod stats;
pub mod storage;
pub mod store;

pub use tui_2048_types as types;

pub use entry::ScoreEntry;
pub use error::{Error, Result};
pub use stats::{format_date, format_time, GameStats};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ScoreStore, STORAGE_KEY};
