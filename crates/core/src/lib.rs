//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid engine and the session state machine.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for move processing
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with flat-array storage and line views
//! - [`moves`]: shifting, merging, spawning, and terminal checks
//! - [`session`]: playing/won/lost state machine with score and timers
//! - [`effects`]: the seam through which wins and losses reach the frontend
//! - [`rng`]: small LCG for deterministic tile spawning
//!
//! # Game Rules
//!
//! - A move compacts every line toward one edge and merges equal neighbors;
//!   each tile merges at most once per move
//! - Every merge adds the created tile's value to the score
//! - After any move that changed the grid, one tile spawns on a random empty
//!   cell: 2 with probability 0.9, else 4
//! - Making a 2048 tile wins; the player may keep going on the same board
//! - The game is lost when no empty cell and no equal-neighbor pair remains
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameSession, NullEffects};
//! use tui_2048_types::Direction;
//!
//! let mut fx = NullEffects;
//! let mut game = GameSession::new(12345);
//!
//! // Shift until something moves (a fresh grid always has a legal move).
//! for dir in Direction::ALL {
//!     if game.apply_move(dir, &mut fx) {
//!         break;
//!     }
//! }
//! assert_eq!(game.moves(), 1);
//! ```

pub mod effects;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod session;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use effects::{GameOutcome, NullEffects, SessionEffects, Sound};
pub use grid::Grid;
pub use moves::{can_move, has_won, initialize, shift, shift_line, spawn_tile, ShiftOutcome};
pub use rng::SimpleRng;
pub use session::{GameSession, SessionSnapshot};
