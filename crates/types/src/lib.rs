//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, UI rendering, score persistence).
//!
//! # Grid Dimensions
//!
//! Standard 2048 playfield dimensions:
//!
//! - **Size**: 4x4 cells (rows and columns indexed 0-3)
//! - **Start**: 2 tiles spawned on a fresh grid
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per side |
//! | `GRID_CELLS` | 16 | Total cells (`GRID_SIZE * GRID_SIZE`) |
//! | `START_TILES` | 2 | Tiles spawned when a grid is initialized |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `MAX_SCORES` | 10 | Scoreboard retention cap |
//! | `TIMER_TICK_MS` | 1000 | Elapsed-time granularity (1 second) |
//!
//! # Tile Values
//!
//! A cell holds `0` when empty; every occupied cell holds a power of two
//! (2, 4, 8, ... 2048, ...). Freshly spawned tiles are 2 (90%) or 4 (10%),
//! and merging two equal tiles doubles the value, so the invariant holds
//! for every reachable grid.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, GRID_SIZE, WIN_TILE};
//!
//! // Parse a direction from string (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Parse a session command
//! let action = GameAction::from_str("keepGoing").unwrap();
//! assert_eq!(action, GameAction::KeepGoing);
//!
//! // A fresh session is playing
//! assert_eq!(GameStatus::Playing.as_str(), "playing");
//!
//! // Grid dimensions
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Cells per side of the square grid (4)
pub const GRID_SIZE: u8 = 4;

/// Total number of cells (16)
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Tiles spawned when a grid is initialized (2)
pub const START_TILES: u32 = 2;

/// Tile value that wins the game (2048)
pub const WIN_TILE: Tile = 2048;

/// Maximum number of entries retained on the scoreboard (10)
pub const MAX_SCORES: usize = 10;

/// Elapsed-time granularity in milliseconds (1000ms = 1 second)
pub const TIMER_TICK_MS: u32 = 1000;

/// A single grid cell value
///
/// `0` is an empty cell; any non-zero value is a power of two >= 2.
pub type Tile = u32;


/// The four shift directions
///
/// A move shifts every tile as far as it can go toward one edge:
/// - **Left**: each row compacts toward column 0
/// - **Right**: each row compacts toward column 3
/// - **Up**: each column compacts toward row 0
/// - **Down**: each column compacts toward row 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed order, for iteration
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.as_str(), "up");
    /// assert_eq!(Direction::Right.as_str(), "right");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session status
///
/// - **Playing**: moves are accepted and the timer runs
/// - **Won**: a 2048 tile was made; moves are still accepted, the timer is
///   paused until the player continues
/// - **Lost**: no legal move remains; only a new game leaves this state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Parse status from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "playing" => Some(GameStatus::Playing),
            "won" => Some(GameStatus::Won),
            "lost" => Some(GameStatus::Lost),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Commands that can be applied to a game session
///
/// These are the session's whole command surface; anything else a frontend
/// does (quitting, switching views) stays outside the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the grid in a direction (spawns a tile if anything moved)
    Move(Direction),
    /// Start over with a fresh grid from any status
    NewGame,
    /// Resume play after a win, keeping the board and counters
    KeepGoing,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Move commands are the bare direction names; the session commands use
    /// camelCase.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("keepGoing"), Some(GameAction::KeepGoing));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(GameAction::Move(dir));
        }
        match s.to_lowercase().as_str() {
            "newgame" => Some(GameAction::NewGame),
            "keepgoing" => Some(GameAction::KeepGoing),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::NewGame => "newGame",
            GameAction::KeepGoing => "keepGoing",
        }
    }
}
