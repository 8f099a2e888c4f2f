//! Session module - the playable game state machine
//!
//! Ties the grid engine to score, move and time counters and the
//! playing/won/lost status. Every random draw comes from the session's own
//! seeded RNG, so a seed reproduces the whole game move for move.

use crate::effects::{GameOutcome, SessionEffects, Sound};
use crate::grid::Grid;
use crate::moves::{can_move, has_won, initialize, shift, spawn_tile};
use crate::rng::SimpleRng;
use crate::types::{Direction, GameAction, GameStatus, TIMER_TICK_MS};

/// Renderable copy of the session state
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub status: GameStatus,
    pub score: u32,
    pub moves: u32,
    pub seconds: u32,
    pub celebrated: bool,
    pub seed: u32,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    status: GameStatus,
    score: u32,
    moves: u32,
    seconds: u32,
    /// One-shot win latch; survives keep_going so the win fires only once
    celebrated: bool,
    tick_acc_ms: u32,
    seed: u32,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let grid = initialize(&mut rng);

        Self {
            grid,
            status: GameStatus::Playing,
            score: 0,
            moves: 0,
            seconds: 0,
            celebrated: false,
            tick_acc_ms: 0,
            seed,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn celebrated(&self) -> bool {
        self.celebrated
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid,
            status: self.status,
            score: self.score,
            moves: self.moves,
            seconds: self.seconds,
            celebrated: self.celebrated,
            seed: self.seed,
        }
    }

    /// Apply a shift in one direction
    ///
    /// Rejected outright when the game is lost. A shift that changes nothing
    /// is a no-op: no spawn, no counters, returns false. Otherwise the shifted
    /// grid is adopted, one tile spawns, and the terminal check runs.
    pub fn apply_move(&mut self, direction: Direction, fx: &mut dyn SessionEffects) -> bool {
        if self.status == GameStatus::Lost {
            return false;
        }

        let out = shift(&self.grid, direction);
        if !out.moved {
            return false;
        }

        self.grid = spawn_tile(&out.grid, &mut self.rng);
        self.score += out.score_delta;
        self.moves += 1;
        self.check_terminal(fx);
        true
    }

    /// Resume play after a win
    ///
    /// Keeps the board and every counter; only the status changes. The
    /// terminal check runs again, so a board that got stuck while on the win
    /// screen resolves to lost immediately.
    pub fn keep_going(&mut self, fx: &mut dyn SessionEffects) -> bool {
        if self.status != GameStatus::Won {
            return false;
        }
        self.status = GameStatus::Playing;
        self.check_terminal(fx);
        true
    }

    /// Start over with a fresh grid, reseeding from the current RNG state
    pub fn new_game(&mut self) {
        let seed = self.rng.seed();
        *self = Self::new(seed);
    }

    /// Advance the play clock
    ///
    /// Accumulates only while playing; each full `TIMER_TICK_MS` adds one
    /// second. Returns whether the second counter changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        self.tick_acc_ms += elapsed_ms;
        let mut changed = false;
        while self.tick_acc_ms >= TIMER_TICK_MS {
            self.tick_acc_ms -= TIMER_TICK_MS;
            self.seconds += 1;
            changed = true;
        }
        changed
    }

    /// Apply a session command
    pub fn apply_action(&mut self, action: GameAction, fx: &mut dyn SessionEffects) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction, fx),
            GameAction::NewGame => {
                self.new_game();
                true
            }
            GameAction::KeepGoing => self.keep_going(fx),
        }
    }

    /// Win and loss detection, in the order that decides ties
    ///
    /// A move that makes 2048 and fills the board resolves to won: the win
    /// branch runs first and the loss branch requires playing status, so a
    /// stuck board stays won until keep_going re-enters play.
    fn check_terminal(&mut self, fx: &mut dyn SessionEffects) {
        if has_won(&self.grid) && !self.celebrated {
            self.status = GameStatus::Won;
            self.celebrated = true;
            fx.show_celebration();
            fx.play_sound(Sound::Win);
            fx.record_result(&self.outcome(true));
        } else if self.status == GameStatus::Playing && !can_move(&self.grid) {
            self.status = GameStatus::Lost;
            fx.play_sound(Sound::GameOver);
            fx.record_result(&self.outcome(false));
        }
    }

    fn outcome(&self, won: bool) -> GameOutcome {
        GameOutcome {
            score: self.score,
            moves: self.moves,
            seconds: self.seconds,
            won,
        }
    }
}
