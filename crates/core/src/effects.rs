//! Effects module - the session's outward-facing seam
//!
//! The session signals its terminal transitions (win, loss) through this
//! trait instead of touching audio or storage itself, so the engine stays
//! pure and frontends decide what a sound or a celebration means.

/// Sound cues emitted at terminal transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Win,
    GameOver,
}

impl Sound {
    /// Convert to the cue id string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Win => "win",
            Sound::GameOver => "gameOver",
        }
    }
}

/// Final numbers for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub score: u32,
    pub moves: u32,
    pub seconds: u32,
    pub won: bool,
}

/// Side effects a session can trigger
///
/// A session that wins records once with `won = true`; if the player keeps
/// going and later gets stuck, it records again with `won = false`.
pub trait SessionEffects {
    /// Play a sound cue
    fn play_sound(&mut self, sound: Sound);
    /// Show the win celebration
    fn show_celebration(&mut self);
    /// Record a finished game
    fn record_result(&mut self, outcome: &GameOutcome);
}

/// Effects sink that does nothing, for tests and benches
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEffects;

impl SessionEffects for NullEffects {
    fn play_sound(&mut self, _sound: Sound) {}
    fn show_celebration(&mut self) {}
    fn record_result(&mut self, _outcome: &GameOutcome) {}
}
