//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_2048::core::{GameOutcome, GameSession, SessionEffects, Sound};
use tui_2048::input::{handle_key_event, should_quit, toggles_scoreboard};
use tui_2048::score::{FileStorage, ScoreStore};
use tui_2048::term::{FrameBuffer, GameView, ScoreView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, TIMER_TICK_MS};

/// Bridges session effects to the terminal and the on-disk scoreboard.
struct TerminalEffects {
    store: ScoreStore<FileStorage>,
    /// Best stored score, folded into the BEST box together with the live
    /// score.
    best: u32,
}

impl SessionEffects for TerminalEffects {
    fn play_sound(&mut self, _sound: Sound) {
        // One audible cue for both outcomes: the terminal bell.
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }

    fn show_celebration(&mut self) {
        // The win overlay renders from the session snapshot.
    }

    fn record_result(&mut self, outcome: &GameOutcome) {
        self.store
            .save_score(outcome.score, outcome.moves, outcome.seconds, outcome.won);
        self.best = self.store.get_best_score();
    }
}

fn main() -> Result<()> {
    let store = ScoreStore::open(data_dir())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, store: ScoreStore<FileStorage>) -> Result<()> {
    let best = store.get_best_score();
    let mut effects = TerminalEffects { store, best };
    let mut session = GameSession::new(millis_seed());

    let game_view = GameView::default();
    let score_view = ScoreView;
    let mut fb = FrameBuffer::new(0, 0);

    let mut showing_scores = false;
    let mut clear_armed = false;

    let tick_duration = Duration::from_millis(TIMER_TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if showing_scores {
            let scores = effects.store.get_scores();
            let stats = effects.store.get_game_stats();
            score_view.render_into(&scores, &stats, clear_armed, viewport, &mut fb);
        } else {
            let snap = session.snapshot();
            let shown_best = effects.best.max(snap.score);
            game_view.render_into(&snap, shown_best, viewport, &mut fb);
        }
        term.present(&mut fb)?;

        // Input with timeout until the next timer tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if toggles_scoreboard(key) {
                        showing_scores = !showing_scores;
                        clear_armed = false;
                        continue;
                    }

                    if showing_scores {
                        match key.code {
                            // Clearing takes two presses: arm, then confirm.
                            KeyCode::Char('x') | KeyCode::Char('X') => {
                                if clear_armed {
                                    effects.store.clear()?;
                                    effects.best = 0;
                                    clear_armed = false;
                                } else {
                                    clear_armed = true;
                                }
                            }
                            _ => clear_armed = false,
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        session.apply_action(action, &mut effects);
                        if action == GameAction::NewGame {
                            effects.best = effects.store.get_best_score();
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Timer tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TIMER_TICK_MS);
        }
    }
}

/// Seed new sessions from the wall clock.
fn millis_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

/// Scoreboard location: `TUI_2048_DATA_DIR`, or `.tui-2048` in the home
/// directory (falling back to the working directory).
fn data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("TUI_2048_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".tui-2048"),
        None => PathBuf::from(".tui-2048"),
    }
}
