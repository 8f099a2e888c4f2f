//! Terminal rendering module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over tile proportions (e.g. 7x3 cells per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod score_view;

pub use tui_2048_core as core;
pub use tui_2048_score as score;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use score_view::ScoreView;
