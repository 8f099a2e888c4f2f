//! TUI 2048 (workspace facade crate).
//!
//! This package keeps a single `tui_2048::{core,score,term,input,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_score as score;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
