//! Interactive TUI interface
//!
//! Full-screen builder with live panels for the pool, words, and expansions.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, run_tui};
