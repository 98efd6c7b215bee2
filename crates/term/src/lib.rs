//! Terminal presentation module.
//!
//! A small, line-oriented presenter for the console game. It stays away from
//! full-screen TUI layouts: each turn clears the page, prints the recent
//! history and asks for the next digits.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep formatting pure ([`game_view`]) and I/O thin ([`renderer`])
//! - Degrade to plain text when stdout is not a terminal

pub mod game_view;
pub mod renderer;

pub use mastermind_core as core;
pub use mastermind_types as types;

pub use crossterm::event::{KeyCode, KeyEvent};
pub use game_view::{GameView, Line, Tone};
pub use renderer::{encode_lines_into, key_from_line, Console, Screen};
