//! Player input module (presentation-facing).
//!
//! This module is the validation boundary between raw player input and the
//! core. It never loops or re-prompts: every function returns a `Result` and
//! the caller decides whether to ask again.
//!
//! - [`parse`]: text lines into configuration values, digits and whole guesses
//! - [`map`]: `crossterm` key events for the single-key replay prompt

pub mod map;
pub mod parse;

pub use mastermind_types as types;

pub use map::{is_replay_key, should_quit};
pub use parse::{
    parse_code_length, parse_digit, parse_guess, parse_guess_entry, parse_max_digit, GuessEntry,
    InputError,
};
