//! GameView: maps a `core::SessionSnapshot` into styled console lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{HistoryEntry, SessionSnapshot};
use crate::types::{GameConfig, GameStatus, ScoreResult};

/// Ordinal names for the per-position guess prompts.
pub const POSITION_NAMES: [&str; 6] = ["first", "second", "third", "fourth", "fifth", "sixth"];

pub const CODE_LENGTH_PROMPT: &str = "Set the secret code length (from 3 to 6): ";
pub const MAX_DIGIT_PROMPT: &str = "Set the max number used in code (from 3 to 9): ";
pub const REPLAY_PROMPT: &str = "Press y to play again: ";
pub const WRONG_INPUT: &str = "Wrong input. Try again.";

/// Styling hint for a line; the renderer picks the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Heading,
    Muted,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// The per-guess feedback line.
    pub fn result_line(&self, score: ScoreResult) -> Line {
        Line::new(format!("Result - {score}"), Tone::Heading)
    }

    /// One history row: the guessed digits followed by their pegs.
    pub fn history_row(&self, entry: &HistoryEntry) -> Line {
        Line::plain(format!(
            "{}  B: {} W: {}",
            entry.guess, entry.score.black, entry.score.white
        ))
    }

    /// Recent guesses (newest first) and the attempt counter.
    pub fn history_lines(&self, snap: &SessionSnapshot) -> Vec<Line> {
        let mut lines = Vec::with_capacity(snap.history.len() + 3);
        lines.push(Line::new("Latest guesses: ", Tone::Heading));
        lines.extend(snap.history.iter().map(|entry| self.history_row(entry)));
        lines.push(Line::blank());
        lines.push(Line::new(
            format!(
                "Amount of guesses made: {} out of {}",
                snap.attempts_used, snap.max_attempts
            ),
            Tone::Muted,
        ));
        lines
    }

    /// Instructions shown before the digit prompts.
    pub fn guess_intro(&self, config: &GameConfig) -> Line {
        Line::plain(format!(
            "Enter your guess (number range from 0 (blank) to {})",
            config.max_digit()
        ))
    }

    /// Prompt for guess position `position` (0-based).
    pub fn digit_prompt(&self, position: usize) -> String {
        let name = POSITION_NAMES.get(position).copied().unwrap_or("next");
        format!("Enter {name} number of the combination: ")
    }

    /// Closing lines for a finished game. Empty while the game is running.
    pub fn outcome_lines(&self, snap: &SessionSnapshot) -> Vec<Line> {
        match snap.status {
            GameStatus::InProgress => Vec::new(),
            GameStatus::Won => vec![Line::new("Congratulations, you won!", Tone::Success)],
            GameStatus::Lost => {
                let mut lines = vec![
                    Line::new("You ran out of guesses. Game over.", Tone::Failure),
                    Line::plain("The code was: "),
                ];
                if let Some(secret) = &snap.secret {
                    lines.push(Line::new(secret.to_string(), Tone::Heading));
                }
                lines
            }
        }
    }
}
