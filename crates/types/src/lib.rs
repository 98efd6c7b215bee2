//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the game.
//! They carry no I/O and no game logic beyond shape validation, making them
//! usable in any context (core logic, console rendering, script protocol).
//!
//! # Configuration Ranges
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CODE_LENGTH_MIN` | 3 | Shortest secret code |
//! | `CODE_LENGTH_MAX` | 6 | Longest secret code |
//! | `MAX_DIGIT_MIN` | 3 | Smallest allowed upper digit |
//! | `MAX_DIGIT_MAX` | 9 | Largest allowed upper digit |
//! | `HISTORY_CAPACITY` | 5 | Guesses kept for display |
//!
//! # Attempt Budget
//!
//! The number of guesses is derived from the configuration and is not tunable:
//!
//! ```text
//! max_attempts = 2 * ((max_digit + 1) / 2 + code_length / 2)
//! ```
//!
//! # Examples
//!
//! ```
//! use mastermind_types::{Code, GameConfig};
//!
//! let config = GameConfig::new(4, 6).unwrap();
//! assert_eq!(config.max_attempts(), 10);
//!
//! let guess = Code::from_digits(&[1, 2, 3, 4]).unwrap();
//! assert!(config.check_code(&guess).is_ok());
//! assert_eq!(guess.to_string(), "1 2 3 4");
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use arrayvec::ArrayVec;
use serde::Serialize;
use thiserror::Error;

/// Shortest allowed secret code.
pub const CODE_LENGTH_MIN: u8 = 3;

/// Longest allowed secret code.
pub const CODE_LENGTH_MAX: u8 = 6;

/// Smallest allowed upper digit.
pub const MAX_DIGIT_MIN: u8 = 3;

/// Largest allowed upper digit.
pub const MAX_DIGIT_MAX: u8 = 9;

/// Number of distinct digit values (`0..=9`).
pub const DIGIT_VALUES: usize = 10;

/// Number of most recent guesses retained in the history.
pub const HISTORY_CAPACITY: usize = 5;

/// Rejected game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("code length {0} is outside 3..=6")]
    CodeLength(u8),
    #[error("max digit {0} is outside 3..=9")]
    MaxDigit(u8),
}

/// A code whose shape does not fit the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code has {actual} digits, at most 6 are supported")]
    TooLong { actual: usize },
    #[error("value {value} at position {position} is not a digit")]
    NotADigit { position: usize, value: u8 },
    #[error("code has {actual} digits, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("digit {digit} at position {position} is outside 0..={max_digit}")]
    DigitOutOfRange {
        position: usize,
        digit: u8,
        max_digit: u8,
    },
}

/// Validated game configuration.
///
/// Built once per session by the configuration collaborator and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameConfig {
    code_length: u8,
    max_digit: u8,
}

impl GameConfig {
    /// Create a configuration, rejecting out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use mastermind_types::{ConfigError, GameConfig};
    ///
    /// assert!(GameConfig::new(3, 9).is_ok());
    /// assert_eq!(GameConfig::new(7, 9), Err(ConfigError::CodeLength(7)));
    /// assert_eq!(GameConfig::new(4, 2), Err(ConfigError::MaxDigit(2)));
    /// ```
    pub fn new(code_length: u8, max_digit: u8) -> Result<Self, ConfigError> {
        if !Self::code_length_range().contains(&code_length) {
            return Err(ConfigError::CodeLength(code_length));
        }
        if !Self::max_digit_range().contains(&max_digit) {
            return Err(ConfigError::MaxDigit(max_digit));
        }
        Ok(Self {
            code_length,
            max_digit,
        })
    }

    pub fn code_length_range() -> RangeInclusive<u8> {
        CODE_LENGTH_MIN..=CODE_LENGTH_MAX
    }

    pub fn max_digit_range() -> RangeInclusive<u8> {
        MAX_DIGIT_MIN..=MAX_DIGIT_MAX
    }

    pub fn code_length(&self) -> u8 {
        self.code_length
    }

    pub fn max_digit(&self) -> u8 {
        self.max_digit
    }

    /// Digits allowed in both the secret and the guesses (inclusive).
    pub fn digit_range(&self) -> RangeInclusive<u8> {
        0..=self.max_digit
    }

    /// Attempt budget for this configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use mastermind_types::GameConfig;
    ///
    /// assert_eq!(GameConfig::new(4, 6).unwrap().max_attempts(), 10);
    /// assert_eq!(GameConfig::new(3, 3).unwrap().max_attempts(), 6);
    /// assert_eq!(GameConfig::new(6, 9).unwrap().max_attempts(), 16);
    /// ```
    pub fn max_attempts(&self) -> u32 {
        let digits = (self.max_digit as u32 + 1) / 2;
        let length = self.code_length as u32 / 2;
        2 * (digits + length)
    }

    /// Check that `code` has the configured length and only allowed digits.
    pub fn check_code(&self, code: &Code) -> Result<(), CodeError> {
        let expected = self.code_length as usize;
        if code.len() != expected {
            return Err(CodeError::LengthMismatch {
                expected,
                actual: code.len(),
            });
        }
        match code
            .iter()
            .enumerate()
            .find(|&(_, digit)| digit > self.max_digit)
        {
            Some((position, digit)) => Err(CodeError::DigitOutOfRange {
                position,
                digit,
                max_digit: self.max_digit,
            }),
            None => Ok(()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: 4,
            max_digit: 6,
        }
    }
}

/// An ordered sequence of digits: either the hidden secret or a player guess.
///
/// Stack-only; never longer than [`CODE_LENGTH_MAX`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Code {
    digits: ArrayVec<u8, { CODE_LENGTH_MAX as usize }>,
}

/// The hidden code the player is trying to reproduce.
pub type SecretCode = Code;

/// One player attempt at the secret.
pub type Guess = Code;

impl Code {
    /// Build a code from raw digits.
    ///
    /// Only the capacity and `0..=9` are checked here; use
    /// [`GameConfig::check_code`] for the configured length and digit range.
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        if let Some((position, &value)) = digits
            .iter()
            .enumerate()
            .find(|(_, &d)| d > MAX_DIGIT_MAX)
        {
            return Err(CodeError::NotADigit { position, value });
        }
        let mut out = ArrayVec::new();
        out.try_extend_from_slice(digits)
            .map_err(|_| CodeError::TooLong {
                actual: digits.len(),
            })?;
        Ok(Self { digits: out })
    }

    /// Append one digit. Returns `false`, leaving the code unchanged, when it
    /// is already at capacity or `digit` is above 9.
    pub fn push(&mut self, digit: u8) -> bool {
        digit <= MAX_DIGIT_MAX && self.digits.try_push(digit).is_ok()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Peg feedback for one guess.
///
/// - **black**: right digit in the right position
/// - **white**: right digit in the wrong position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ScoreResult {
    pub black: u8,
    pub white: u8,
}

impl ScoreResult {
    pub fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// True when every position matched.
    pub fn is_solved(&self, code_length: u8) -> bool {
        self.black == code_length
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black: {}, White: {}", self.black, self.white)
    }
}

/// Session lifecycle.
///
/// `InProgress` is the only non-terminal state; `Won` and `Lost` are only
/// left by starting a new play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
