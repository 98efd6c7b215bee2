//! Text parsing for configuration values and guesses.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::types::{Code, GameConfig, Guess};

/// Why a line of player input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no input")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },
    #[error("expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// One answer to a per-position guess prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessEntry {
    /// A single digit for the current position.
    Digit(u8),
    /// The whole code typed at once.
    Full(Guess),
}

fn parse_in_range(line: &str, range: RangeInclusive<u8>) -> Result<u8, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value < *range.start() as i64 || value > *range.end() as i64 {
        return Err(InputError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(value as u8)
}

/// Parse the secret code length (3 to 6).
pub fn parse_code_length(line: &str) -> Result<u8, InputError> {
    parse_in_range(line, GameConfig::code_length_range())
}

/// Parse the largest digit used in the code (3 to 9).
pub fn parse_max_digit(line: &str) -> Result<u8, InputError> {
    parse_in_range(line, GameConfig::max_digit_range())
}

/// Parse one guess digit for `config`.
pub fn parse_digit(line: &str, config: &GameConfig) -> Result<u8, InputError> {
    parse_in_range(line, config.digit_range())
}

/// Parse a whole guess.
///
/// Accepts packed digits (`1234`) or digits separated by whitespace and/or
/// commas (`1 2 3 4`, `1,2,3,4`).
///
/// # Examples
///
/// ```
/// use mastermind_input::parse_guess;
/// use mastermind_input::types::GameConfig;
///
/// let config = GameConfig::new(4, 6).unwrap();
/// let guess = parse_guess("1 2, 3 4", &config).unwrap();
/// assert_eq!(guess.digits(), &[1, 2, 3, 4]);
/// assert!(parse_guess("1237", &config).is_err());
/// ```
pub fn parse_guess(line: &str, config: &GameConfig) -> Result<Guess, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let separated = trimmed.contains(|c: char| c.is_whitespace() || c == ',');
    let tokens: Vec<&str> = if separated {
        trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect()
    } else {
        trimmed
            .char_indices()
            .map(|(i, c)| &trimmed[i..i + c.len_utf8()])
            .collect()
    };

    let expected = config.code_length() as usize;
    if tokens.len() != expected {
        return Err(InputError::WrongLength {
            expected,
            actual: tokens.len(),
        });
    }

    let mut guess = Code::default();
    for token in tokens {
        guess.push(parse_digit(token, config)?);
    }
    Ok(guess)
}

/// Parse the answer to the prompt for guess position `position` (0-based).
///
/// On the first position a line holding more than one digit is read as the
/// whole guess; everywhere else exactly one digit is expected.
pub fn parse_guess_entry(
    line: &str,
    config: &GameConfig,
    position: usize,
) -> Result<GuessEntry, InputError> {
    let digit_count = line.chars().filter(|c| c.is_ascii_digit()).count();
    if position == 0 && digit_count > 1 {
        return parse_guess(line, config).map(GuessEntry::Full);
    }
    parse_digit(line, config).map(GuessEntry::Digit)
}
