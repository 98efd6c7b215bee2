//! Scoring module - black/white peg feedback
//!
//! A guess is scored against the secret with the classical peg rules:
//! - every secret digit is either matched in place (black), claimed by some
//!   guess digit elsewhere (white), or left unclaimed;
//! - a secret digit can be claimed at most once, so repeated digits in the
//!   guess never earn more pegs than the secret holds.
//!
//! Whites are counted by elimination: walk the guess once, consume one
//! occurrence of each guessed value from the secret's pool (whether or not the
//! position matched), and whatever stays in the pool is unaccounted for.

use crate::types::{Code, ScoreResult, DIGIT_VALUES};

/// Per-value occurrence counts of a code.
///
/// `Code` only holds values `0..=9`, so every digit has a slot.
fn occurrences(code: &Code) -> [u8; DIGIT_VALUES] {
    let mut counts = [0u8; DIGIT_VALUES];
    for digit in code.iter() {
        counts[digit as usize] += 1;
    }
    counts
}

/// Score `guess` against `secret`.
///
/// Both codes must have the same length; the session checks this before
/// calling.
///
/// # Examples
///
/// ```
/// use mastermind_core::score;
/// use mastermind_core::types::{Code, ScoreResult};
///
/// let secret = Code::from_digits(&[1, 2, 2, 3]).unwrap();
/// let guess = Code::from_digits(&[2, 2, 3, 3]).unwrap();
/// assert_eq!(score(&secret, &guess), ScoreResult::new(2, 1));
/// ```
pub fn score(secret: &Code, guess: &Code) -> ScoreResult {
    debug_assert_eq!(secret.len(), guess.len(), "score: length mismatch");

    let mut remaining = occurrences(secret);
    let mut black = 0u8;

    for (s, g) in secret.iter().zip(guess.iter()) {
        if g == s {
            black += 1;
        }
        let pool = &mut remaining[g as usize];
        if *pool > 0 {
            *pool -= 1;
        }
    }

    let unaccounted: u8 = remaining.iter().sum();
    let white = (secret.len() as u8).saturating_sub(black + unaccounted);

    ScoreResult { black, white }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(digits: &[u8]) -> Code {
        Code::from_digits(digits).unwrap()
    }

    #[test]
    fn test_identity_is_all_black() {
        let secret = code(&[4, 0, 4, 1]);
        assert_eq!(score(&secret, &secret), ScoreResult::new(4, 0));
    }

    #[test]
    fn test_no_common_digits() {
        assert_eq!(
            score(&code(&[1, 2, 3]), &code(&[4, 5, 6])),
            ScoreResult::new(0, 0)
        );
    }

    #[test]
    fn test_repeated_digit_in_guess_consumes_pool_once() {
        assert_eq!(
            score(&code(&[1, 2, 2, 3]), &code(&[2, 2, 3, 3])),
            ScoreResult::new(2, 1)
        );
    }

    #[test]
    fn test_full_cross_match_is_all_white() {
        assert_eq!(
            score(&code(&[1, 1, 2, 2]), &code(&[2, 2, 1, 1])),
            ScoreResult::new(0, 4)
        );
    }

    #[test]
    fn test_guess_repeats_single_secret_digit() {
        // Only one 5 in the secret: one black, no extra whites.
        assert_eq!(
            score(&code(&[5, 1, 2, 3]), &code(&[5, 5, 5, 5])),
            ScoreResult::new(1, 0)
        );
        // The single 5 sits elsewhere: one white, not four.
        assert_eq!(
            score(&code(&[1, 2, 3, 5]), &code(&[5, 5, 5, 0])),
            ScoreResult::new(0, 1)
        );
    }

    #[test]
    fn test_exact_match_later_in_guess_still_counts_black() {
        // The first 2 in the guess drains the pool; the later exact match
        // is still black and earns no extra white.
        assert_eq!(
            score(&code(&[1, 3, 2]), &code(&[2, 0, 2])),
            ScoreResult::new(1, 0)
        );
    }

    #[test]
    fn test_six_digit_mix() {
        assert_eq!(
            score(&code(&[1, 2, 3, 4, 0, 6]), &code(&[1, 2, 3, 4, 6, 0])),
            ScoreResult::new(4, 2)
        );
        assert_eq!(
            score(&code(&[1, 2, 9, 9, 9, 9]), &code(&[1, 1, 2, 2, 2, 2])),
            ScoreResult::new(1, 1)
        );
    }

    #[test]
    fn test_values_above_nine_never_reach_scoring() {
        assert!(Code::from_digits(&[10, 10, 10]).is_err());

        let mut secret = code(&[9, 9]);
        assert!(!secret.push(10));
        secret.push(9);
        assert_eq!(score(&secret, &code(&[0, 0, 0])), ScoreResult::new(0, 0));
    }

    #[test]
    fn test_reversed_distinct_digits() {
        assert_eq!(
            score(&code(&[1, 2, 3, 4, 0, 6]), &code(&[6, 0, 4, 3, 2, 1])),
            ScoreResult::new(0, 6)
        );
    }
}
