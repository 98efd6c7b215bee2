//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and session state for the digit
//! code-breaking game. It has **no dependencies** on the terminal or on stdin,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical secrets
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Drives the interactive console and the scripted JSON mode alike
//! - **Small**: Codes and history live on the stack, nothing allocates per guess
//!
//! # Module Structure
//!
//! - [`rng`]: seeded secret generation
//! - [`scoring`]: black/white peg feedback with repeated-digit accounting
//! - [`history`]: fixed-capacity ring of the last five scored guesses
//! - [`session`]: one play-through, from the first guess to `Won` or `Lost`
//! - [`snapshot`]: serializable read model handed to presenters
//!
//! # Game Rules
//!
//! - The secret has `code_length` digits (3 to 6), each drawn from `0..=max_digit`
//!   (`max_digit` from 3 to 9); digits may repeat
//! - Each guess earns one **black** peg per exact match and one **white** peg per
//!   remaining digit found elsewhere in the secret
//! - The attempt budget is `2 * ((max_digit + 1) / 2 + code_length / 2)`
//! - Only the five most recent guesses are kept for display
//!
//! # Example
//!
//! ```
//! use mastermind_core::{GameSession, SecretGenerator};
//! use mastermind_core::types::{Code, GameConfig, GameStatus};
//!
//! let config = GameConfig::new(4, 6).unwrap();
//! let mut generator = SecretGenerator::new(12345);
//! let mut session = GameSession::new(config, &mut generator);
//!
//! let result = session
//!     .submit_guess(&Code::from_digits(&[1, 1, 2, 2]).unwrap())
//!     .unwrap();
//! assert!(result.black + result.white <= 4);
//! assert_eq!(session.attempts_used(), 1);
//!
//! if session.status() == GameStatus::InProgress {
//!     assert!(session.reveal_secret().is_err());
//! }
//! ```

pub mod error;
pub mod history;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use mastermind_types as types;

// Re-export commonly used types for convenience
pub use error::GameError;
pub use history::{HistoryBuffer, HistoryEntry, NewestFirst};
pub use rng::{SecretGenerator, SimpleRng};
pub use scoring::score;
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
