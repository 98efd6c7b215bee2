//! Errors raised by a game session.

use thiserror::Error;

use crate::types::{CodeError, GameStatus};

/// A session operation was called outside its contract.
///
/// These are caller bugs, not player mistakes: malformed player input is
/// rejected by the parsing layer before it ever reaches a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over ({status})")]
    GameOver { status: GameStatus },
    #[error("the secret is only revealed once the game is over")]
    SecretHidden,
    #[error(transparent)]
    InvalidCode(#[from] CodeError),
}
