//! Snapshot module - serializable view of a session

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::history::HistoryEntry;
use crate::types::{GameConfig, GameStatus, SecretCode, HISTORY_CAPACITY};

/// Read model of a session for presenters and the script protocol.
///
/// `history` is newest first. `secret` is only filled once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionSnapshot {
    pub round: u32,
    pub config: GameConfig,
    pub status: GameStatus,
    pub attempts_used: u32,
    pub max_attempts: u32,
    pub history: ArrayVec<HistoryEntry, HISTORY_CAPACITY>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretCode>,
}

impl SessionSnapshot {
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used)
    }
}
