//! Session module - one play-through of the game
//!
//! Ties together the secret, the attempt counter and the guess history, and
//! drives the status from `InProgress` to `Won` or `Lost`.

use tracing::{debug, info};

use crate::error::GameError;
use crate::history::{HistoryBuffer, HistoryEntry};
use crate::rng::SecretGenerator;
use crate::scoring::score;
use crate::snapshot::SessionSnapshot;
use crate::types::{GameConfig, GameStatus, Guess, ScoreResult, SecretCode};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    secret: SecretCode,
    attempts_used: u32,
    max_attempts: u32,
    history: HistoryBuffer,
    status: GameStatus,
    /// Monotonic play-through id (increments on restart).
    round: u32,
}

impl GameSession {
    /// Start a play-through with a freshly drawn secret.
    pub fn new(config: GameConfig, generator: &mut SecretGenerator) -> Self {
        let secret = generator.generate(&config);
        let session = Self::from_parts(config, secret);
        info!(
            code_length = config.code_length(),
            max_digit = config.max_digit(),
            max_attempts = session.max_attempts,
            seed = generator.seed(),
            "new game"
        );
        session
    }

    /// Start a play-through around a known secret.
    pub fn with_secret(config: GameConfig, secret: SecretCode) -> Result<Self, GameError> {
        config.check_code(&secret)?;
        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: GameConfig, secret: SecretCode) -> Self {
        Self {
            config,
            secret,
            attempts_used: 0,
            max_attempts: config.max_attempts(),
            history: HistoryBuffer::new(),
            status: GameStatus::InProgress,
            round: 1,
        }
    }

    /// Reset for another play-through with the same configuration.
    pub fn restart(&mut self, generator: &mut SecretGenerator) {
        self.secret = generator.generate(&self.config);
        self.attempts_used = 0;
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.round = self.round.wrapping_add(1);
        info!(round = self.round, "game restarted");
    }

    /// Score one guess and advance the session.
    ///
    /// A solving guess wins even when it is the last permitted attempt.
    pub fn submit_guess(&mut self, guess: &Guess) -> Result<ScoreResult, GameError> {
        if self.status.is_terminal() || self.attempts_used >= self.max_attempts {
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        self.config.check_code(guess)?;

        let result = score(&self.secret, guess);
        self.history.push(HistoryEntry::new(guess.clone(), result));
        self.attempts_used += 1;

        debug!(
            attempt = self.attempts_used,
            guess = %guess,
            black = result.black,
            white = result.white,
            "guess scored"
        );

        if result.is_solved(self.config.code_length()) {
            self.status = GameStatus::Won;
        } else if self.attempts_used == self.max_attempts {
            self.status = GameStatus::Lost;
        }

        if self.status.is_terminal() {
            info!(
                status = %self.status,
                attempts = self.attempts_used,
                "game finished"
            );
        }

        Ok(result)
    }

    /// The secret, once the game is over.
    pub fn reveal_secret(&self) -> Result<&SecretCode, GameError> {
        if self.status.is_terminal() {
            Ok(&self.secret)
        } else {
            Err(GameError::SecretHidden)
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempts_left(&self) -> u32 {
        self.max_attempts - self.attempts_used
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.round = self.round;
        out.config = self.config;
        out.status = self.status;
        out.attempts_used = self.attempts_used;
        out.max_attempts = self.max_attempts;
        out.history.clear();
        out.history.extend(self.history.newest_first().cloned());
        out.secret = self.reveal_secret().ok().cloned();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
