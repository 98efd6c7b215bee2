//! Script mode - line-delimited JSON for automated players
//!
//! Reads one guess per input line and answers with one JSON object per line:
//!
//! ```text
//! -> {"type":"start","config":{"code_length":4,"max_digit":6},"max_attempts":10,"seed":7}
//! <- 1122
//! -> {"type":"observation","round":1,"config":{...},"status":"in_progress",...,"last":{"black":1,"white":0}}
//! <- 12x4
//! -> {"type":"error","message":"`x` is not a number"}
//! ```
//!
//! The stream ends after the observation that carries a terminal status (the
//! secret is included there), or when input runs out.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{GameSession, SecretGenerator, SessionSnapshot};
use crate::input::parse_guess;
use crate::types::{GameConfig, GameStatus, ScoreResult};

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptMessage<'a> {
    Start {
        config: GameConfig,
        max_attempts: u32,
        seed: u32,
    },
    Observation {
        #[serde(flatten)]
        snapshot: &'a SessionSnapshot,
        last: ScoreResult,
    },
    Error {
        message: String,
    },
}

fn emit<W: Write>(out: &mut W, message: &ScriptMessage<'_>) -> Result<()> {
    serde_json::to_writer(&mut *out, message)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Play one game driven by `input`. Returns the final status, which is still
/// `InProgress` if input ran out first.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: GameConfig,
    generator: &mut SecretGenerator,
) -> Result<GameStatus> {
    let mut session = GameSession::new(config, generator);
    emit(
        &mut out,
        &ScriptMessage::Start {
            config,
            max_attempts: session.max_attempts(),
            seed: generator.seed(),
        },
    )?;

    let mut snapshot = SessionSnapshot::default();
    for line in input.lines() {
        let line = line?;
        let guess = match parse_guess(&line, &config) {
            Ok(guess) => guess,
            Err(e) => {
                warn!(line = %line.trim(), error = %e, "script: rejected guess");
                emit(
                    &mut out,
                    &ScriptMessage::Error {
                        message: e.to_string(),
                    },
                )?;
                continue;
            }
        };

        let last = session.submit_guess(&guess)?;
        session.snapshot_into(&mut snapshot);
        emit(
            &mut out,
            &ScriptMessage::Observation {
                snapshot: &snapshot,
                last,
            },
        )?;

        if session.status().is_terminal() {
            break;
        }
    }

    debug!(status = %session.status(), "script finished");
    Ok(session.status())
}
