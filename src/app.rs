//! Interactive game loop.
//!
//! Owns every retry: configuration and guess prompts repeat until the parser
//! accepts the line, then the validated value is handed to the core.

use anyhow::Result;
use tracing::{info, warn};

use crate::core::{GameSession, SecretGenerator};
use crate::input::{
    is_replay_key, parse_code_length, parse_guess_entry, parse_max_digit, should_quit,
};
use crate::input::{GuessEntry, InputError};
use crate::term::game_view::{CODE_LENGTH_PROMPT, MAX_DIGIT_PROMPT, REPLAY_PROMPT, WRONG_INPUT};
use crate::term::{GameView, Line, Screen};
use crate::types::{Code, GameConfig, GameStatus, Guess};

/// Totals for one run of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub rounds: u32,
    pub wins: u32,
}

/// Ask for `prompt` until `parse` accepts the answer. `None` at end of input.
fn ask<S: Screen, T>(
    screen: &mut S,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Result<Option<T>> {
    loop {
        let Some(line) = screen.read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, "rejected input");
                screen.show(&[Line::plain(WRONG_INPUT)])?;
            }
        }
    }
}

/// Build the configuration, prompting for any value not given up front.
pub fn prompt_config<S: Screen>(
    screen: &mut S,
    length: Option<u8>,
    max_digit: Option<u8>,
) -> Result<Option<GameConfig>> {
    let length = match length {
        Some(v) => v,
        None => match ask(screen, CODE_LENGTH_PROMPT, parse_code_length)? {
            Some(v) => v,
            None => return Ok(None),
        },
    };
    let max_digit = match max_digit {
        Some(v) => v,
        None => match ask(screen, MAX_DIGIT_PROMPT, parse_max_digit)? {
            Some(v) => v,
            None => return Ok(None),
        },
    };
    Ok(Some(GameConfig::new(length, max_digit)?))
}

/// Read one guess, position by position. `None` at end of input.
pub fn read_guess<S: Screen>(
    screen: &mut S,
    view: &GameView,
    config: &GameConfig,
) -> Result<Option<Guess>> {
    screen.show(&[Line::blank(), view.guess_intro(config)])?;

    let mut guess = Code::default();
    while guess.len() < config.code_length() as usize {
        let position = guess.len();
        let entry = ask(screen, &view.digit_prompt(position), |line| {
            parse_guess_entry(line, config, position)
        })?;
        match entry {
            Some(GuessEntry::Digit(digit)) => {
                guess.push(digit);
            }
            Some(GuessEntry::Full(full)) => return Ok(Some(full)),
            None => return Ok(None),
        }
    }
    Ok(Some(guess))
}

/// Play one round to its end. `None` if input ran out first.
pub fn play_round<S: Screen>(
    screen: &mut S,
    view: &GameView,
    session: &mut GameSession,
) -> Result<Option<GameStatus>> {
    while !session.status().is_terminal() {
        screen.show(&view.history_lines(&session.snapshot()))?;

        let Some(guess) = read_guess(screen, view, session.config())? else {
            return Ok(None);
        };
        let result = session.submit_guess(&guess)?;

        screen.clear()?;
        screen.show(&[view.result_line(result), Line::blank()])?;
    }

    let snap = session.snapshot();
    screen.show(&view.outcome_lines(&snap))?;
    if snap.status == GameStatus::Won {
        screen.show(&[Line::blank()])?;
        screen.show(&view.history_lines(&snap))?;
    }
    Ok(Some(snap.status))
}

/// Configure, then play rounds until the player declines a replay.
pub fn run<S: Screen>(
    screen: &mut S,
    length: Option<u8>,
    max_digit: Option<u8>,
    generator: &mut SecretGenerator,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let Some(config) = prompt_config(screen, length, max_digit)? else {
        return Ok(summary);
    };
    screen.clear()?;

    let view = GameView;
    let mut session = GameSession::new(config, generator);

    loop {
        let Some(status) = play_round(screen, &view, &mut session)? else {
            break;
        };
        summary.rounds += 1;
        if status == GameStatus::Won {
            summary.wins += 1;
        }

        let again = match screen.read_key(&format!("\n{REPLAY_PROMPT}"))? {
            Some(key) => !should_quit(key) && is_replay_key(key),
            None => false,
        };
        if !again {
            break;
        }

        session.restart(generator);
        screen.clear()?;
    }

    info!(rounds = summary.rounds, wins = summary.wins, "session over");
    Ok(summary)
}
