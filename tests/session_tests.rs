//! Session tests - full play-throughs through the facade crate

use mastermind::core::{GameError, GameSession, SecretGenerator};
use mastermind::types::{Code, GameConfig, GameStatus, ScoreResult};

fn code(digits: &[u8]) -> Code {
    Code::from_digits(digits).unwrap()
}

#[test]
fn test_ten_misses_lose_and_reveal_original_secret() {
    let config = GameConfig::new(4, 6).unwrap();
    assert_eq!(config.max_attempts(), 10);

    let secret = code(&[5, 1, 5, 0]);
    let mut session = GameSession::with_secret(config, secret.clone()).unwrap();

    let misses = [[0, 0, 0, 0], [1, 1, 1, 1], [2, 2, 2, 2], [6, 6, 6, 6], [5, 5, 5, 5]];
    for i in 0..10 {
        assert_eq!(session.status(), GameStatus::InProgress);
        session.submit_guess(&code(&misses[i % misses.len()])).unwrap();
    }

    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.reveal_secret(), Ok(&secret));
    assert_eq!(session.history().len(), 5);
    assert_eq!(
        session.submit_guess(&secret),
        Err(GameError::GameOver {
            status: GameStatus::Lost
        })
    );
}

#[test]
fn test_win_on_final_attempt() {
    let config = GameConfig::new(3, 3).unwrap();
    let secret = code(&[3, 0, 3]);
    let mut session = GameSession::with_secret(config, secret.clone()).unwrap();

    for _ in 1..config.max_attempts() {
        session.submit_guess(&code(&[0, 3, 0])).unwrap();
    }
    assert_eq!(session.attempts_left(), 1);

    let result = session.submit_guess(&secret).unwrap();
    assert_eq!(result, ScoreResult::new(3, 0));
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_generated_game_can_be_won_by_revealed_secret() {
    let config = GameConfig::new(6, 9).unwrap();
    let mut generator = SecretGenerator::new(2024);
    let mut session = GameSession::new(config, &mut generator);

    // Lose once to learn the secret, then replay the same seed.
    while !session.status().is_terminal() {
        let _ = session.submit_guess(&code(&[9, 9, 9, 9, 9, 9])).unwrap();
    }
    if session.status() == GameStatus::Won {
        return;
    }
    let secret = session.reveal_secret().unwrap().clone();

    let mut replay = GameSession::new(config, &mut SecretGenerator::new(2024));
    assert_eq!(replay.submit_guess(&secret).unwrap(), ScoreResult::new(6, 0));
    assert_eq!(replay.status(), GameStatus::Won);
}

#[test]
fn test_snapshot_serializes_for_presenters() {
    let config = GameConfig::new(3, 4).unwrap();
    let mut session = GameSession::with_secret(config, code(&[1, 2, 3])).unwrap();
    session.submit_guess(&code(&[3, 2, 1])).unwrap();

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["attempts_used"], 1);
    assert_eq!(value["max_attempts"], 6);
    assert_eq!(value["history"][0]["guess"], serde_json::json!([3, 2, 1]));
    assert_eq!(value["history"][0]["score"]["black"], 1);
    assert_eq!(value["history"][0]["score"]["white"], 2);
    assert!(value.get("secret").is_none());
}
