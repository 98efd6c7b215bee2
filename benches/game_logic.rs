use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mastermind::core::{score, GameSession, HistoryBuffer, HistoryEntry, SecretGenerator};
use mastermind::types::{Code, GameConfig, ScoreResult};

fn bench_score(c: &mut Criterion) {
    let secret = Code::from_digits(&[1, 2, 2, 3, 9, 0]).unwrap();
    let guess = Code::from_digits(&[2, 2, 3, 3, 0, 9]).unwrap();

    c.bench_function("score_6_digits", |b| {
        b.iter(|| score(black_box(&secret), black_box(&guess)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(6, 9).unwrap();
    let mut generator = SecretGenerator::new(12345);

    c.bench_function("generate_secret", |b| {
        b.iter(|| generator.generate(black_box(&config)))
    });
}

fn bench_history_push(c: &mut Criterion) {
    let mut history = HistoryBuffer::new();
    let entry = HistoryEntry::new(
        Code::from_digits(&[1, 2, 3, 4]).unwrap(),
        ScoreResult::new(1, 2),
    );

    c.bench_function("history_push_full", |b| {
        b.iter(|| history.push(black_box(entry.clone())))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = GameConfig::new(4, 6).unwrap();
    let guess = Code::from_digits(&[0, 1, 2, 3]).unwrap();
    let mut generator = SecretGenerator::new(7);

    c.bench_function("play_to_end", |b| {
        b.iter(|| {
            let mut session = GameSession::new(config, &mut generator);
            while !session.status().is_terminal() {
                let _ = session.submit_guess(black_box(&guess));
            }
            session.status()
        })
    });
}

criterion_group!(
    benches,
    bench_score,
    bench_generate,
    bench_history_push,
    bench_full_game
);
criterion_main!(benches);
