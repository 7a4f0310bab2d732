use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use player_guesser::players::parse_players_json;
use player_guesser::session::Session;
use player_guesser::shuffle::shuffle;

fn large_payload(players: usize) -> String {
    let entries: Vec<String> = (0..players)
        .map(|idx| {
            if idx % 10 == 0 {
                format!(r#"{{"name": "Player {idx}", "clubs": [1, "Club {idx}", null]}}"#)
            } else {
                format!(r#"{{"name": "Player {idx}", "clubs": ["Club A", "Club B", "Club C"]}}"#)
            }
        })
        .collect();
    format!("[{}]", entries.join(","))
}

fn bench_players_parse(c: &mut Criterion) {
    c.bench_function("players_parse", |b| {
        b.iter(|| {
            let out = parse_players_json(black_box(PLAYERS_JSON)).unwrap();
            black_box(out.players.len());
        })
    });
}

fn bench_players_parse_large(c: &mut Criterion) {
    let raw = large_payload(5_000);
    c.bench_function("players_parse_large", |b| {
        b.iter(|| {
            let out = parse_players_json(black_box(&raw)).unwrap();
            black_box(out.issues.len());
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_10k", |b| {
        b.iter(|| {
            let order = shuffle(black_box(10_000));
            black_box(order.len());
        })
    });
}

fn bench_session_cycle(c: &mut Criterion) {
    let players = parse_players_json(&large_payload(1_000)).unwrap().players;
    c.bench_function("session_full_cycle", |b| {
        b.iter(|| {
            let mut session = Session::start(players.clone()).unwrap();
            for _ in 0..session.len() {
                session.reveal();
                black_box(session.answer());
                session.next();
            }
            black_box(session.position());
        })
    });
}

criterion_group!(
    perf,
    bench_players_parse,
    bench_players_parse_large,
    bench_shuffle,
    bench_session_cycle
);
criterion_main!(perf);

static PLAYERS_JSON: &str = include_str!("../tests/fixtures/players_messy.json");
