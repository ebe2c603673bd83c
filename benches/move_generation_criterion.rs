use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use elemental_chess::game_state::chess_rules::{ELEMENTAL_STARTING_POSITION, STARTING_POSITION};
use elemental_chess::game_state::chess_types::Color;
use elemental_chess::game_state::game_config::GameConfig;
use elemental_chess::game_state::game_state::Game;
use elemental_chess::move_generation::legal_move_checks::is_square_attacked;

const MIDDLEGAME: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let cases = [
        ("standard_start", GameConfig::default(), STARTING_POSITION),
        ("middlegame", GameConfig::default(), MIDDLEGAME),
        ("elemental_start", GameConfig::elemental(), ELEMENTAL_STARTING_POSITION),
    ];

    for (name, config, position) in cases {
        let game = Game::from_position(config, position).expect("benchmark position should parse");
        group.bench_function(name, |b| {
            b.iter(|| {
                let moves = black_box(&game)
                    .all_legal_moves(Color::White)
                    .expect("generation should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

fn bench_attack_scan(c: &mut Criterion) {
    let game = Game::from_position(GameConfig::default(), MIDDLEGAME)
        .expect("benchmark position should parse");
    let board = *game.board();
    let catalog = game.config().catalog.clone();
    let squares: Vec<_> = game.board().squares_of(Color::White).map(|(square, _)| square).collect();

    c.bench_function("attacked_squares_middlegame", |b| {
        b.iter(|| {
            squares
                .iter()
                .filter(|&&square| {
                    is_square_attacked(black_box(&board), square, Color::Black, &catalog)
                })
                .count()
        });
    });
}

fn bench_execute_undo(c: &mut Criterion) {
    let mut game = Game::from_position(GameConfig::default(), MIDDLEGAME)
        .expect("benchmark position should parse");
    let moves = game.all_legal_moves(Color::White).expect("generation should succeed");

    c.bench_function("execute_undo_all_root_moves", |b| {
        b.iter(|| {
            for &(from, to) in &moves {
                game.execute_move(from, to).expect("generated move is legal");
                black_box(game.undo_move());
            }
        });
    });
}

criterion_group!(benches, bench_legal_moves, bench_attack_scan, bench_execute_undo);
criterion_main!(benches);
