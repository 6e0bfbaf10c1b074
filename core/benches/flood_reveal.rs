use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kaboom_core::{Board, Controller, GameConfig, ShuffleGenerator};
use std::hint::black_box;

fn bench_flood_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");

    let empty = Board::from_hazards(100, &[9_999]).expect("valid layout");
    group.bench_function("100x100_single_hazard", |b| {
        b.iter_batched(
            || Controller::new(empty.clone()),
            |mut game| black_box(game.reveal_at_cursor()),
            BatchSize::LargeInput,
        )
    });

    let sparse = Board::generate(GameConfig::new(100, 500), ShuffleGenerator::new(1));
    let start = sparse
        .all_coordinates()
        .find(|&coord| !sparse.is_hazard(coord) && sparse.adjacency_count(coord) == 0)
        .expect("sparse board has an empty cell");
    group.bench_function("100x100_500_hazards", |b| {
        b.iter_batched(
            || {
                let mut game = Controller::new(sparse.clone());
                game.move_cursor_to(start);
                game
            },
            |mut game| black_box(game.reveal_at_cursor()),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_100x100", |b| {
        b.iter(|| Board::generate(black_box(GameConfig::new(100, 2_000)), ShuffleGenerator::new(7)))
    });
}

criterion_group!(benches, bench_flood_reveal, bench_generate);
criterion_main!(benches);
