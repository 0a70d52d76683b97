use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tile_crush::core::{
    find_matches, has_any_legal_move, plan_refill, populate, BoardConfig, Grid, Session,
};
use tile_crush::engine::legal_swaps;

fn settled_grid(seed: u64) -> Grid {
    let mut grid = Grid::new(BoardConfig::new(8, 8, 6).unwrap_or_default());
    populate(&mut grid, &mut ChaCha8Rng::seed_from_u64(seed));
    grid
}

fn bench_find_matches(c: &mut Criterion) {
    let grid = settled_grid(1);
    c.bench_function("find_matches_8x8", |b| b.iter(|| find_matches(black_box(&grid))));
}

fn bench_oracle(c: &mut Criterion) {
    let grid = settled_grid(2);
    c.bench_function("has_any_legal_move_8x8", |b| {
        b.iter(|| has_any_legal_move(black_box(&grid)))
    });

    let mut scratch = grid.clone();
    c.bench_function("legal_swaps_8x8", |b| b.iter(|| legal_swaps(black_box(&mut scratch))));
}

fn bench_refill(c: &mut Criterion) {
    let empty = Grid::new(BoardConfig::new(8, 8, 6).unwrap_or_default());
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    c.bench_function("plan_refill_empty_8x8", |b| {
        b.iter(|| plan_refill(black_box(&empty), &mut rng))
    });
}

fn bench_new_session(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("session_new_6x6", |b| {
        b.iter(|| {
            seed += 1;
            Session::new(BoardConfig::default(), black_box(seed))
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_oracle,
    bench_refill,
    bench_new_session
);
criterion_main!(benches);
