//! Benchmarks for the solving stages.
//!
//! Measures a propagation-only solve, a solve that falls back to search,
//! and the deduction rules applied once to representative grids.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridoku_core::{CandidateGrid, Grid};
use gridoku_solver::{
    Solver,
    rule::{Rule as _, SingleCandidate, UniqueCandidate},
};

const EASY: &str = "
    53. .7. ...
    6.. 195 ...
    .98 ... .6.
    8.. .6. ..3
    4.. 8.3 ..1
    7.. .2. ..6
    .6. ... 28.
    ... 419 ..5
    ... .8. .79
";

fn easy_grid() -> Grid {
    EASY.parse().unwrap()
}

fn seeded(grid: Grid) -> CandidateGrid {
    let mut candidates = CandidateGrid::new(grid);
    candidates.eliminate_all();
    candidates
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [("easy", easy_grid()), ("empty", Grid::new())];

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || Solver::new(hint::black_box(grid.clone())),
                |solver| {
                    solver.solve().unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_rule_apply(c: &mut Criterion) {
    let grid = seeded(easy_grid());
    let naked = SingleCandidate::new();
    let hidden = UniqueCandidate::new();

    c.bench_with_input(
        BenchmarkId::new("rule_apply", "single_candidate"),
        &grid,
        |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let placed = naked.apply(grid);
                    hint::black_box(placed)
                },
                BatchSize::SmallInput,
            );
        },
    );

    c.bench_with_input(
        BenchmarkId::new("rule_apply", "unique_candidate"),
        &grid,
        |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let placed = hidden.apply(grid);
                    hint::black_box(placed)
                },
                BatchSize::SmallInput,
            );
        },
    );
}

criterion_group!(benches, bench_solve, bench_rule_apply);
criterion_main!(benches);
