//! Benchmarks for the backtracking solver.
//!
//! Measures a fixed reference puzzle (51 empty cells) and the empty grid
//! (the worst case for branching width). Both inputs are fixed so runs are
//! reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use daylace_core::DigitGrid;
use daylace_solver::BacktrackSolver;

const REFERENCE_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_solve_reference_puzzle(c: &mut Criterion) {
    let puzzle: DigitGrid = REFERENCE_PUZZLE.parse().unwrap();
    let solver = BacktrackSolver::new();

    c.bench_function("solve_reference_puzzle", |b| {
        b.iter(|| hint::black_box(solver.solve(hint::black_box(&puzzle))));
    });
}

fn bench_solve_empty_grid(c: &mut Criterion) {
    let grid = DigitGrid::new();
    let solver = BacktrackSolver::new();

    c.bench_function("solve_empty_grid", |b| {
        b.iter(|| hint::black_box(solver.solve(hint::black_box(&grid))));
    });
}

criterion_group!(
    benches,
    bench_solve_reference_puzzle,
    bench_solve_empty_grid
);
criterion_main!(benches);
