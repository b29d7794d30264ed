//! Benchmarks for the exhaustive wheel solver.
//!
//! # Benchmarks
//!
//! - **`solve_found`**: A catalog puzzle with a known solution, so the search
//!   stops part-way through rotation space.
//! - **`solve_not_found`**: A bonus wheel no rotation can match, so all
//!   `8^5` combinations are evaluated.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, sync::Arc, time::Duration};

use criterion::{BatchSize, Criterion, PlottingBackend, criterion_group, criterion_main};
use needlewheel_core::{Pattern, Wheel, catalog};
use needlewheel_solver::solve;

fn bench_solve_found(c: &mut Criterion) {
    let pool = catalog::standard_pool();
    let patterns = [0, 3, 4, 8, 9].map(|i| Arc::clone(&pool[i]));
    let bonus = Wheel::new(Arc::clone(catalog::bonus_pattern(1, 1)), 5).unwrap();

    c.bench_function("solve_found", |b| {
        b.iter_batched(
            || hint::black_box((patterns.clone(), bonus.clone())),
            |(patterns, bonus)| solve(&patterns, &bonus),
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_not_found(c: &mut Criterion) {
    let pool = catalog::standard_pool();
    let patterns = [0, 1, 2, 3, 4].map(|i| Arc::clone(&pool[i]));
    let blocked = Arc::new(Pattern::from_strs("12345678", "^^^^^^^^").unwrap());
    let bonus = Wheel::new(blocked, 0).unwrap();

    c.bench_function("solve_not_found", |b| {
        b.iter_batched(
            || hint::black_box((patterns.clone(), bonus.clone())),
            |(patterns, bonus)| solve(&patterns, &bonus),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_solve_found,
        bench_solve_not_found
);
criterion_main!(benches);
