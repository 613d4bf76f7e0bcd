//! Benchmarks for overlay validation.
//!
//! # Benchmarks
//!
//! - **`validate`**: Validates an overlay against the answer key, slot by slot.
//!
//! # Test Data
//!
//! - **`empty`**: The sample puzzle with a blank overlay.
//! - **`solved`**: The sample puzzle with every cell correct.
//! - **`open_15x15_solved`**: A fully solved 15×15 grid without blocked cells.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench validation
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use wordlace_core::{AnswerGrid, extract_slots};
use wordlace_game::{UserGrid, validate};

fn bench_validate(c: &mut Criterion) {
    let sample = AnswerGrid::sample();
    let open: AnswerGrid = vec!["ABCDEFGHIJKLMNO"; 15].join("\n").parse().unwrap();
    let cases = [
        ("empty", UserGrid::for_answer(&sample), &sample),
        ("solved", UserGrid::solved(&sample), &sample),
        ("open_15x15_solved", UserGrid::solved(&open), &open),
    ];

    for (name, user, answer) in &cases {
        let slots = extract_slots(answer);
        c.bench_with_input(BenchmarkId::new("validate", name), user, |b, user| {
            b.iter(|| validate(hint::black_box(user), answer, &slots));
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets = bench_validate
);
criterion_main!(benches);
