//! Performance benchmarks for the calculation engine
//!
//! The engine runs on every keystroke-debounced recalculation and on every
//! scenario open, so it should stay comfortably in the microsecond range.

use criterion::{criterion_group, criterion_main, Criterion};
use invoice_roi::domain::{compute, ScenarioInput, ScenarioInputDraft};
use std::hint::black_box;

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("compute_starter_scenario", |b| {
        let input = ScenarioInput::starter();
        b.iter(|| black_box(compute(black_box(&input))));
    });

    // The series cap bounds the allocation, so a long horizon should cost
    // the same as a 36-month one.
    group.bench_function("compute_long_horizon", |b| {
        let input = ScenarioInput::try_from(ScenarioInputDraft {
            time_horizon_months: 120,
            ..ScenarioInputDraft::from(ScenarioInput::starter())
        })
        .expect("inputs in range");
        b.iter(|| black_box(compute(black_box(&input))));
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("validate_draft", |b| {
        let draft = ScenarioInputDraft::from(ScenarioInput::starter());
        b.iter(|| black_box(ScenarioInput::try_from(black_box(draft.clone()))));
    });

    group.finish();
}

criterion_group!(benches, bench_engine, bench_validation);

criterion_main!(benches);
