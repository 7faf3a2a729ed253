use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

/// Benchmark names must contain the `BENCH_FILTER` env var, if set.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER: OnceCell<Option<String>> = OnceCell::new();

    FILTER
        .get_or_init(|| env::var("BENCH_FILTER").ok())
        .as_ref()
        .map_or(true, |filter| name.contains(filter.as_str()))
}

#[inline(never)]
pub fn bench_fn<T>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_fn: impl Fn(&[T]) -> Vec<T>,
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let name = format!("{bench_name}-{transform_name}-{pattern_name}-{test_len}");
    if !should_run_benchmark(&name) {
        return;
    }

    c.bench_function(&name, |b| {
        b.iter_batched(
            || transform(pattern_provider(test_len)),
            |test_data| sort_fn(black_box(test_data.as_slice())),
            batch_size,
        )
    });
}
