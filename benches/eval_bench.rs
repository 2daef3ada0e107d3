//! Benchmarks for registry evaluation.
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use residual_eval::ResidualEvaluator;
use residual_eval::terms::Affine;

/// Sum a registry of `n` affine terms at one point.
fn bench_sum(c: &mut Criterion, n: usize) {
    let terms: Vec<Affine> = (0..n)
        .map(|i| Affine {
            slope: i as f64,
            intercept: 0.5,
        })
        .collect();
    let mut evaluator = ResidualEvaluator::new();
    for term in &terms {
        evaluator.add_residual_term(term);
    }
    c.bench_function(&format!("eval_{n}_terms"), |b| {
        b.iter(|| black_box(evaluator.eval(black_box(1.25))));
    });
}

fn benches(c: &mut Criterion) {
    bench_sum(c, 10);
    bench_sum(c, 1_000);
    bench_sum(c, 100_000);
}

criterion_group!(eval, benches);
criterion_main!(eval);
