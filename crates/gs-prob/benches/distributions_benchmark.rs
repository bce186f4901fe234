use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_scalar_distributions(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();

    c.bench_function("normal_logpdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += gs_prob::normal::logpdf(x, 0.0, 1.3).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("cauchy_logpdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += gs_prob::cauchy::logpdf(x, 0.0, 1.3).unwrap();
            }
            black_box(acc)
        })
    });

    let thetas: Vec<f64> = (0..10_000).map(|i| ((i as f64) + 0.5) / 10_000.0).collect();
    c.bench_function("beta_logpdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &thetas {
                acc += gs_prob::beta::logpdf(x, 2.2, 3.3).unwrap();
            }
            black_box(acc)
        })
    });

    c.bench_function("binomial_logpmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &thetas {
                acc += gs_prob::binomial::logpmf(5, 10, p).unwrap();
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_scalar_distributions);
criterion_main!(benches);
