//! Benchmarks for Segue string templates

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

use segue_interpolate::{interpolate, interpolate_string};

/// `n` numbers separated by text
fn path(rng: &mut impl Rng, n: usize) -> String {
    (0..n)
        .map(|_| format!("L{:.2},{:.2}", rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_template_build(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("template_build");

    for n in [1usize, 16, 256] {
        let (a, b) = (path(&mut rng, n), path(&mut rng, n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(interpolate_string(black_box(a.as_str()), black_box(b.as_str()))))
        });
    }

    group.finish();
}

fn bench_template_sample(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let interpolator = interpolate(path(&mut rng, 64), path(&mut rng, 64));

    c.bench_function("template_64_sample", |b| {
        b.iter(|| black_box(interpolator.at(black_box(0.5))))
    });
}

criterion_group!(benches, bench_template_build, bench_template_sample);
criterion_main!(benches);
