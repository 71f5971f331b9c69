//! Benchmarks for Segue dispatch and sampling

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use segue_core::{ElementKind, TypedArray};
use segue_interpolate::{interpolate, Object, Value};
use segue_test::{GeneratorConfig, ValueGenerator};

fn bench_number(c: &mut Criterion) {
    let interpolator = interpolate(1, 2);

    c.bench_function("number_sample", |b| {
        b.iter(|| black_box(interpolator.at(black_box(0.5))))
    });
}

fn bench_color(c: &mut Criterion) {
    c.bench_function("color_build", |b| {
        b.iter(|| black_box(interpolate(black_box("steelblue"), black_box("#ff7f50"))))
    });

    let interpolator = interpolate("steelblue", "#ff7f50");
    c.bench_function("color_sample", |b| {
        b.iter(|| black_box(interpolator.at(black_box(0.3))))
    });
}

fn bench_typed_array(c: &mut Criterion) {
    let end = TypedArray::from_values(ElementKind::Uint8, (0..1024).map(|i| i as f64));
    let interpolator = interpolate(vec![0; 1024], end);

    c.bench_function("typed_array_1k_sample", |b| {
        b.iter(|| black_box(interpolator.at(black_box(0.5))))
    });
}

fn bench_nested_object(c: &mut Criterion) {
    let shape = |x: i32, fill: &str| {
        Object::new()
            .with("x", x)
            .with("style", Object::new().with("fill", fill).with("width", format!("{}px", x)))
            .with("points", vec![x, x * 2, x * 3])
    };
    let (a, b) = (Value::from(shape(0, "red")), Value::from(shape(100, "blue")));

    c.bench_function("nested_object_build", |bench| {
        bench.iter(|| black_box(interpolate(black_box(&a), black_box(&b))))
    });

    let interpolator = interpolate(&a, &b);
    c.bench_function("nested_object_sample", |bench| {
        bench.iter(|| black_box(interpolator.at(black_box(0.5))))
    });
}

fn bench_random_pairs(c: &mut Criterion) {
    let mut generator = ValueGenerator::new(GeneratorConfig::default());
    let pairs: Vec<(Value, Value)> = (0..256).map(|_| generator.pair()).collect();

    c.bench_function("random_pairs_build_and_sample", |b| {
        b.iter(|| {
            for (start, end) in &pairs {
                black_box(interpolate(start, end).at(0.5));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_number,
    bench_color,
    bench_typed_array,
    bench_nested_object,
    bench_random_pairs
);
criterion_main!(benches);
