use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use globe::{AxisRotation, CartesianPoint, GeographicPoint, ReferenceSphere};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

fn generate_fixed_points(size: usize, seed: u64) -> Vec<GeographicPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            GeographicPoint::new(
                rng.gen_range(-PI..PI),
                rng.gen_range(-PI / 2.0..=PI / 2.0),
                rng.gen_range(-1e4..1e5),
            )
        })
        .collect()
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conversions");
    let sphere = ReferenceSphere::EARTH;

    for &size in &[100, 10_000] {
        let geo = generate_fixed_points(size, 12345);
        let cart: Vec<CartesianPoint> = geo.iter().map(|p| sphere.to_cartesian(p)).collect();

        group.bench_with_input(BenchmarkId::new("ToCartesian", size), &geo, |b, points| {
            b.iter(|| {
                for point in points {
                    black_box(sphere.to_cartesian(point));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("ToGeographic", size), &cart, |b, points| {
            b.iter(|| {
                for point in points {
                    black_box(sphere.to_geographic(point));
                }
            });
        });
    }

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("Metrics");
    let geo = generate_fixed_points(1_000, 67890);
    let cart: Vec<CartesianPoint> = geo.iter().map(CartesianPoint::from_geographic).collect();

    group.bench_function("GreatCircle", |b| {
        b.iter(|| {
            for pair in geo.windows(2) {
                black_box(pair[0].distance(&pair[1]));
            }
        });
    });

    group.bench_function("RotateInPlace", |b| {
        let axis = CartesianPoint::new(0.3, -0.2, 1.0);
        b.iter(|| {
            for point in &cart {
                let mut point = *point;
                let _ = black_box(point.rotate(&axis, 0.75));
            }
        });
    });

    group.bench_function("SharedAxisRotation", |b| {
        let rotation = AxisRotation::new(&CartesianPoint::new(0.3, -0.2, 1.0), 0.75);
        b.iter(|| {
            if let Ok(rotation) = &rotation {
                for point in &cart {
                    black_box(rotation.apply(point));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_metrics);
criterion_main!(benches);
