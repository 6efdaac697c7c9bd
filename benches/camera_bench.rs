//! Hot-path benchmarks for the rotation kernel and the camera tick.
// criterion_group! expands to an undocumented public fn, and the builder
// methods return `&mut Criterion` for chaining.
#![allow(missing_docs, unused_results)]

use axlecam::math::{Direction2, Vector3};
use axlecam::Camera;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn rotation_benchmark(c: &mut Criterion) {
    let v = Vector3::new(0.3, 0.4, 0.5);
    let axis = Vector3::new(0.0, 0.6, 0.8);
    c.bench_function("rotate_about", |b| {
        b.iter(|| black_box(v).rotated_about(black_box(axis), 0.1))
    });
    let ortho = Vector3::new(1.0, 0.0, 0.0);
    c.bench_function("rotate_about_orthogonal", |b| {
        b.iter(|| {
            black_box(ortho).rotated_about_orthogonal(black_box(axis), 0.1)
        })
    });
}

fn direction_benchmark(c: &mut Criterion) {
    let u = Vector3::new(0.2, 0.9, 0.3).normalized();
    c.bench_function("direction_round_trip", |b| {
        b.iter(|| {
            Direction2::from_vector3_world(black_box(u)).to_vector3_world()
        })
    });
}

fn camera_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_update");
    for smoothness in [0.0, 0.5, 0.95] {
        group.bench_function(format!("smoothness_{smoothness}"), |b| {
            let mut camera = Camera::new(
                Vector3::ZERO,
                Vector3::UP,
                Vector3::new(0.0, 1.0, 0.0),
            );
            camera.set_smoothness(smoothness, smoothness);
            b.iter(|| {
                camera.rotate_left(0.01);
                camera.rotate_up(0.005);
                camera.incline_right(0.001);
                camera.update();
                black_box(camera.look())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    rotation_benchmark,
    direction_benchmark,
    camera_update_benchmark
);
criterion_main!(benches);
