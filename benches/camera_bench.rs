//! Benchmarks for per-frame camera work: recomposition, rotation and
//! landmark playback.
#![allow(missing_docs)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec3;
use lookout::camera::{Camera, CameraManager, CameraType, LandmarkHop};
use lookout::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::Cosine;
    let _ = c.bench_function("cosine_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn navigation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let kinds = [
        CameraType::Orbiting,
        CameraType::Tracking,
        CameraType::Exploring,
    ];
    for kind in kinds {
        let mut camera = Camera::new(kind);
        camera.set_position(DVec3::new(3.0, 4.0, 12.0));
        let _ = group.bench_function(format!("rotate_{kind}"), |b| {
            b.iter(|| camera.rotate(black_box(0.5), black_box(0.1), 0.0));
        });
    }

    let mut camera = Camera::new(CameraType::Orbiting);
    let _ = group.bench_function("set_focal_point", |b| {
        b.iter(|| camera.set_focal_point(black_box(DVec3::new(0.1, 0.2, 0.3))));
    });
    group.finish();
}

fn landmark_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("landmarks");

    for count in [1_usize, 4, 16] {
        let _ = group.bench_function(format!("{count}_cameras_tick"), |b| {
            b.iter_batched(
                || {
                    let mut manager = CameraManager::new();
                    for i in 0..count {
                        let camera = if i == 0 {
                            manager.active_mut()
                        } else {
                            manager.create(CameraType::Orbiting)
                        };
                        camera.set_landmark("start");
                        camera.set_position(DVec3::new(0.0, 5.0, 20.0));
                        let _ = camera.do_landmark_animation(vec![
                            LandmarkHop::new("start", 1000, 60.0),
                        ]);
                    }
                    manager
                },
                |mut manager| {
                    for _ in 0..60 {
                        let _ = manager
                            .tick(black_box(Duration::from_millis(16)));
                    }
                    manager
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    navigation_benchmark,
    landmark_benchmark
);
criterion_main!(benches);
