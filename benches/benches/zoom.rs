// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Affine, Point, Size, Vec2};
use understory_zoom::pinch::PinchTracker;
use understory_zoom::{
    AffineProjector, AnimatorState, ZoomConfig, ZoomController, ZoomSurface, scale_around,
};

fn projector() -> AffineProjector {
    AffineProjector::new(Affine::translate((640.0, 360.0)) * Affine::scale(1.5))
}

fn bench_scale_around(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/scale_around");
    let projector = projector();
    let config = ZoomConfig::default();

    // Each step moves the focal point, so every call re-anchors the pivot.
    for steps in [16usize, 256, 4_096] {
        let points: Vec<Point> = (0..steps)
            .map(|i| Point::new((i % 97) as f64 * 13.0, (i % 61) as f64 * 11.0))
            .collect();
        group.throughput(Throughput::Elements(steps as u64));

        group.bench_with_input(BenchmarkId::from_parameter(steps), &points, |b, points| {
            b.iter_batched(
                || ZoomSurface::new(Size::new(1280.0, 720.0)),
                |mut surface| {
                    for (i, &p) in points.iter().enumerate() {
                        let target = 1.0 + (i % 8) as f64 * 0.5;
                        scale_around(&mut surface, p, target, &config, &projector).unwrap();
                    }
                    black_box(surface);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pinch_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/pinch_delta");
    let tracker = PinchTracker::new(100.0).unwrap();

    for touches in [2usize, 4, 10] {
        let points: Vec<Point> = (0..touches)
            .map(|i| Point::new(i as f64 * 40.0, 300.0 - i as f64 * 25.0))
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(touches),
            &points,
            |b, points| {
                b.iter(|| {
                    black_box(tracker.compute_delta(
                        black_box(points),
                        Vec2::new(3.0, -2.0),
                        points[0],
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_zoom_to_center_frames(c: &mut Criterion) {
    let projector = projector();

    // One full transition at 120 Hz.
    c.bench_function("zoom/zoom_to_center_frames", |b| {
        b.iter_batched(
            || {
                let zoom = ZoomController::new(ZoomConfig::default(), 100.0).unwrap();
                (zoom, ZoomSurface::new(Size::new(1280.0, 720.0)))
            },
            |(mut zoom, mut surface)| {
                zoom.zoom_to_center(
                    &mut surface,
                    Point::new(200.0, -80.0),
                    &projector,
                    Point::new(640.0, 360.0),
                )
                .unwrap();
                while zoom.advance(&mut surface, &projector, 1.0 / 120.0).unwrap()
                    != AnimatorState::Idle
                {}
                black_box(surface);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_scale_around,
    bench_pinch_delta,
    bench_zoom_to_center_frames
);
criterion_main!(benches);
