// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_tween::{Ease, Tween};

fn bench_ease_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("tween/ease");
    let samples: Vec<f64> = (0..=1_000).map(|i| f64::from(i) / 1_000.0).collect();

    for ease in [Ease::Linear, Ease::InOutCubic, Ease::OutQuint, Ease::InOutBack] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{ease:?}")),
            &samples,
            |b, samples| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for &t in samples {
                        acc += ease.apply(black_box(t));
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

fn bench_point_tween(c: &mut Criterion) {
    c.bench_function("tween/point_60_frames", |b| {
        b.iter(|| {
            let mut tween = Tween::new(
                Point::ZERO,
                Point::new(800.0, -450.0),
                1.0,
                Ease::InOutQuad,
            );
            while !tween.advance(black_box(1.0 / 60.0)).finished {}
            black_box(tween.value())
        });
    });
}

criterion_group!(benches, bench_ease_apply, bench_point_tween);
criterion_main!(benches);
