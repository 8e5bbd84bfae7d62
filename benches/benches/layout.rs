// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use folio_layout::{LayoutCoordinator, LayoutInputs, RESIZE_DEBOUNCE_MS, solve};
use kurbo::Size;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_dim(&mut self, lo: f64, hi: f64) -> f64 {
        lo + f64::from(self.next_u32()) / f64::from(u32::MAX) * (hi - lo)
    }
}

fn build_windows(n: u32, seed: u64) -> Vec<Size> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Size::new(rng.next_dim(320.0, 2560.0), rng.next_dim(240.0, 1600.0)))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("folio_layout");
    group.sample_size(50);

    group.bench_function("solve", |b| {
        let inputs = LayoutInputs {
            window: Size::new(1280.0, 800.0),
            aspect_ratio: 1.4,
            bar_height: 72.0,
            bar_offset_fraction: 0.02,
        };
        b.iter(|| black_box(solve(black_box(inputs))));
    });

    for &n in &[64_u32, 1_024_u32] {
        group.bench_function(format!("resize_storm(n={n})"), |b| {
            b.iter_batched(
                || build_windows(n, 0x5017_0000_0000_0001 ^ u64::from(n)),
                |windows| {
                    let mut layout = LayoutCoordinator::new(Size::new(1280.0, 800.0), 0.02);
                    layout.set_image_size(Size::new(500.0, 700.0));
                    layout.set_bar_height(72.0);
                    let mut now = 0_u64;
                    for window in windows {
                        let (metrics, orientation) = layout.on_resize(window, now);
                        black_box((metrics, orientation));
                        now += 16;
                    }
                    black_box(layout.advance_to(now + RESIZE_DEBOUNCE_MS));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
