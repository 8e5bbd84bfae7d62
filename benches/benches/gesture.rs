// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use folio_gesture::{GestureRecognizer, TouchPhase};
use kurbo::Point;

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

    fn next_coord(&mut self, upper: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * upper
    }
}

/// A stream of `n` touch sequences: mostly taps, every fourth a pinch.
fn build_stream(n: u32, seed: u64) -> Vec<(TouchPhase, Vec<Point>, u64)> {
    let mut rng = Lcg::new(seed);
    let mut events = Vec::new();
    let mut now = 0_u64;

    for i in 0..n {
        let p = Point::new(rng.next_coord(1024.0), rng.next_coord(768.0));
        if i % 4 == 3 {
            let q = Point::new(p.x + 20.0, p.y);
            let spread = Point::new(p.x + 60.0, p.y);
            events.push((TouchPhase::Start, vec![p, q], now));
            events.push((TouchPhase::Move, vec![p, spread], now + 30));
            events.push((TouchPhase::End, vec![p], now + 120));
        } else {
            events.push((TouchPhase::Start, vec![p], now));
            events.push((TouchPhase::End, vec![p], now + 40));
            events.push((TouchPhase::Start, vec![p], now + 150));
            events.push((TouchPhase::End, vec![p], now + 190));
        }
        now += 1_000;
    }

    events
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("folio_gesture");
    group.sample_size(50);

    for &n in &[64_u32, 1_024_u32] {
        group.bench_function(format!("recognize_stream(n={n})"), |b| {
            b.iter_batched(
                || build_stream(n, 0xF011_0000_0000_0001 ^ u64::from(n)),
                |events| {
                    let mut gestures = GestureRecognizer::new();
                    let mut intents = 0_usize;
                    for (phase, points, now) in &events {
                        intents += gestures.on_touch(*phase, points, *now).len();
                        if let Some(intent) = gestures.advance_to(*now) {
                            black_box(intent);
                            intents += 1;
                        }
                    }
                    black_box(intents);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
