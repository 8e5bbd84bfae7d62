// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Distance between the first two touch points, if at least two are down.
#[must_use]
pub fn pinch_distance(points: &[Point]) -> Option<f64> {
    match points {
        [a, b, ..] => Some(a.distance(*b)),
        _ => None,
    }
}

/// Midpoint of the first two touch points, if at least two are down.
#[must_use]
pub fn pinch_midpoint(points: &[Point]) -> Option<Point> {
    match points {
        [a, b, ..] => Some(a.midpoint(*b)),
        _ => None,
    }
}
