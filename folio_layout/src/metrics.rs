// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use hashbrown::HashMap;
use kurbo::Rect;

/// Broadcast channel for element measurements, keyed by identifier.
///
/// Hosts publish bounding rectangles as they measure elements ("bar",
/// "slider", ...); consumers read the latest value whenever they need it.
/// Only the most recent measurement per identifier is kept.
#[derive(Clone, Debug, Default)]
pub struct MetricsBoard {
    rects: HashMap<String, Rect>,
}

impl MetricsBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes (or replaces) the measurement for `id`.
    pub fn publish(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Latest measurement for `id`, if any was published.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// Latest measured height for `id`.
    #[must_use]
    pub fn height(&self, id: &str) -> Option<f64> {
        self.get(id).map(|r| r.height())
    }
}
