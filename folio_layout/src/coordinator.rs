// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_timing::{TimerHandle, TimerQueue};
use kurbo::Size;

use crate::solver::{LayoutInputs, Orientation, ViewportMetrics, solve};

/// Quiet period after the last resize before the capability-level refresh
/// is issued.
pub const RESIZE_DEBOUNCE_MS: u64 = 500;

#[derive(Clone, Copy, Debug)]
enum LayoutTask {
    Refresh,
}

/// Event plumbing around [`solve`].
///
/// The coordinator holds the latest layout inputs and recomputes
/// [`ViewportMetrics`] whenever they change — but only once both readiness
/// inputs (natural image size and the external bar measurement) have
/// arrived. Resizes additionally arm a debounced refresh, which the host
/// forwards to the page-turn capability when
/// [`LayoutCoordinator::advance_to`] reports it due.
#[derive(Debug)]
pub struct LayoutCoordinator {
    window: Size,
    aspect_ratio: Option<f64>,
    bar_height: Option<f64>,
    bar_offset_fraction: f64,
    metrics: Option<ViewportMetrics>,
    refresh: Option<TimerHandle>,
    timers: TimerQueue<LayoutTask>,
}

impl LayoutCoordinator {
    /// Creates a coordinator for the given initial window size.
    ///
    /// `bar_offset_fraction` is the extra reserved space below the control
    /// bar, as a fraction of window height.
    #[must_use]
    pub fn new(window: Size, bar_offset_fraction: f64) -> Self {
        Self {
            window,
            aspect_ratio: None,
            bar_height: None,
            bar_offset_fraction,
            metrics: None,
            refresh: None,
            timers: TimerQueue::new(),
        }
    }

    /// Current window orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.window)
    }

    /// Latest computed metrics; `None` until both readiness inputs arrived.
    #[must_use]
    pub fn metrics(&self) -> Option<ViewportMetrics> {
        self.metrics
    }

    /// Returns `true` once both the image size and the bar measurement are
    /// known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.aspect_ratio.is_some() && self.bar_height.is_some()
    }

    /// Records the natural image size, deriving the page aspect ratio
    /// (height over width). Returns the metrics if this completed
    /// readiness.
    pub fn set_image_size(&mut self, natural: Size) -> Option<ViewportMetrics> {
        if natural.width > 0.0 {
            self.aspect_ratio = Some(natural.height / natural.width);
        }
        self.recompute()
    }

    /// Records the control bar measurement. Returns the metrics if this
    /// completed readiness.
    pub fn set_bar_height(&mut self, height: f64) -> Option<ViewportMetrics> {
        self.bar_height = Some(height);
        self.recompute()
    }

    /// Handles a window resize: recomputes metrics immediately and arms
    /// (or re-arms) the debounced capability refresh.
    ///
    /// Returns the new metrics when ready, along with the orientation so
    /// the caller can re-issue the display mode if it flipped.
    pub fn on_resize(&mut self, window: Size, now: u64) -> (Option<ViewportMetrics>, Orientation) {
        self.window = window;
        let metrics = self.recompute();
        let deadline = now + RESIZE_DEBOUNCE_MS;
        self.refresh = Some(match self.refresh.take() {
            Some(handle) => self.timers.reschedule(handle, deadline, LayoutTask::Refresh),
            None => self.timers.schedule(deadline, LayoutTask::Refresh),
        });
        (metrics, self.orientation())
    }

    /// Fires due timers. Returns `true` when the debounced refresh is due,
    /// in which case the host forwards a refresh to the capability.
    pub fn advance_to(&mut self, now: u64) -> bool {
        let mut refresh_due = false;
        for task in self.timers.advance_to(now) {
            match task {
                LayoutTask::Refresh => {
                    self.refresh = None;
                    refresh_due = true;
                }
            }
        }
        refresh_due
    }

    fn recompute(&mut self) -> Option<ViewportMetrics> {
        let (aspect_ratio, bar_height) = (self.aspect_ratio?, self.bar_height?);
        let metrics = solve(LayoutInputs {
            window: self.window,
            aspect_ratio,
            bar_height,
            bar_offset_fraction: self.bar_offset_fraction,
        });
        self.metrics = Some(metrics);
        self.metrics
    }
}
