// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Viewer: the composition root tying the interaction crates together.
//!
//! [`Viewer`] owns one of each component — a
//! [`TransformEngine`](folio_transform::TransformEngine) for the pan/zoom
//! transform, a [`GestureRecognizer`](folio_gesture::GestureRecognizer) for
//! touch disambiguation, a [`PageSync`](folio_nav::PageSync) for slider and
//! page-turn reconciliation, and a
//! [`LayoutCoordinator`](folio_layout::LayoutCoordinator) for viewport
//! sizing — and routes effects between them:
//!
//! - Host input arrives as [`InputEvent`]s through [`Viewer::on_input`].
//!   Touch phases feed the recognizer; wheel deltas go straight to the
//!   engine's asymmetric wheel rule; double-clicks map to the toggle intent.
//! - Recognizer intents are resolved against the engine's state: a toggle
//!   zooms toward the point while inactive and resets while active; a
//!   confirmed pinch enables sigmoid step easing, and an outward pinch on an
//!   inactive transform additionally activates zoom at the touch midpoint.
//! - Whenever the engine activates, the page-turn capability is disabled
//!   through [`PageSync::set_manipulation_lock`]; whenever it deactivates
//!   (explicitly or through the auto-deactivation rule), the lock lifts.
//! - Layout metrics double as the engine's target surface, so focal-point
//!   math always matches what is on screen.
//!
//! All components keep time through the same host-supplied `u64` millisecond
//! clock; [`Viewer::advance_to`] drains every timer queue (double-tap
//! confirmation, preview hide, resize debounce) in one call. Within any
//! single call, state mutation and downstream dispatch complete before
//! control returns; there is no deferred internal queue.
//!
//! This crate is `no_std`; enable either the `std` (default) or `libm`
//! feature for the transcendental math in the transform engine.

#![no_std]

use kurbo::{Point, Rect, Size};

use folio_gesture::{GestureIntent, GestureRecognizer, PinchDirection, TouchPhase};
use folio_layout::{LayoutCoordinator, MetricsBoard, Orientation, ViewportMetrics};
use folio_nav::{DisplayMode, PageSync, PageTurner, Preview};
use folio_transform::{
    Activation, ChangeOutcome, Deactivation, MIN_SCALE, PanZoomDriver, TransformEngine,
    TransformError,
};

/// One host input event, normalized by the platform adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// A touch event; `points` holds every finger currently down.
    Touch {
        /// Phase of the touch sequence.
        phase: TouchPhase,
        /// Positions of all active touches, in screen coordinates.
        points: &'a [Point],
    },
    /// A native desktop double-click.
    DoubleClick(Point),
    /// A wheel event's vertical delta (negative scrolls up).
    Wheel {
        /// Vertical scroll delta in host units.
        delta_y: f64,
    },
}

/// What [`Viewer::advance_to`] observed while draining timers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// The debounced post-resize refresh is due; the host forwards a
    /// refresh to the page-turn capability.
    pub refresh_layout: bool,
}

/// Outcome of [`Viewer::on_resize`], for the host to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    /// New viewport metrics, when layout readiness has been reached.
    pub metrics: Option<ViewportMetrics>,
    /// Display mode matching the new window orientation. The host
    /// reconfigures the document when this differs from the mode the
    /// page-turn capability currently reports.
    pub display_mode: DisplayMode,
}

/// Scale a toggle or activating pinch zooms to.
const TOGGLE_SCALE: f64 = 2.0;

/// Identifier the host publishes the control bar's measurement under.
pub const BAR_ELEMENT_ID: &str = "bottom-bar";

/// The viewer composition root. See the crate docs for the wiring.
pub struct Viewer<D: PanZoomDriver, T: PageTurner> {
    engine: TransformEngine<D>,
    gestures: GestureRecognizer,
    nav: PageSync<T>,
    layout: LayoutCoordinator,
    metrics: MetricsBoard,
}

impl<D: PanZoomDriver, T: PageTurner> core::fmt::Debug for Viewer<D, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Viewer")
            .field("engine", &self.engine)
            .field("gestures", &self.gestures)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<D: PanZoomDriver, T: PageTurner> Viewer<D, T> {
    /// Creates a viewer over a `total_pages`-page document.
    ///
    /// `window` is the initial window size and `bar_offset_fraction` the
    /// extra space reserved below the control bar, as a fraction of window
    /// height. The transform stays unbound until layout readiness produces
    /// the first viewport metrics.
    pub fn new(
        driver: D,
        turner: T,
        total_pages: u32,
        window: Size,
        bar_offset_fraction: f64,
    ) -> Self {
        Self {
            engine: TransformEngine::new(driver),
            gestures: GestureRecognizer::new(),
            nav: PageSync::new(turner, total_pages),
            layout: LayoutCoordinator::new(window, bar_offset_fraction),
            metrics: MetricsBoard::new(),
        }
    }

    /// Routes one input event.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] when an event requires the
    /// transform before layout has bound a target surface.
    pub fn on_input(&mut self, event: InputEvent<'_>, now: u64) -> Result<(), TransformError> {
        match event {
            InputEvent::Touch { phase, points } => {
                let intents = self.gestures.on_touch(phase, points, now);
                for intent in intents {
                    self.resolve(intent)?;
                }
                Ok(())
            }
            InputEvent::DoubleClick(point) => {
                let intent = self.gestures.on_double_click(point);
                self.resolve(intent)
            }
            InputEvent::Wheel { delta_y } => {
                if let Some(activation) = self.engine.wheel(delta_y)? {
                    self.apply_activation(activation);
                }
                Ok(())
            }
        }
    }

    /// Drains every timer queue up to `now`.
    ///
    /// Fires any due double-tap confirmation (resolving it like live
    /// input), hides an expired slider preview, and reports whether the
    /// debounced post-resize refresh is due.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] when a due toggle requires the
    /// transform before layout has bound a target surface.
    pub fn advance_to(&mut self, now: u64) -> Result<Tick, TransformError> {
        if let Some(intent) = self.gestures.advance_to(now) {
            self.resolve(intent)?;
        }
        self.nav.advance_to(now);
        let refresh_layout = self.layout.advance_to(now);
        Ok(Tick { refresh_layout })
    }

    /// Handles a `turned` notification from the page-turn capability.
    pub fn on_page_turned(&mut self, page: u32) {
        self.nav.on_turned(page);
    }

    /// Handles a change notification from the pan/zoom capability,
    /// releasing the manipulation lock if it auto-deactivated the
    /// transform.
    pub fn on_transform_change(
        &mut self,
        scale: f64,
        translate: kurbo::Vec2,
    ) -> Option<ChangeOutcome> {
        let outcome = self.engine.on_capability_change(scale, translate)?;
        if outcome.deactivated {
            self.nav.set_manipulation_lock(false);
        }
        Some(outcome)
    }

    /// Explicitly tears the transform down, restoring page turning.
    pub fn deactivate_zoom(&mut self) {
        if self.engine.deactivate() == Deactivation::Deactivated {
            self.nav.set_manipulation_lock(false);
        }
    }

    /// Starts a page-slider drag.
    pub fn begin_slider_drag(&mut self) {
        self.nav.begin_drag();
    }

    /// Updates the page-slider drag position (preview only).
    pub fn update_slider_drag(&mut self, raw_value: f64) {
        self.nav.update_drag(raw_value);
    }

    /// Ends the page-slider drag, issuing the turn command.
    pub fn end_slider_drag(&mut self, now: u64) {
        self.nav.end_drag(now);
    }

    /// Handles an arrow-key / programmatic page-slider value change.
    pub fn on_slider_value_change(&mut self, value: f64) {
        self.nav.on_slider_value_change(value);
    }

    /// Zoom-in button: one whole scale unit up, centered on the current
    /// page, animated.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] before layout has bound a target
    /// surface.
    pub fn zoom_in_button(&mut self) -> Result<(), TransformError> {
        let target = self.zoom_magnitude() + 2.0;
        self.page_zoom(target, true)
    }

    /// Zoom-out button: one whole scale unit down, centered on the current
    /// page, animated.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] before layout has bound a target
    /// surface.
    pub fn zoom_out_button(&mut self) -> Result<(), TransformError> {
        let target = self.zoom_magnitude();
        self.page_zoom(target, true)
    }

    /// Zoom-slider input: jumps to the given magnitude without animating.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] before layout has bound a target
    /// surface.
    pub fn set_zoom_slider(&mut self, magnitude: f64) -> Result<(), TransformError> {
        self.page_zoom(magnitude + MIN_SCALE, false)
    }

    /// Records the document's natural page image size (readiness input).
    pub fn set_image_size(&mut self, natural: Size) {
        let metrics = self.layout.set_image_size(natural);
        self.bind_metrics(metrics);
    }

    /// Records the control bar measurement (readiness input).
    pub fn set_bar_height(&mut self, height: f64) {
        let metrics = self.layout.set_bar_height(height);
        self.bind_metrics(metrics);
    }

    /// Records a host element measurement on the board.
    ///
    /// A measurement for [`BAR_ELEMENT_ID`] doubles as the layout readiness
    /// input, like [`Viewer::set_bar_height`].
    pub fn publish_element_metrics(&mut self, id: &str, rect: Rect) {
        self.metrics.publish(id, rect);
        if id == BAR_ELEMENT_ID {
            self.set_bar_height(rect.height());
        }
    }

    /// Latest published element measurements.
    #[must_use]
    pub fn element_metrics(&self) -> &MetricsBoard {
        &self.metrics
    }

    /// Handles a window resize.
    ///
    /// Recomputes the viewport immediately (when ready), rebinds the
    /// transform target to it, and arms the debounced capability refresh
    /// reported later by [`Viewer::advance_to`].
    pub fn on_resize(&mut self, window: Size, now: u64) -> ResizeOutcome {
        let (metrics, orientation) = self.layout.on_resize(window, now);
        self.bind_metrics(metrics);
        ResizeOutcome {
            metrics,
            display_mode: display_mode_for(orientation),
        }
    }

    /// Displayed zoom magnitude: `scale - 1`, so an untransformed view
    /// reads zero.
    #[must_use]
    pub fn zoom_magnitude(&self) -> f64 {
        self.engine.scale() - MIN_SCALE
    }

    /// Whether the pan/zoom transform is currently active.
    #[must_use]
    pub fn is_zoom_active(&self) -> bool {
        self.engine.is_active()
    }

    /// Authoritative current page.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.nav.current_page()
    }

    /// The page indicator text (for example `"6 - 7 / 20"`).
    #[must_use]
    pub fn page_label(&self) -> &str {
        self.nav.page_label()
    }

    /// The slider preview overlay, while visible.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.nav.preview()
    }

    /// Latest viewport metrics; `None` until layout readiness.
    #[must_use]
    pub fn viewport(&self) -> Option<ViewportMetrics> {
        self.layout.metrics()
    }

    /// The continuous scale notification stream.
    pub fn scale_events(&mut self) -> &mut folio_notify::Emitter<f64> {
        self.engine.scale_events()
    }

    /// The owned transform engine.
    #[must_use]
    pub fn engine(&self) -> &TransformEngine<D> {
        &self.engine
    }

    /// The owned navigation synchronizer.
    #[must_use]
    pub fn nav(&self) -> &PageSync<T> {
        &self.nav
    }

    fn resolve(&mut self, intent: GestureIntent) -> Result<(), TransformError> {
        match intent {
            GestureIntent::Toggle(point) => {
                if self.engine.is_active() {
                    self.engine.reset_zoom()
                } else {
                    let activation = self.engine.zoom_to_point(TOGGLE_SCALE, point)?;
                    self.apply_activation(activation);
                    Ok(())
                }
            }
            GestureIntent::Pinch {
                direction,
                midpoint,
            } => {
                self.engine.enable_sigmoid_step();
                if direction == PinchDirection::Outward && !self.engine.is_active() {
                    let activation = self.engine.zoom_to_point(TOGGLE_SCALE, midpoint)?;
                    self.apply_activation(activation);
                }
                Ok(())
            }
        }
    }

    fn page_zoom(&mut self, target_scale: f64, animate: bool) -> Result<(), TransformError> {
        let double = self.nav.display_mode() == DisplayMode::Double;
        let page = self.nav.current_page();
        let activation = self
            .engine
            .zoom_to_page(target_scale, page, double, animate)?;
        self.apply_activation(activation);
        Ok(())
    }

    fn apply_activation(&mut self, activation: Activation) {
        if activation == Activation::Activated {
            self.nav.set_manipulation_lock(true);
        }
    }

    /// Binds freshly computed metrics as the transform's target surface.
    fn bind_metrics(&mut self, metrics: Option<ViewportMetrics>) {
        if let Some(metrics) = metrics {
            let rect = Rect::from_origin_size(
                metrics.origin,
                Size::new(metrics.flipbook_width, metrics.page_height),
            );
            // Solver output is finite and positive, so the rebind cannot fail.
            let _ = self.engine.set_target(rect);
        }
    }
}

/// Display mode matching a window orientation: landscape shows a two-page
/// spread, portrait a single page.
#[must_use]
pub fn display_mode_for(orientation: Orientation) -> DisplayMode {
    match orientation {
        Orientation::Landscape => DisplayMode::Double,
        Orientation::Portrait => DisplayMode::Single,
    }
}

/// Width hint for the page indicator, in characters, so the label does not
/// reflow as pages turn: `round((3 * digits + 6) * 0.8)`.
#[must_use]
pub fn label_width_hint_chars(total_pages: u32) -> u32 {
    let mut digits = 1;
    let mut rest = total_pages / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    // Integer half-up rounding of (3 * digits + 6) * 0.8.
    (3 * digits + 6) * 8 / 10 + u32::from((3 * digits + 6) * 8 % 10 >= 5)
}
