// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use folio_notify::Emitter;
use kurbo::{Point, Rect, Vec2};

use crate::capability::{PanZoomDriver, PanZoomHandle, PanZoomOptions, ZoomOptions};
use crate::error::TransformError;
use crate::state::{DEFAULT_STEP, MAX_SCALE, MIN_SCALE, TransformState, ZoomDirection};

/// Half-width of the tolerance band around the baseline scale inside which a
/// downward-moving scale deactivates the transform.
pub(crate) const AUTO_STOP_BAND: f64 = 0.1;

/// Largest downward step that still counts as "returning to baseline" for
/// auto-deactivation. A single jump into the band bigger than one zoom step
/// (such as the low point of an overshooting pinch) does not tear the
/// transform down.
pub(crate) const AUTO_STOP_MAX_STEP: f64 = DEFAULT_STEP;

/// Duration of the animated zoom used by [`TransformEngine::zoom_to_point`].
pub(crate) const ZOOM_TO_POINT_DURATION_MS: u64 = 200;

/// Divisor of the target width used to bias page-centered zooms toward the
/// visually active leaf of a double-page spread.
pub(crate) const PAGE_FOCAL_DIVISOR: f64 = 3.3333;

/// Result of an operation that may have brought the transform up.
///
/// The composer must disable the page-turn capability on [`Self::Activated`]
/// (manipulating the view must not turn pages) and leave it alone on
/// [`Self::AlreadyActive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// A capability handle was created by this call.
    Activated,
    /// The transform was already active; nothing changed.
    AlreadyActive,
}

/// Result of [`TransformEngine::deactivate`].
///
/// The composer must re-enable the page-turn capability on
/// [`Self::Deactivated`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deactivation {
    /// The capability handle was torn down by this call.
    Deactivated,
    /// The transform was already inactive; nothing changed.
    AlreadyInactive,
}

/// Outcome of processing one capability change notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangeOutcome {
    /// The scale that was published on the scale stream.
    pub scale: f64,
    /// Whether this notification auto-deactivated the transform.
    pub deactivated: bool,
}

/// Owner of the pan/zoom transform applied to the viewed surface.
///
/// The engine holds the external capability handle (created through the
/// injected [`PanZoomDriver`]) for exactly as long as the transform is
/// active, and is the only writer of [`TransformState`]. See the crate docs
/// for the policy it enforces.
pub struct TransformEngine<D: PanZoomDriver> {
    driver: D,
    target: Option<Rect>,
    handle: Option<D::Handle>,
    state: TransformState,
    /// Scale seen by the previous change notification; `None` right after
    /// activation so the first notification is never deduplicated.
    last_scale: Option<f64>,
    /// One-shot guard: set when auto-deactivation runs so its own side
    /// effects (the capability echoing the reset) cannot re-trigger it.
    auto_stop: bool,
    sigmoid_active: bool,
    scale_events: Emitter<f64>,
}

impl<D: PanZoomDriver> fmt::Debug for TransformEngine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformEngine")
            .field("target", &self.target)
            .field("state", &self.state)
            .field("last_scale", &self.last_scale)
            .field("auto_stop", &self.auto_stop)
            .field("sigmoid_active", &self.sigmoid_active)
            .field("scale_events", &self.scale_events)
            .finish_non_exhaustive()
    }
}

impl<D: PanZoomDriver> TransformEngine<D> {
    /// Creates an inactive engine around the given capability driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            target: None,
            handle: None,
            state: TransformState::IDENTITY,
            last_scale: None,
            auto_stop: false,
            sigmoid_active: false,
            scale_events: Emitter::new(),
        }
    }

    /// Binds the manipulable surface.
    ///
    /// Must be called before any transform operation. Returns
    /// [`TransformError::InvalidTarget`] for an empty or non-finite
    /// rectangle.
    pub fn set_target(&mut self, rect: Rect) -> Result<(), TransformError> {
        if !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(TransformError::InvalidTarget);
        }
        self.target = Some(rect);
        Ok(())
    }

    /// Returns `true` once a target surface is bound.
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Returns `true` while an underlying capability handle exists.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Current transform state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Current scale; [`MIN_SCALE`] while inactive.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// The continuous scale notification stream.
    ///
    /// A value is published on every transform update; consumers treat
    /// `scale - 1` as the authoritative display magnitude.
    pub fn scale_events(&mut self) -> &mut Emitter<f64> {
        &mut self.scale_events
    }

    /// Brings the transform up. Idempotent.
    ///
    /// On a fresh activation the change-tracking state (previous scale,
    /// auto-deactivation guard) is reset and a capability handle is created
    /// with the `[1, 10]` scale bounds and the default step.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] if no target is bound.
    pub fn activate(&mut self) -> Result<Activation, TransformError> {
        let target = self.target.ok_or(TransformError::NotInitialized)?;
        if self.handle.is_some() {
            return Ok(Activation::AlreadyActive);
        }
        self.auto_stop = false;
        self.last_scale = None;
        self.handle = Some(self.driver.create(target, PanZoomOptions::default()));
        self.state = TransformState::activated();
        Ok(Activation::Activated)
    }

    /// Tears the transform down. Idempotent; never errors.
    ///
    /// Restores the baseline transform, disables sigmoid stepping, destroys
    /// the capability handle, and publishes the baseline scale so display
    /// consumers drop back to zero magnitude.
    pub fn deactivate(&mut self) -> Deactivation {
        let Some(mut handle) = self.handle.take() else {
            return Deactivation::AlreadyInactive;
        };
        self.sigmoid_active = false;
        handle.set_step(DEFAULT_STEP);
        handle.reset();
        handle.destroy();
        self.state = TransformState::IDENTITY;
        self.scale_events.emit(&MIN_SCALE);
        Deactivation::Deactivated
    }

    /// Step-zooms in the given direction, activating first if needed.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] if no target is bound.
    pub fn zoom_by(&mut self, direction: ZoomDirection) -> Result<Activation, TransformError> {
        let activation = self.ensure_active()?;
        if let Some(handle) = &mut self.handle {
            match direction {
                ZoomDirection::In => handle.zoom_in(),
                ZoomDirection::Out => handle.zoom_out(),
            }
        }
        Ok(activation)
    }

    /// Animates to `target_scale` about a screen-space point.
    ///
    /// The point is converted into the transform's focal space, whose origin
    /// sits at the target element's center: `focal = 2 * relative - size`
    /// per axis. Activates first if needed.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] if no target is bound.
    pub fn zoom_to_point(
        &mut self,
        target_scale: f64,
        screen_point: Point,
    ) -> Result<Activation, TransformError> {
        let rect = self.target.ok_or(TransformError::NotInitialized)?;
        let relative = screen_point - rect.origin();
        let focal = Point::new(
            2.0 * relative.x - rect.width(),
            2.0 * relative.y - rect.height(),
        );

        let activation = self.ensure_active()?;
        let scale = target_scale.clamp(MIN_SCALE, MAX_SCALE);
        if let Some(handle) = &mut self.handle {
            handle.zoom(scale, ZoomOptions::animated(focal, ZOOM_TO_POINT_DURATION_MS));
        }
        Ok(activation)
    }

    /// Zooms to `target_scale` centered on the given page.
    ///
    /// In a double-page spread the focal point is biased toward the leaf the
    /// reader is looking at: `x = side * width / 3.3333`, with `side = -1`
    /// for even pages and `+1` for odd ones. Single-page display centers at
    /// zero. The clamped scale is published on the scale stream so slider
    /// and label consumers update even before the capability echoes.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] if no target is bound.
    pub fn zoom_to_page(
        &mut self,
        target_scale: f64,
        page: u32,
        double_display: bool,
        animate: bool,
    ) -> Result<Activation, TransformError> {
        let rect = self.target.ok_or(TransformError::NotInitialized)?;
        let scale = target_scale.clamp(MIN_SCALE, MAX_SCALE);

        let focal = if double_display {
            let side = if page.is_multiple_of(2) { -1.0 } else { 1.0 };
            Point::new(side * rect.width() / PAGE_FOCAL_DIVISOR, 0.0)
        } else {
            Point::ZERO
        };

        let activation = self.ensure_active()?;
        if let Some(handle) = &mut self.handle {
            let options = if animate {
                ZoomOptions::animated(focal, ZOOM_TO_POINT_DURATION_MS)
            } else {
                ZoomOptions::immediate(focal)
            };
            handle.zoom(scale, options);
        }
        self.state.scale = scale;
        self.scale_events.emit(&scale);
        Ok(activation)
    }

    /// Restores the baseline transform without deactivating.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] if no target is bound or no
    /// transform is active.
    pub fn reset_zoom(&mut self) -> Result<(), TransformError> {
        if self.target.is_none() {
            return Err(TransformError::NotInitialized);
        }
        match &mut self.handle {
            Some(handle) => {
                handle.reset();
                Ok(())
            }
            None => Err(TransformError::NotInitialized),
        }
    }

    /// Routes a wheel delta into zooming.
    ///
    /// A negative vertical delta (scroll up / pinch-out on a trackpad)
    /// always zooms in, activating first if needed. A non-negative delta is
    /// forwarded only while a transform is already active, so ordinary
    /// scroll-down over the document never hijacks page scrolling into a
    /// zoom. The asymmetry is intentional.
    ///
    /// Returns `Ok(None)` when the delta was deliberately ignored.
    ///
    /// # Errors
    ///
    /// [`TransformError::NotInitialized`] if zooming in with no bound
    /// target.
    pub fn wheel(&mut self, delta_y: f64) -> Result<Option<Activation>, TransformError> {
        if delta_y < 0.0 {
            return self.zoom_by(ZoomDirection::In).map(Some);
        }
        if let Some(handle) = &mut self.handle {
            handle.zoom_out();
            return Ok(Some(Activation::AlreadyActive));
        }
        Ok(None)
    }

    /// Enables sigmoid step easing (pinch mode): each subsequent change
    /// notification retunes the capability step to
    /// `3.3 / (1 + e^(-0.4 * (scale - 4)))`.
    pub fn enable_sigmoid_step(&mut self) {
        self.sigmoid_active = true;
    }

    /// Disables sigmoid step easing and restores the default step.
    pub fn disable_sigmoid_step(&mut self) {
        self.sigmoid_active = false;
        if let Some(handle) = &mut self.handle {
            handle.set_step(DEFAULT_STEP);
        }
    }

    /// Returns `true` while sigmoid step easing is on.
    #[must_use]
    pub fn sigmoid_step_enabled(&self) -> bool {
        self.sigmoid_active
    }

    /// Processes one change notification from the underlying capability.
    ///
    /// Repeated scales are deduplicated. While sigmoid easing is on, the
    /// capability step is retuned for the new scale. Then the
    /// auto-deactivation rule runs: a scale inside `1 ± 0.1` reached by a
    /// downward step of at most one zoom step tears the transform down,
    /// exactly once per activation (see [`Deactivation`] handling in the
    /// composer). Finally the scale is published on the scale stream.
    ///
    /// Returns `None` when the notification was ignored (inactive engine or
    /// duplicate scale).
    pub fn on_capability_change(&mut self, scale: f64, translate: Vec2) -> Option<ChangeOutcome> {
        self.handle.as_ref()?;
        if self.last_scale == Some(scale) {
            return None;
        }

        if self.sigmoid_active {
            let step = sigmoid_step(scale);
            if let Some(handle) = &mut self.handle {
                handle.set_step(step);
            }
        }

        let delta = scale - self.last_scale.unwrap_or(scale);
        let returning_to_baseline = (MIN_SCALE - AUTO_STOP_BAND..=MIN_SCALE + AUTO_STOP_BAND)
            .contains(&scale)
            && delta < 0.0
            && -delta <= AUTO_STOP_MAX_STEP;

        self.last_scale = Some(scale);

        if returning_to_baseline && !self.auto_stop {
            self.auto_stop = true;
            self.deactivate();
            return Some(ChangeOutcome {
                scale: MIN_SCALE,
                deactivated: true,
            });
        }

        self.state.scale = scale;
        self.state.translate = translate;
        self.scale_events.emit(&scale);
        Some(ChangeOutcome {
            scale,
            deactivated: false,
        })
    }

    fn ensure_active(&mut self) -> Result<Activation, TransformError> {
        if self.handle.is_some() {
            return Ok(Activation::AlreadyActive);
        }
        self.activate()
    }
}

/// Step size giving fine control near the baseline and fast traversal at
/// high scale.
fn sigmoid_step(scale: f64) -> f64 {
    3.3 / (1.0 + exp(-0.4 * (scale - 4.0)))
}

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn exp(x: f64) -> f64 {
    libm::exp(x)
}
