// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::state::{DEFAULT_STEP, MAX_SCALE, MIN_SCALE};

/// Options handed to [`PanZoomDriver::create`] when a transform handle is
/// brought up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomOptions {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale increment for step zooming.
    pub step: f64,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            step: DEFAULT_STEP,
        }
    }
}

/// Options for a targeted zoom on a [`PanZoomHandle`].
///
/// The focal point is expressed in the transform's own coordinate space,
/// with the origin at the target element's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOptions {
    /// Point that stays fixed while the scale changes.
    pub focal: Point,
    /// Whether the capability should animate toward the new scale.
    pub animate: bool,
    /// Animation duration in milliseconds; ignored when `animate` is false.
    pub duration_ms: u64,
}

impl ZoomOptions {
    /// An immediate (non-animated) zoom about `focal`.
    #[must_use]
    pub const fn immediate(focal: Point) -> Self {
        Self {
            focal,
            animate: false,
            duration_ms: 0,
        }
    }

    /// An animated zoom about `focal` over `duration_ms`.
    #[must_use]
    pub const fn animated(focal: Point, duration_ms: u64) -> Self {
        Self {
            focal,
            animate: true,
            duration_ms,
        }
    }
}

/// A live handle onto the external pan/zoom capability.
///
/// The handle is created by a [`PanZoomDriver`] and owned by the engine for
/// as long as the transform is active. Scale/translate change notifications
/// flow back through the host adapter into
/// [`TransformEngine::on_capability_change`](crate::TransformEngine::on_capability_change);
/// the handle itself only accepts commands.
pub trait PanZoomHandle {
    /// Step-zooms in by the configured step.
    fn zoom_in(&mut self);
    /// Step-zooms out by the configured step.
    fn zoom_out(&mut self);
    /// Zooms to an absolute scale about a focal point.
    fn zoom(&mut self, scale: f64, options: ZoomOptions);
    /// Restores the identity transform.
    fn reset(&mut self);
    /// Replaces the step used by [`Self::zoom_in`] / [`Self::zoom_out`].
    fn set_step(&mut self, step: f64);
    /// Tears the capability down, releasing the manipulated surface.
    fn destroy(self);
}

/// Factory for [`PanZoomHandle`]s bound to a target surface.
///
/// Hosts implement this once per surface technology (DOM element, canvas
/// layer, test double) and inject it into the engine.
pub trait PanZoomDriver {
    /// The handle type produced by this driver.
    type Handle: PanZoomHandle;

    /// Binds the capability to the surface whose bounds are `target`.
    fn create(&mut self, target: Rect, options: PanZoomOptions) -> Self::Handle;
}
