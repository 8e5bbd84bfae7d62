// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Lower bound on the transform scale; also the baseline ("no zoom") value.
pub const MIN_SCALE: f64 = 1.0;

/// Upper bound on the transform scale.
pub const MAX_SCALE: f64 = 10.0;

/// Scale increment used by step zooming when sigmoid easing is off.
pub const DEFAULT_STEP: f64 = 0.3;

/// The scale + translate state applied to the viewed surface.
///
/// Owned exclusively by [`TransformEngine`](crate::TransformEngine).
/// `is_active` is `true` exactly while an underlying capability handle
/// exists; an inactive state is always the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Current uniform scale, within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
    /// Current translation of the surface, in device pixels.
    pub translate: Vec2,
    /// Whether an underlying transform handle exists.
    pub is_active: bool,
}

impl TransformState {
    /// The identity (inactive) state: scale 1, no translation.
    pub const IDENTITY: Self = Self {
        scale: MIN_SCALE,
        translate: Vec2::ZERO,
        is_active: false,
    };

    /// The state immediately after activation: baseline scale, active.
    #[must_use]
    pub const fn activated() -> Self {
        Self {
            scale: MIN_SCALE,
            translate: Vec2::ZERO,
            is_active: true,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Direction of a step zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Increase scale by one step.
    In,
    /// Decrease scale by one step.
    Out,
}
