// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Transform: ownership of the pan/zoom transform applied to a viewed
//! surface.
//!
//! The centerpiece is [`TransformEngine`], which wraps an external pan/zoom
//! capability (anything that can scale and translate a surface, modeled by
//! the [`PanZoomDriver`]/[`PanZoomHandle`] traits) and layers the policy a
//! document viewer needs on top of it:
//!
//! - Scale is always clamped to `[`[`MIN_SCALE`]`, `[`MAX_SCALE`]`]`, no
//!   matter which operation produced it.
//! - Focal-point math for zooming toward a screen position or toward the
//!   visually active page of a spread.
//! - An auto-deactivation rule: when the user zooms back down into the
//!   neighborhood of the baseline scale, the transform tears itself down so
//!   the surface returns to its untransformed interaction mode (and page
//!   turning can resume).
//! - Optional sigmoid step easing for pinch gestures, giving fine steps near
//!   the baseline and coarse steps when far zoomed in.
//! - A continuous scale notification stream ([`TransformEngine::scale_events`])
//!   that consumers treat as authoritative for displayed zoom magnitude.
//!
//! The engine is the single owner of [`TransformState`]. Capability change
//! notifications are fed *into* it through
//! [`TransformEngine::on_capability_change`] by the host adapter; nothing
//! else mutates the state.
//!
//! ```
//! use folio_transform::{PanZoomDriver, PanZoomHandle, PanZoomOptions, TransformEngine, ZoomOptions};
//! use kurbo::Rect;
//!
//! # #[derive(Default)]
//! # struct NoopDriver;
//! # struct NoopHandle;
//! # impl PanZoomHandle for NoopHandle {
//! #     fn zoom_in(&mut self) {}
//! #     fn zoom_out(&mut self) {}
//! #     fn zoom(&mut self, _: f64, _: ZoomOptions) {}
//! #     fn reset(&mut self) {}
//! #     fn set_step(&mut self, _: f64) {}
//! #     fn destroy(self) {}
//! # }
//! # impl PanZoomDriver for NoopDriver {
//! #     type Handle = NoopHandle;
//! #     fn create(&mut self, _: Rect, _: PanZoomOptions) -> NoopHandle { NoopHandle }
//! # }
//! let mut engine = TransformEngine::new(NoopDriver::default());
//! engine.set_target(Rect::new(0.0, 0.0, 800.0, 600.0))?;
//! engine.zoom_to_point(2.0, (400.0, 300.0).into())?;
//! assert!(engine.is_active());
//! # Ok::<(), folio_transform::TransformError>(())
//! ```
//!
//! This crate is `no_std`; enable either the `std` (default) or `libm`
//! feature for the transcendental math used by the sigmoid easing.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("folio_transform requires either the `std` or `libm` feature");

mod capability;
mod engine;
mod error;
mod state;

pub use capability::{PanZoomDriver, PanZoomHandle, PanZoomOptions, ZoomOptions};
pub use engine::{Activation, ChangeOutcome, Deactivation, TransformEngine};
pub use error::TransformError;
pub use state::{DEFAULT_STEP, MAX_SCALE, MIN_SCALE, TransformState, ZoomDirection};
