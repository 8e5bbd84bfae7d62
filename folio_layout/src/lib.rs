// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Layout: viewport sizing for a paginated flipbook.
//!
//! Given the window size, the page aspect ratio, and the height reserved by
//! the control bar, [`solve`] computes where the flipbook sits and how big
//! its pages are. Width is the binding constraint on wide viewports, height
//! on small or tall ones:
//!
//! 1. Width-first: the flipbook takes 95% of the window width; the page
//!    height follows from the aspect ratio.
//! 2. If that height would eat 90% or more of the vertical space left after
//!    the control bar, the solve flips to height-first: pages are capped at
//!    85% of the available height and the width is re-derived.
//!
//! [`LayoutCoordinator`] adds the event plumbing around the solver: it
//! gates the first computation on *both* the natural image size and the
//! external bar measurement being known, recomputes on every resize, and
//! debounces the capability-level refresh through a
//! [`folio_timing::TimerQueue`]. [`MetricsBoard`] is the broadcast channel
//! for element measurements by identifier, so the bar height arrives the
//! same way any other measurement would.
//!
//! Nothing here is persisted; metrics are rederived from the inputs on
//! every resize or readiness transition.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod coordinator;
mod metrics;
mod solver;

pub use coordinator::{LayoutCoordinator, RESIZE_DEBOUNCE_MS};
pub use metrics::MetricsBoard;
pub use solver::{
    HEIGHT_CAP_FRACTION, HEIGHT_CHECK_FRACTION, LayoutInputs, Orientation, ViewportMetrics,
    WIDTH_FRACTION, solve,
};
