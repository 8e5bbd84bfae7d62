// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Nav: reconciliation between a page-turn capability and a
//! drag-controlled page slider.
//!
//! Two parties claim to know the current page: the external page-turn
//! capability (it animates the flip and reports `turned` notifications) and
//! the slider the user drags. [`PageSync`] keeps them consistent:
//!
//! - While the slider is being dragged, the slider's fractional position is
//!   authoritative; the document must not re-render, only the thumbnail
//!   [`Preview`] updates.
//! - Releasing the slider issues exactly one turn command and arms a
//!   consume-once flag, so the `turned` echo of that programmatic turn is
//!   swallowed instead of being adopted as a user-originated change —
//!   breaking the otherwise infinite notify loop.
//! - Arrow-key turns and slider turns cannot double-trigger: a value change
//!   is accepted only when it leaves the page group last turned by the
//!   other channel.
//! - Page indices are always clamped into `[1, total_pages]`; out-of-range
//!   slider values clamp rather than error.
//!
//! Preview pairing and the page label follow the display mode: single-page
//! display (or a boundary page) previews one page and shows
//! `"page / total"`; an interior page of a double-page spread previews its
//! two-page group and shows `"p1 - p2 / total"`.
//!
//! ```
//! use folio_nav::{DisplayMode, PageSync, PageTurner};
//!
//! # struct Fb(bool);
//! # impl PageTurner for Fb {
//! #     fn turn_to(&mut self, _page: u32) {}
//! #     fn display_mode(&self) -> DisplayMode { DisplayMode::Double }
//! #     fn set_enabled(&mut self, enabled: bool) { self.0 = enabled; }
//! #     fn is_enabled(&self) -> bool { self.0 }
//! # }
//! let mut sync = PageSync::new(Fb(true), 20);
//!
//! sync.begin_drag();
//! sync.update_drag(6.4);
//! assert_eq!(sync.preview().unwrap().pages.as_slice(), [6, 7]);
//! sync.end_drag(1_000);
//!
//! // The capability's echo of our own turn is consumed, not adopted.
//! sync.on_turned(6);
//! assert_eq!(sync.current_page(), 6);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod capability;
mod preview;
mod sync;

pub use capability::{DisplayMode, PageTurner};
pub use preview::{PageGroup, Preview, page_group, page_label, preview_pages};
pub use sync::{COARSE_STEP, FINE_STEP, NavigationState, PREVIEW_HIDE_DELAY_MS, PageSync};
