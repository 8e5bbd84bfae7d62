// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Gesture: disambiguation of overlapping touch intents.
//!
//! A raw multi-touch stream is ambiguous while it happens: the second
//! touch-start of a double-tap looks exactly like the start of a two-finger
//! pinch. [`GestureRecognizer`] consumes timestamped touch events and
//! resolves them into unambiguous [`GestureIntent`]s:
//!
//! - **Double-tap**: a second touch-start within [`TAP_INTERVAL_MS`] arms a
//!   confirmation timer of [`CONFIRM_DELAY_MS`]. If no pinch confirms before
//!   the timer fires, a [`GestureIntent::Toggle`] is delivered from
//!   [`GestureRecognizer::advance_to`]. The delay exists specifically so a
//!   concurrent pinch can cancel the tap action.
//! - **Pinch**: with exactly two touch points down, the inter-touch distance
//!   is recorded; once it drifts by more than [`PINCH_THRESHOLD_PX`], the
//!   pinch is confirmed, the pending tap is cancelled, and a
//!   [`GestureIntent::Pinch`] with direction and midpoint is emitted — at
//!   most once per touch sequence.
//! - **Desktop double-click** maps straight to the same toggle intent, no
//!   timing heuristics needed.
//!
//! The recognizer never touches the transform itself: intents carry enough
//! geometry for the composer to resolve them against the transform engine's
//! state (toggle = zoom in when inactive, reset when active; an outward
//! pinch activates zoom at the touch midpoint only when inactive).
//!
//! Time is a host-supplied `u64` millisecond value; the pending tap timer
//! lives in a [`folio_timing::TimerQueue`] and fires from
//! [`GestureRecognizer::advance_to`].
//!
//! ```
//! use folio_gesture::{GestureIntent, GestureRecognizer, TouchPhase};
//! use kurbo::Point;
//!
//! let mut gestures = GestureRecognizer::new();
//! let tap = [Point::new(100.0, 100.0)];
//!
//! // Two quick taps...
//! gestures.on_touch(TouchPhase::Start, &tap, 0);
//! gestures.on_touch(TouchPhase::End, &tap, 40);
//! gestures.on_touch(TouchPhase::Start, &tap, 150);
//! gestures.on_touch(TouchPhase::End, &tap, 190);
//!
//! // ...confirm as a toggle 300 ms after the second one.
//! assert_eq!(gestures.advance_to(440), None);
//! assert_eq!(
//!     gestures.advance_to(450),
//!     Some(GestureIntent::Toggle(Point::new(100.0, 100.0)))
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod recognizer;
mod touch;

pub use recognizer::{
    CONFIRM_DELAY_MS, GestureIntent, GestureRecognizer, PINCH_THRESHOLD_PX, PinchDirection,
    TAP_INTERVAL_MS, TouchPhase,
};
pub use touch::{pinch_distance, pinch_midpoint};
