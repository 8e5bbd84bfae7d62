// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_timing::{TimerHandle, TimerQueue};
use kurbo::Point;
use smallvec::SmallVec;

use crate::touch::{pinch_distance, pinch_midpoint};

/// Maximum gap between two touch-starts for them to count as a double-tap
/// (strict: `0 < elapsed < TAP_INTERVAL_MS`).
pub const TAP_INTERVAL_MS: u64 = 200;

/// Delay between the second tap and the toggle action, giving a concurrent
/// pinch time to confirm and cancel it.
pub const CONFIRM_DELAY_MS: u64 = 300;

/// Inter-touch distance drift (in pixels) required to confirm a pinch.
pub const PINCH_THRESHOLD_PX: f64 = 10.0;

/// Phase of a touch event, as reported by the host input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger went down; `points` holds all fingers currently down.
    Start,
    /// One or more fingers moved.
    Move,
    /// A finger lifted.
    End,
    /// The host cancelled the touch sequence.
    Cancel,
}

/// Direction of a confirmed pinch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchDirection {
    /// Fingers moving apart (zoom in).
    Outward,
    /// Fingers moving together (zoom out).
    Inward,
}

/// A disambiguated gesture, ready for the composer to resolve against the
/// transform engine's state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    /// Double-tap or double-click: zoom toward the point when the transform
    /// is inactive, reset it otherwise.
    Toggle(Point),
    /// Confirmed pinch. The composer enables sigmoid step easing; an
    /// [`PinchDirection::Outward`] pinch on an inactive transform
    /// additionally activates zoom at the midpoint. An outward pinch on an
    /// already-active transform is left to the capability's native pinch
    /// handling.
    Pinch {
        /// Whether the fingers moved apart or together.
        direction: PinchDirection,
        /// Midpoint of the two touches at confirmation time.
        midpoint: Point,
    },
}

/// State machine disambiguating tap, double-tap, and pinch over one touch
/// sequence at a time.
///
/// See the crate docs for the rules. All methods take the current host time
/// in milliseconds; the pending double-tap confirmation is delivered by
/// [`GestureRecognizer::advance_to`].
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    last_tap_time: Option<u64>,
    pinch_initial_distance: Option<f64>,
    pinch_confirmed: bool,
    pending_tap: Option<TimerHandle>,
    timers: TimerQueue<Point>,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one touch event into the recognizer.
    ///
    /// `points` are the positions of every finger currently down, in
    /// screen coordinates. Returns any intents that disambiguated
    /// immediately (only pinches do; toggles wait for the confirmation
    /// timer). Events with fewer points than a rule expects simply do not
    /// match that rule.
    pub fn on_touch(
        &mut self,
        phase: TouchPhase,
        points: &[Point],
        now: u64,
    ) -> SmallVec<[GestureIntent; 1]> {
        let mut intents = SmallVec::new();
        match phase {
            TouchPhase::Start => {
                self.on_start(points, now);
            }
            TouchPhase::Move => {
                if let Some(intent) = self.on_move(points) {
                    intents.push(intent);
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                // The pinch measurement belongs to this sequence; the
                // double-tap clock spans sequences and stays.
                self.pinch_initial_distance = None;
            }
        }
        intents
    }

    /// Desktop double-click: same toggle semantics as a confirmed
    /// double-tap, sourced from a native event instead of timing
    /// heuristics.
    #[must_use]
    pub fn on_double_click(&mut self, point: Point) -> GestureIntent {
        GestureIntent::Toggle(point)
    }

    /// Delivers the pending double-tap confirmation once its timer is due.
    ///
    /// Returns `None` when nothing is due or when a confirmed pinch
    /// suppressed the toggle.
    pub fn advance_to(&mut self, now: u64) -> Option<GestureIntent> {
        let mut intent = None;
        for point in self.timers.advance_to(now) {
            self.pending_tap = None;
            if !self.pinch_confirmed {
                intent = Some(GestureIntent::Toggle(point));
            }
        }
        intent
    }

    /// Returns `true` while a double-tap confirmation is armed.
    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.pending_tap
            .is_some_and(|handle| self.timers.is_pending(handle))
    }

    /// Drops all session state, including the double-tap clock.
    pub fn reset(&mut self) {
        self.last_tap_time = None;
        self.pinch_initial_distance = None;
        self.pinch_confirmed = false;
        self.pending_tap = None;
        self.timers.clear();
    }

    fn on_start(&mut self, points: &[Point], now: u64) {
        if let Some(last) = self.last_tap_time {
            let elapsed = now.saturating_sub(last);
            if elapsed > 0 && elapsed < TAP_INTERVAL_MS {
                // Second tap of a double-tap candidate: arm (or re-arm) the
                // confirmation, giving a pinch the confirmation window to
                // cancel it.
                self.pinch_confirmed = false;
                let point = points.first().copied().unwrap_or(Point::ZERO);
                let deadline = now + CONFIRM_DELAY_MS;
                self.pending_tap = Some(match self.pending_tap.take() {
                    Some(handle) => self.timers.reschedule(handle, deadline, point),
                    None => self.timers.schedule(deadline, point),
                });
            } else if let Some(handle) = self.pending_tap.take() {
                // A touch-start outside the tap window begins a new
                // sequence; a confirmation left over from the previous one
                // must never fire.
                self.timers.cancel(handle);
            }
        }
        self.last_tap_time = Some(now);

        if points.len() == 2 {
            self.pinch_initial_distance = pinch_distance(points);
        }
    }

    fn on_move(&mut self, points: &[Point]) -> Option<GestureIntent> {
        if points.len() != 2 {
            return None;
        }
        let initial = self.pinch_initial_distance?;
        let current = pinch_distance(points)?;
        if (current - initial).abs() <= PINCH_THRESHOLD_PX {
            return None;
        }

        self.pinch_confirmed = true;
        if let Some(handle) = self.pending_tap.take() {
            self.timers.cancel(handle);
        }
        // Cleared so the same sequence cannot confirm again.
        self.pinch_initial_distance = None;

        let direction = if current > initial {
            PinchDirection::Outward
        } else {
            PinchDirection::Inward
        };
        let midpoint = pinch_midpoint(points)?;
        Some(GestureIntent::Pinch {
            direction,
            midpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{
        CONFIRM_DELAY_MS, GestureIntent, GestureRecognizer, PinchDirection, TouchPhase,
    };

    const TAP: Point = Point::new(100.0, 100.0);

    fn tap_at(g: &mut GestureRecognizer, now: u64) {
        assert!(g.on_touch(TouchPhase::Start, &[TAP], now).is_empty());
        assert!(g.on_touch(TouchPhase::End, &[TAP], now + 30).is_empty());
    }

    #[test]
    fn double_tap_confirms_after_delay() {
        let mut g = GestureRecognizer::new();
        tap_at(&mut g, 0);
        tap_at(&mut g, 150);
        assert!(g.has_pending_tap());

        // Nothing fires before the confirmation delay elapses.
        assert_eq!(g.advance_to(150 + CONFIRM_DELAY_MS - 1), None);
        assert_eq!(
            g.advance_to(150 + CONFIRM_DELAY_MS),
            Some(GestureIntent::Toggle(TAP))
        );
        assert!(!g.has_pending_tap());
    }

    #[test]
    fn single_tap_never_toggles() {
        let mut g = GestureRecognizer::new();
        tap_at(&mut g, 0);
        assert_eq!(g.advance_to(10_000), None);
    }

    #[test]
    fn slow_second_tap_is_not_a_double_tap() {
        let mut g = GestureRecognizer::new();
        tap_at(&mut g, 0);
        tap_at(&mut g, 250);
        assert!(!g.has_pending_tap());
        assert_eq!(g.advance_to(10_000), None);
    }

    #[test]
    fn zero_elapsed_does_not_arm() {
        let mut g = GestureRecognizer::new();
        g.on_touch(TouchPhase::Start, &[TAP], 100);
        g.on_touch(TouchPhase::Start, &[TAP], 100);
        assert!(!g.has_pending_tap());
    }

    #[test]
    fn new_sequence_clears_stale_confirmation() {
        let mut g = GestureRecognizer::new();
        tap_at(&mut g, 0);
        tap_at(&mut g, 150); // arms at 450
        // An unrelated touch outside the tap window starts a new sequence.
        g.on_touch(TouchPhase::Start, &[TAP], 400);
        assert!(!g.has_pending_tap());
        assert_eq!(g.advance_to(10_000), None);
    }

    #[test]
    fn pinch_within_window_cancels_toggle() {
        let mut g = GestureRecognizer::new();
        tap_at(&mut g, 0);
        // Second finger goes down 150 ms later: looks like a double-tap,
        // arms the confirmation, and records the pinch distance.
        let two = [Point::new(100.0, 100.0), Point::new(140.0, 100.0)];
        g.on_touch(TouchPhase::Start, &two, 150);
        assert!(g.has_pending_tap());

        let spread = [Point::new(90.0, 100.0), Point::new(160.0, 100.0)];
        let intents = g.on_touch(TouchPhase::Move, &spread, 200);
        assert_eq!(
            intents.as_slice(),
            [GestureIntent::Pinch {
                direction: PinchDirection::Outward,
                midpoint: Point::new(125.0, 100.0),
            }]
        );

        // The toggle never fires.
        assert_eq!(g.advance_to(10_000), None);
    }

    #[test]
    fn pinch_needs_more_than_threshold_drift() {
        let mut g = GestureRecognizer::new();
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        g.on_touch(TouchPhase::Start, &two, 0);

        // 10 px exactly is not enough.
        let close = [Point::new(0.0, 0.0), Point::new(110.0, 0.0)];
        assert!(g.on_touch(TouchPhase::Move, &close, 10).is_empty());

        let enough = [Point::new(0.0, 0.0), Point::new(111.0, 0.0)];
        assert_eq!(g.on_touch(TouchPhase::Move, &enough, 20).len(), 1);
    }

    #[test]
    fn pinch_confirms_at_most_once_per_sequence() {
        let mut g = GestureRecognizer::new();
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        g.on_touch(TouchPhase::Start, &two, 0);

        let wide = [Point::new(0.0, 0.0), Point::new(150.0, 0.0)];
        assert_eq!(g.on_touch(TouchPhase::Move, &wide, 10).len(), 1);
        let wider = [Point::new(0.0, 0.0), Point::new(300.0, 0.0)];
        assert!(g.on_touch(TouchPhase::Move, &wider, 20).is_empty());
    }

    #[test]
    fn inward_pinch_reports_direction() {
        let mut g = GestureRecognizer::new();
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        g.on_touch(TouchPhase::Start, &two, 0);

        let narrow = [Point::new(0.0, 0.0), Point::new(80.0, 0.0)];
        let intents = g.on_touch(TouchPhase::Move, &narrow, 10);
        assert!(matches!(
            intents.as_slice(),
            [GestureIntent::Pinch {
                direction: PinchDirection::Inward,
                ..
            }]
        ));
    }

    #[test]
    fn touch_end_closes_the_pinch_measurement() {
        let mut g = GestureRecognizer::new();
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        g.on_touch(TouchPhase::Start, &two, 0);
        g.on_touch(TouchPhase::End, &two, 10);

        // Moves after the sequence ended cannot confirm.
        let wide = [Point::new(0.0, 0.0), Point::new(200.0, 0.0)];
        assert!(g.on_touch(TouchPhase::Move, &wide, 20).is_empty());
    }

    #[test]
    fn single_finger_move_never_confirms_pinch() {
        let mut g = GestureRecognizer::new();
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        g.on_touch(TouchPhase::Start, &two, 0);
        assert!(
            g.on_touch(TouchPhase::Move, &[Point::new(500.0, 0.0)], 10)
                .is_empty()
        );
    }

    #[test]
    fn double_click_toggles_immediately() {
        let mut g = GestureRecognizer::new();
        assert_eq!(
            g.on_double_click(Point::new(3.0, 4.0)),
            GestureIntent::Toggle(Point::new(3.0, 4.0))
        );
    }

    #[test]
    fn a_later_double_tap_works_after_a_pinch() {
        let mut g = GestureRecognizer::new();
        // Pinch first.
        let two = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        g.on_touch(TouchPhase::Start, &two, 0);
        let wide = [Point::new(0.0, 0.0), Point::new(150.0, 0.0)];
        g.on_touch(TouchPhase::Move, &wide, 10);
        g.on_touch(TouchPhase::End, &wide, 20);

        // Then a clean double-tap: arming resets the pinch flag.
        tap_at(&mut g, 1_000);
        tap_at(&mut g, 1_150);
        assert_eq!(
            g.advance_to(1_150 + CONFIRM_DELAY_MS),
            Some(GestureIntent::Toggle(TAP))
        );
    }
}
