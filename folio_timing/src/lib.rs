// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Timing: host-agnostic cancellable timer queue primitives.
//!
//! Interaction engines lean on short timers for disambiguation (is this tap
//! the first half of a double-tap?) and debouncing (don't relayout on every
//! resize event). This crate models those timers as explicit data instead of
//! host callbacks:
//!
//! - [`TimerQueue`] stores pending tasks keyed by a deadline in host
//!   milliseconds. The queue never reads a clock; the host passes `now` into
//!   [`TimerQueue::advance_to`] whenever it wants due tasks delivered.
//! - [`TimerHandle`] identifies a scheduled task. Handles are
//!   generation-counted, so a handle kept past its task's firing or
//!   cancellation is inert rather than aliasing a newer task.
//! - Cancel-and-replace is first class via [`TimerQueue::reschedule`]: the
//!   prior task (if still pending) is removed in the same step that arms the
//!   replacement, so a stale timer can never fire after its successor was
//!   scheduled.
//!
//! ## Minimal example
//!
//! ```
//! use folio_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let h = timers.schedule(300, "confirm");
//! assert!(timers.is_pending(h));
//!
//! // Nothing is due yet at t=200.
//! assert!(timers.advance_to(200).is_empty());
//!
//! // At t=300 the task fires exactly once.
//! assert_eq!(timers.advance_to(300), vec!["confirm"]);
//! assert!(!timers.is_pending(h));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Identifies a task scheduled on a [`TimerQueue`].
///
/// Handles are unique over the lifetime of the queue; a handle for a task
/// that has fired or been cancelled never matches a later task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    deadline: u64,
    seq: u64,
    task: T,
}

/// A deadline-ordered queue of cancellable tasks.
///
/// Deadlines are opaque host milliseconds; the queue only compares them.
/// Tasks due at the same instant are delivered in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedules `task` to be delivered once `now >= deadline`.
    pub fn schedule(&mut self, deadline: u64, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            deadline,
            seq,
            task,
        });
        TimerHandle(seq)
    }

    /// Cancels a pending task.
    ///
    /// Cancelling a handle whose task already fired or was already cancelled
    /// is a no-op. Returns `true` if a task was actually removed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != handle.0);
        self.entries.len() != before
    }

    /// Cancels `handle` (if still pending) and schedules `task` in its place.
    ///
    /// This is the cancel-and-replace primitive: the two steps are atomic
    /// from the queue's point of view, so the old task cannot fire between
    /// them.
    pub fn reschedule(&mut self, handle: TimerHandle, deadline: u64, task: T) -> TimerHandle {
        self.cancel(handle);
        self.schedule(deadline, task)
    }

    /// Returns `true` while the task behind `handle` has neither fired nor
    /// been cancelled.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.seq == handle.0)
    }

    /// Removes and returns every task with `deadline <= now`.
    ///
    /// Tasks are returned in deadline order, ties broken by scheduling
    /// order. Tasks scheduled *while processing* the returned batch are not
    /// part of it; they wait for the next call.
    pub fn advance_to(&mut self, now: u64) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline <= now {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_unstable_by_key(|e| (e.deadline, e.seq));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts with a real timer facility can use this to arm one native
    /// timeout instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
