// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Notify: synchronous in-process notification channels.
//!
//! An [`Emitter`] is a minimal publish/subscribe registry with a defined
//! delivery contract:
//!
//! - Delivery is synchronous: [`Emitter::emit`] returns only after every
//!   subscriber has observed the value.
//! - Delivery order is subscription order.
//! - Detaching is explicit and idempotent via [`SubscriberId`]; a component
//!   tears its subscriptions down by calling [`Emitter::unsubscribe`] (or
//!   [`Emitter::clear`] on the owning side).
//!
//! Subscribers are `FnMut(&T)` closures and receive the value by reference,
//! so the emitter works for non-`Clone` payloads. Because `emit` holds the
//! emitter exclusively, subscribers cannot re-enter the channel they are
//! being delivered on; feedback has to go through host state the caller
//! inspects after `emit` returns.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use folio_notify::Emitter;
//!
//! let seen = Rc::new(Cell::new(0.0_f64));
//! let sink = Rc::clone(&seen);
//! let mut scale = Emitter::new();
//! let id = scale.subscribe(Box::new(move |s: &f64| sink.set(*s)));
//!
//! scale.emit(&2.5);
//! assert_eq!(seen.get(), 2.5);
//!
//! scale.unsubscribe(id);
//! scale.emit(&3.0);
//! assert_eq!(seen.get(), 2.5);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Identifies one subscription on an [`Emitter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// A synchronous, ordered notification channel.
pub struct Emitter<T> {
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Emitter<T> {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a subscriber; it will observe every subsequent emit until
    /// it is unsubscribed.
    pub fn subscribe(&mut self, callback: Callback<T>) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, callback));
        SubscriberId(id)
    }

    /// Detaches a subscriber. Detaching twice (or passing an id from another
    /// emitter) is a no-op. Returns `true` if a subscriber was removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id.0);
        self.subscribers.len() != before
    }

    /// Delivers `value` to every subscriber, in subscription order.
    pub fn emit(&mut self, value: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }

    /// Detaches every subscriber.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Number of attached subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` when nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Emitter;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn emit_without_subscribers_is_fine() {
        let mut e = Emitter::new();
        e.emit(&1_u32);
        assert!(e.is_empty());
    }

    #[test]
    fn delivery_is_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut e = Emitter::new();

        let l1 = Rc::clone(&log);
        e.subscribe(Box::new(move |v: &u32| l1.borrow_mut().push(("a", *v))));
        let l2 = Rc::clone(&log);
        e.subscribe(Box::new(move |v: &u32| l2.borrow_mut().push(("b", *v))));

        e.emit(&7);
        assert_eq!(&*log.borrow(), &[("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let hits = Rc::new(RefCell::new(0));
        let mut e = Emitter::new();
        let h = Rc::clone(&hits);
        let id = e.subscribe(Box::new(move |_: &()| *h.borrow_mut() += 1));

        e.emit(&());
        assert!(e.unsubscribe(id));
        assert!(!e.unsubscribe(id));
        e.emit(&());

        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn clear_detaches_everyone() {
        let hits = Rc::new(RefCell::new(0));
        let mut e = Emitter::new();
        for _ in 0..3 {
            let h = Rc::clone(&hits);
            e.subscribe(Box::new(move |_: &()| *h.borrow_mut() += 1));
        }
        e.clear();
        e.emit(&());
        assert!(e.is_empty());
        assert_eq!(*hits.borrow(), 0);
    }
}
