// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the document renders its pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// One page at a time (portrait orientation).
    Single,
    /// Two-page spread (landscape orientation).
    Double,
}

/// The external page-turn capability.
///
/// It owns the page-flip animation and the current-page truth whenever the
/// user is not dragging the slider. `turned` notifications flow back into
/// [`PageSync::on_turned`](crate::PageSync::on_turned) through the host
/// adapter.
pub trait PageTurner {
    /// Turns the document to the given page.
    fn turn_to(&mut self, page: u32);
    /// Reports the current display mode.
    fn display_mode(&self) -> DisplayMode;
    /// Enables or disables page turning (view manipulation disables it).
    fn set_enabled(&mut self, enabled: bool);
    /// Whether page turning is currently enabled.
    fn is_enabled(&self) -> bool;
}
