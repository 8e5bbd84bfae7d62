// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use smallvec::SmallVec;

use folio_timing::{TimerHandle, TimerQueue};

use crate::capability::{DisplayMode, PageTurner};
use crate::preview::{Preview, page_group, page_label, preview_pages};

/// Slider step granularity while dragging: effectively continuous.
pub const FINE_STEP: f64 = 0.001;

/// Slider step granularity at rest: whole pages.
pub const COARSE_STEP: f64 = 1.0;

/// How long the preview stays visible after the drag ends.
pub const PREVIEW_HIDE_DELAY_MS: u64 = 300;

#[derive(Clone, Copy, Debug)]
enum NavTask {
    HidePreview,
}

/// Snapshot of the navigation state, for display and inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    /// Authoritative current page, in `[1, total_pages]`.
    pub current_page: u32,
    /// Display mode as reported by the page-turn capability.
    pub display_mode: DisplayMode,
    /// Whether the slider is being dragged.
    pub is_dragging: bool,
    /// Preview pages while visible (length 1 or 2), empty otherwise.
    pub preview_pages: SmallVec<[u32; 2]>,
    /// Target of a slider turn whose `turned` echo has not arrived yet.
    pub last_programmatic_turn_target: Option<u32>,
}

/// Reconciles the page-turn capability's `turned` stream with a draggable
/// slider. See the crate docs for the protocol.
#[derive(Debug)]
pub struct PageSync<T: PageTurner> {
    turner: T,
    total_pages: u32,
    /// Fractional slider position; authoritative while dragging.
    slider_value: f64,
    slider_step: f64,
    is_dragging: bool,
    /// `Some` while the preview overlay is visible.
    preview: Option<Preview>,
    label: String,
    /// Consume-once flag arming the adoption-skip for the `turned` echo of
    /// a slider-originated turn.
    pending_slider_turn: Option<u32>,
    last_turned_by_arrows: Option<u32>,
    hide_preview: Option<TimerHandle>,
    timers: TimerQueue<NavTask>,
}

impl<T: PageTurner> PageSync<T> {
    /// Creates a synchronizer on page 1 of a `total_pages`-page document.
    pub fn new(turner: T, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        let label = page_label(1, total_pages, turner.display_mode());
        Self {
            turner,
            total_pages,
            slider_value: 1.0,
            slider_step: COARSE_STEP,
            is_dragging: false,
            preview: None,
            label,
            pending_slider_turn: None,
            last_turned_by_arrows: None,
            hide_preview: None,
            timers: TimerQueue::new(),
        }
    }

    /// Authoritative current page: the rounded, clamped slider position.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.round_page(self.slider_value)
    }

    /// Total pages in the document.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Display mode as reported by the page-turn capability.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.turner.display_mode()
    }

    /// Current slider step granularity (fine while dragging).
    #[must_use]
    pub fn slider_step(&self) -> f64 {
        self.slider_step
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// The preview overlay, while visible.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// The page indicator text (for example `"6 - 7 / 20"`).
    #[must_use]
    pub fn page_label(&self) -> &str {
        &self.label
    }

    /// Snapshot of the navigation state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_page: self.current_page(),
            display_mode: self.turner.display_mode(),
            is_dragging: self.is_dragging,
            preview_pages: self
                .preview
                .as_ref()
                .map(|p| p.pages.clone())
                .unwrap_or_default(),
            last_programmatic_turn_target: self.pending_slider_turn,
        }
    }

    /// Handles a `turned` notification from the page-turn capability.
    ///
    /// An echo of a slider-originated turn (or anything arriving mid-drag)
    /// is consumed without mutating state; a genuinely external turn is
    /// adopted as the current page.
    pub fn on_turned(&mut self, page: u32) {
        if self.pending_slider_turn.is_some() || self.is_dragging {
            self.pending_slider_turn = None;
            return;
        }
        self.slider_value = f64::from(self.clamp_page(page));
        self.refresh_label();
    }

    /// Starts a slider drag: fine step granularity, preview shown.
    pub fn begin_drag(&mut self) {
        self.slider_step = FINE_STEP;
        self.is_dragging = true;
        // A hide scheduled by a just-finished drag must not blank the
        // preview we are about to show.
        if let Some(handle) = self.hide_preview.take() {
            self.timers.cancel(handle);
        }
        self.update_preview();
    }

    /// Updates the drag position.
    ///
    /// Only the preview overlay recomputes; no page-turn command is issued
    /// and the document does not re-render.
    pub fn update_drag(&mut self, raw_value: f64) {
        self.slider_value = self.clamp_value(raw_value);
        if self.is_dragging {
            self.update_preview();
        }
    }

    /// Ends the drag: snaps to the nearest page, issues exactly one turn
    /// command, and schedules the preview to hide shortly after.
    pub fn end_drag(&mut self, now: u64) {
        self.slider_step = COARSE_STEP;
        let page = self.current_page();
        self.slider_value = f64::from(page);
        self.pending_slider_turn = Some(page);
        self.is_dragging = false;
        self.hide_preview = Some(match self.hide_preview.take() {
            Some(handle) => {
                self.timers
                    .reschedule(handle, now + PREVIEW_HIDE_DELAY_MS, NavTask::HidePreview)
            }
            None => self
                .timers
                .schedule(now + PREVIEW_HIDE_DELAY_MS, NavTask::HidePreview),
        });
        self.ensure_turn(page);
        self.refresh_label();
    }

    /// Handles an arrow-key / programmatic slider value change.
    ///
    /// Ignored while dragging, and ignored when the new value stays inside
    /// the page group last turned through this channel, so arrow and slider
    /// turns cannot double-trigger.
    pub fn on_slider_value_change(&mut self, value: f64) {
        self.slider_value = self.clamp_value(value);
        let page = self.current_page();
        let group = page_group(page);
        let blocked = self.last_turned_by_arrows == Some(group.page1)
            || self.last_turned_by_arrows == Some(group.page2);
        if self.is_dragging || blocked {
            return;
        }
        self.ensure_turn(page);
        self.refresh_label();
        self.last_turned_by_arrows = Some(page);
    }

    /// Applies or releases the manipulation lock: while the transform
    /// engine is active, the page-turn capability stays disabled.
    pub fn set_manipulation_lock(&mut self, locked: bool) {
        self.turner.set_enabled(!locked);
    }

    /// Fires due timers (the preview hide delay).
    pub fn advance_to(&mut self, now: u64) {
        for task in self.timers.advance_to(now) {
            match task {
                NavTask::HidePreview => {
                    self.preview = None;
                    self.hide_preview = None;
                }
            }
        }
    }

    /// Access to the owned page-turn capability.
    #[must_use]
    pub fn turner(&self) -> &T {
        &self.turner
    }

    fn update_preview(&mut self) {
        self.preview = Some(preview_pages(
            self.current_page(),
            self.total_pages,
            self.turner.display_mode(),
        ));
    }

    fn refresh_label(&mut self) {
        self.label = page_label(
            self.current_page(),
            self.total_pages,
            self.turner.display_mode(),
        );
    }

    /// Issues one turn command, momentarily lifting the manipulation lock
    /// if it is engaged and restoring it afterwards.
    fn ensure_turn(&mut self, page: u32) {
        let was_enabled = self.turner.is_enabled();
        if !was_enabled {
            self.turner.set_enabled(true);
        }
        self.turner.turn_to(page);
        if !was_enabled {
            self.turner.set_enabled(false);
        }
    }

    fn clamp_value(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { 1.0 };
        value.clamp(1.0, f64::from(self.total_pages))
    }

    fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages)
    }

    fn round_page(&self, value: f64) -> u32 {
        let value = self.clamp_value(value);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped into [1, total_pages] above"
        )]
        let floor = value as u32;
        if value - f64::from(floor) >= 0.5 {
            floor + 1
        } else {
            floor
        }
    }
}
