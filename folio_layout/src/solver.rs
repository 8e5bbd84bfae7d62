// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Share of the window width the flipbook may take in the width-first pass.
pub const WIDTH_FRACTION: f64 = 0.95;

/// Share of the available height above which the width-first result is
/// rejected.
pub const HEIGHT_CHECK_FRACTION: f64 = 0.90;

/// Share of the available height pages are capped at in the height-first
/// fallback.
pub const HEIGHT_CAP_FRACTION: f64 = 0.85;

/// Window orientation, derived from the width/height comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `width >= height`: two-page spread.
    Landscape,
    /// `width < height`: single page.
    Portrait,
}

impl Orientation {
    /// Derives the orientation of a window.
    #[must_use]
    pub fn of(window: Size) -> Self {
        if window.width >= window.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Pages shown side by side in this orientation.
    #[must_use]
    pub fn pages_across(self) -> f64 {
        match self {
            Self::Landscape => 2.0,
            Self::Portrait => 1.0,
        }
    }
}

/// Inputs to one layout solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInputs {
    /// Window size in device pixels.
    pub window: Size,
    /// Page aspect ratio as height over width, from the natural image size.
    pub aspect_ratio: f64,
    /// Measured height of the control bar.
    pub bar_height: f64,
    /// Extra reserved space below the bar, as a fraction of window height.
    pub bar_offset_fraction: f64,
}

/// Where the flipbook sits and how big its pages are.
///
/// Rederived from [`LayoutInputs`] on every resize; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    /// Width of a single page.
    pub page_width: f64,
    /// Height of a single page.
    pub page_height: f64,
    /// Width of the whole flipbook (one or two pages across).
    pub flipbook_width: f64,
    /// Top-left corner centering the flipbook in the space above the bar.
    pub origin: Point,
}

/// Computes viewport metrics for the given inputs.
///
/// See the crate docs for the width-first / height-first policy.
#[must_use]
pub fn solve(inputs: LayoutInputs) -> ViewportMetrics {
    let LayoutInputs {
        window,
        aspect_ratio,
        bar_height,
        bar_offset_fraction,
    } = inputs;
    let pages_across = Orientation::of(window).pages_across();

    let reserved = bar_height + bar_offset_fraction * window.height;
    let available = window.height - reserved;

    let mut flipbook_width = window.width * WIDTH_FRACTION;
    let mut page_width = flipbook_width / pages_across;
    let mut page_height = page_width * aspect_ratio;

    if page_height >= available * HEIGHT_CHECK_FRACTION {
        page_height = available * HEIGHT_CAP_FRACTION;
        page_width = page_height / aspect_ratio;
        flipbook_width = page_width * pages_across;
    }

    let origin = Point::new(
        (window.width - flipbook_width) / 2.0,
        (window.height - page_height - reserved) / 2.0,
    );

    ViewportMetrics {
        page_width,
        page_height,
        flipbook_width,
        origin,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{LayoutInputs, Orientation, solve};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn orientation_from_window() {
        assert_eq!(Orientation::of(Size::new(1000.0, 600.0)), Orientation::Landscape);
        assert_eq!(Orientation::of(Size::new(600.0, 1000.0)), Orientation::Portrait);
        // Square counts as landscape.
        assert_eq!(Orientation::of(Size::new(500.0, 500.0)), Orientation::Landscape);
    }

    #[test]
    fn tall_pages_fall_back_to_height_first() {
        // 1000x600 window, 1.4 aspect, 80 px bar: width-first gives a
        // 950-wide flipbook with 665-tall pages, which exceeds 90% of the
        // 520 px left above the bar, so the height cap wins.
        let m = solve(LayoutInputs {
            window: Size::new(1000.0, 600.0),
            aspect_ratio: 1.4,
            bar_height: 80.0,
            bar_offset_fraction: 0.0,
        });
        assert!(close(m.page_height, 520.0 * 0.85));
        assert!(close(m.page_width, 442.0 / 1.4));
        assert!(close(m.flipbook_width, 2.0 * 442.0 / 1.4));
        assert!(close(m.origin.y, (600.0 - 442.0 - 80.0) / 2.0));
    }

    #[test]
    fn flat_pages_keep_the_width_first_result() {
        // Same window, much flatter pages: 0.4 aspect gives 190-tall pages,
        // well under the 468 px check.
        let m = solve(LayoutInputs {
            window: Size::new(1000.0, 600.0),
            aspect_ratio: 0.4,
            bar_height: 80.0,
            bar_offset_fraction: 0.0,
        });
        assert!(close(m.flipbook_width, 950.0));
        assert!(close(m.page_width, 475.0));
        assert!(close(m.page_height, 190.0));
        assert!(close(m.origin.x, 25.0));
    }

    #[test]
    fn portrait_uses_one_page_across() {
        let m = solve(LayoutInputs {
            window: Size::new(600.0, 1000.0),
            aspect_ratio: 1.4,
            bar_height: 80.0,
            bar_offset_fraction: 0.0,
        });
        assert!(close(m.flipbook_width, 570.0));
        assert!(close(m.page_width, 570.0));
        assert!(close(m.page_height, 570.0 * 1.4));
    }

    #[test]
    fn portrait_fallback_rederives_a_single_page_width() {
        // Aspect 2.0 forces the height cap; the flipbook width must match
        // one page, not two.
        let m = solve(LayoutInputs {
            window: Size::new(600.0, 1000.0),
            aspect_ratio: 2.0,
            bar_height: 80.0,
            bar_offset_fraction: 0.0,
        });
        let available = 1000.0 - 80.0;
        assert!(close(m.page_height, available * 0.85));
        assert!(close(m.flipbook_width, m.page_width));
    }

    #[test]
    fn bar_offset_fraction_reserves_extra_height() {
        let with_offset = solve(LayoutInputs {
            window: Size::new(1000.0, 600.0),
            aspect_ratio: 1.4,
            bar_height: 80.0,
            bar_offset_fraction: 0.05,
        });
        let without = solve(LayoutInputs {
            window: Size::new(1000.0, 600.0),
            aspect_ratio: 1.4,
            bar_height: 80.0,
            bar_offset_fraction: 0.0,
        });
        assert!(with_offset.page_height < without.page_height);
    }
}
