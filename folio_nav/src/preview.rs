// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use smallvec::SmallVec;

use crate::capability::DisplayMode;

/// The two-page group an interior page belongs to in a double-page spread.
///
/// Pages are grouped `{0,1}, {2,3}, {4,5}, ...` so that `page1` is always
/// even and faces `page2 = page1 + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageGroup {
    /// 1-based index of the group.
    pub index: u32,
    /// The even (left) page of the group.
    pub page1: u32,
    /// The odd (right) page of the group.
    pub page2: u32,
}

/// Computes the two-page group containing `page`.
#[must_use]
pub fn page_group(page: u32) -> PageGroup {
    let index = (page - page % 2) / 2 + 1;
    let page1 = 2 * (index - 1);
    PageGroup {
        index,
        page1,
        page2: page1 + 1,
    }
}

/// The thumbnail preview shown over the slider while dragging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    /// The page(s) to thumbnail, length 1 or 2.
    pub pages: SmallVec<[u32; 2]>,
    /// Short label under the thumbnails: `"5"` or `"6-7"`.
    pub label: String,
}

/// Selects the preview page(s) for a candidate page.
///
/// Single-page display, the first page, and the last page preview alone;
/// every other page previews together with the other half of its two-page
/// group.
#[must_use]
pub fn preview_pages(page: u32, total_pages: u32, mode: DisplayMode) -> Preview {
    let single = mode == DisplayMode::Single || page == 1 || page == total_pages;
    if single {
        Preview {
            pages: SmallVec::from_slice(&[page]),
            label: format!("{page}"),
        }
    } else {
        let group = page_group(page);
        Preview {
            pages: SmallVec::from_slice(&[group.page1, group.page2]),
            label: format!("{}-{}", group.page1, group.page2),
        }
    }
}

/// Formats the page indicator text shown next to the slider.
///
/// Double-page mode shows the group for interior pages (`"6 - 7 / 20"`) and
/// the bare page for the boundary ones; single-page mode always shows
/// `"page / total"`.
#[must_use]
pub fn page_label(page: u32, total_pages: u32, mode: DisplayMode) -> String {
    if mode == DisplayMode::Double && page != 1 && page != total_pages {
        let group = page_group(page);
        format!("{} - {} / {total_pages}", group.page1, group.page2)
    } else {
        format!("{page} / {total_pages}")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{DisplayMode, page_group, page_label, preview_pages};

    #[test]
    fn groups_pair_even_with_following_odd() {
        let g = page_group(6);
        assert_eq!((g.index, g.page1, g.page2), (4, 6, 7));
        let g = page_group(5);
        assert_eq!((g.index, g.page1, g.page2), (3, 4, 5));
        let g = page_group(2);
        assert_eq!((g.index, g.page1, g.page2), (2, 2, 3));
    }

    #[test]
    fn interior_double_page_previews_its_group() {
        let p = preview_pages(5, 20, DisplayMode::Double);
        assert_eq!(p.pages.as_slice(), [4, 5]);
        assert_eq!(p.label, "4-5");

        let p = preview_pages(6, 20, DisplayMode::Double);
        assert_eq!(p.pages.as_slice(), [6, 7]);
        assert_eq!(p.label, "6-7");
    }

    #[test]
    fn boundary_pages_preview_alone() {
        for page in [1, 20] {
            let p = preview_pages(page, 20, DisplayMode::Double);
            assert_eq!(p.pages.as_slice(), [page]);
            assert_eq!(p.label, page.to_string());
        }
    }

    #[test]
    fn single_display_always_previews_alone() {
        let p = preview_pages(6, 20, DisplayMode::Single);
        assert_eq!(p.pages.as_slice(), [6]);
        assert_eq!(p.label, "6");
    }

    #[test]
    fn labels_follow_display_mode() {
        assert_eq!(page_label(6, 20, DisplayMode::Double), "6 - 7 / 20");
        assert_eq!(page_label(1, 20, DisplayMode::Double), "1 / 20");
        assert_eq!(page_label(20, 20, DisplayMode::Double), "20 / 20");
        assert_eq!(page_label(6, 20, DisplayMode::Single), "6 / 20");
    }
}
