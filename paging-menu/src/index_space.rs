//! Logical pages, display indices and display slots.
//!
//! Three index domains are in play:
//!
//! - **page** (logical index): `0..item_count`, the stable identity of an item.
//! - **display index**: `0..display_count`, one per item copy. In infinite mode
//!   each page exists `repeat_factor` times, copy `c` of page `p` has display
//!   index `c * item_count + p`. Otherwise display index == page.
//! - **slot**: position in the arranged row, left to right.
//!
//! In infinite mode the row is a window over the display indices centered on
//! the *anchor*: slot `display_count / 2` always shows display index
//! `anchor`. Committing a page change selects the copy of the new page that is
//! closest to the center of the current window but leaves the anchor alone;
//! [`IndexSpace::recenter`] catches the anchor up once the transition has
//! settled.

use crate::MenuError;

/// Index bookkeeping for one menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpace {
    item_count: usize,
    repeat_factor: usize,
    current_page: usize,
    selected: usize,
    anchor: usize,
}

impl IndexSpace {
    /// Creates an index space on page 0.
    ///
    /// `repeat_factor` is 1 for non-wrapping menus.
    ///
    /// # Panics
    ///
    /// Panics if `item_count` or `repeat_factor` is zero.
    pub fn new(item_count: usize, repeat_factor: usize) -> Self {
        assert!(item_count >= 1, "a menu needs at least one item");
        assert!(repeat_factor >= 1, "repeat factor must be at least 1");
        Self {
            item_count,
            repeat_factor,
            current_page: 0,
            selected: 0,
            anchor: 0,
        }
    }

    /// Number of logical items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of logical cycles in the window.
    pub fn repeat_factor(&self) -> usize {
        self.repeat_factor
    }

    /// Number of display indices (item copies).
    pub fn display_count(&self) -> usize {
        self.item_count * self.repeat_factor
    }

    /// `true` when the row wraps around (infinite mode).
    pub fn is_wrapping(&self) -> bool {
        self.repeat_factor > 1
    }

    /// The selected page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Display index the window is currently centered on.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// The page before the current one, wrapping to the last page.
    pub fn previous_page(&self) -> usize {
        (self.current_page + self.item_count - 1) % self.item_count
    }

    /// The page after the current one, wrapping to the first page.
    pub fn next_page(&self) -> usize {
        (self.current_page + 1) % self.item_count
    }

    /// Selects `page` without moving the window.
    ///
    /// # Errors
    ///
    /// [`MenuError::IndexOutOfRange`] if `page >= item_count`.
    pub fn set_current_page(&mut self, page: usize) -> Result<(), MenuError> {
        if page >= self.item_count {
            return Err(MenuError::IndexOutOfRange {
                page,
                item_count: self.item_count,
            });
        }
        self.current_page = page;
        self.selected = self.nearest_copy(page);
        Ok(())
    }

    /// Recenters the window on the selected item.
    ///
    /// Returns `true` if the window order changed.
    pub fn recenter(&mut self) -> bool {
        let moved = self.is_wrapping() && self.anchor != self.selected;
        self.anchor = self.selected;
        moved
    }

    /// Slot that sits in the middle of the window.
    pub fn center_slot(&self) -> usize {
        if self.is_wrapping() {
            self.display_count() / 2
        } else {
            self.current_page
        }
    }

    /// Display index shown at `slot`.
    ///
    /// Slots beyond the window wrap around.
    pub fn display_index_for(&self, slot: usize) -> usize {
        if !self.is_wrapping() {
            return slot % self.item_count;
        }
        let count = self.display_count();
        (self.anchor + count - count / 2 + slot % count) % count
    }

    /// Page shown at `slot`.
    pub fn logical_index_for(&self, slot: usize) -> usize {
        self.page_of(self.display_index_for(slot))
    }

    /// Slot that shows `display_index`.
    pub fn slot_for_display_index(&self, display_index: usize) -> usize {
        if !self.is_wrapping() {
            return display_index % self.item_count;
        }
        let count = self.display_count();
        (display_index % count + count / 2 + count - self.anchor) % count
    }

    /// Page of a display index.
    pub fn page_of(&self, display_index: usize) -> usize {
        display_index % self.item_count
    }

    /// Display index of the item that represents the current page.
    ///
    /// Sits in the center slot once the window is recentered.
    pub fn selected_display_index(&self) -> usize {
        self.selected
    }

    /// Copy of `page` closest to the center of the current window, so that a
    /// wrap-around move scrolls to the adjacent copy instead of across the
    /// whole row.
    fn nearest_copy(&self, page: usize) -> usize {
        if !self.is_wrapping() {
            return page;
        }
        let center = self.center_slot();
        (0..self.repeat_factor)
            .map(|copy| copy * self.item_count + page)
            .min_by_key(|&display_index| {
                self.slot_for_display_index(display_index).abs_diff(center)
            })
            .unwrap_or(page)
    }

    /// Display indices in slot order.
    pub fn window(&self) -> Vec<usize> {
        (0..self.display_count())
            .map(|slot| self.display_index_for(slot))
            .collect()
    }
}
