//! Scroll offsets and content insets for the menu row.
use crate::{
    layout::Arrangement,
    options::DisplayMode,
    px::{Px, PxRect},
};

/// Where the host scroll view should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Scroll so that the content x coordinate `0` sits this far left of
    /// the viewport edge.
    Offset(Px),
    /// Keep whatever offset the user left the row at.
    Unchanged,
}

impl ScrollTarget {
    /// The forced offset, if any.
    pub fn offset(self) -> Option<Px> {
        match self {
            Self::Offset(offset) => Some(offset),
            Self::Unchanged => None,
        }
    }
}

/// Extra scrollable space on each side of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentInsets {
    /// Space before the first item.
    pub left: Px,
    /// Space after the last item.
    pub right: Px,
}

impl ContentInsets {
    /// No insets.
    pub const ZERO: Self = Self {
        left: Px::ZERO,
        right: Px::ZERO,
    };
}

/// Computes scroll offsets and insets for one display mode.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPositioner {
    display_mode: DisplayMode,
    item_count: usize,
    minimum_supported_count: usize,
}

impl ScrollPositioner {
    /// Creates a positioner for a menu with `item_count` logical items.
    pub fn new(display_mode: DisplayMode, item_count: usize, minimum_supported_count: usize) -> Self {
        Self {
            display_mode,
            item_count,
            minimum_supported_count,
        }
    }

    /// `false` when the menu is too small for the formulas that divide by
    /// `item_count - 1`.
    fn supports_scrolling(&self) -> bool {
        self.item_count > self.minimum_supported_count && self.item_count > 1
    }

    /// Offset that shows `current_page`, whose item occupies `selected_frame`.
    pub fn target_offset(
        &self,
        current_page: usize,
        selected_frame: PxRect,
        arrangement: &Arrangement,
        viewport_width: Px,
    ) -> ScrollTarget {
        match self.display_mode {
            DisplayMode::Standard {
                center_selected_item: true,
                ..
            }
            | DisplayMode::Infinite { .. } => {
                ScrollTarget::Offset(centered_offset(selected_frame, viewport_width))
            }
            DisplayMode::SegmentedControl => ScrollTarget::Unchanged,
            DisplayMode::Standard {
                center_selected_item: false,
                ..
            } => ScrollTarget::Offset(self.proportional_offset(
                current_page,
                arrangement.content_width(),
                viewport_width,
            )),
        }
    }

    /// Spreads the scrollable overflow evenly across pages: page 0 at the
    /// left edge, the last page at the right edge.
    ///
    /// Content that fits the viewport never scrolls.
    pub fn proportional_offset(
        &self,
        current_page: usize,
        content_width: Px,
        viewport_width: Px,
    ) -> Px {
        if !self.supports_scrolling() {
            return Px::ZERO;
        }
        let overflow = (content_width - viewport_width).max(Px::ZERO);
        overflow.mul_ratio(current_page, self.item_count - 1)
    }

    /// Insets that let the first and last items reach the viewport center.
    ///
    /// Only standard menus with centering need them; infinite menus always
    /// have neighbours on both sides of the selection.
    pub fn content_insets(&self, arrangement: &Arrangement, viewport_width: Px) -> ContentInsets {
        let centering = matches!(
            self.display_mode,
            DisplayMode::Standard {
                center_selected_item: true,
                ..
            }
        );
        if !centering || !self.supports_scrolling() {
            return ContentInsets::ZERO;
        }
        let (Some(first), Some(last)) = (arrangement.first(), arrangement.last()) else {
            return ContentInsets::ZERO;
        };
        let half_viewport = viewport_width / 2;
        ContentInsets {
            left: half_viewport - first.frame.width / 2,
            right: half_viewport - last.frame.width / 2,
        }
    }
}

/// Offset that puts the middle of `frame` in the middle of the viewport.
pub fn centered_offset(frame: PxRect, viewport_width: Px) -> Px {
    frame.mid_x() - viewport_width / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::MenuContent,
        item::MenuItem,
        layout::LayoutEngine,
        options::{ScrollPolicy, WidthMode},
        px::PxSize,
    };

    fn standard(center_selected_item: bool) -> DisplayMode {
        DisplayMode::Standard {
            width_mode: WidthMode::Fixed(Px(60)),
            center_selected_item,
            scroll_policy: ScrollPolicy::ScrollEnabled,
        }
    }

    fn arrangement(widths: &[i32]) -> Arrangement {
        let items: Vec<MenuItem> = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                MenuItem::new(index, index, MenuContent::text("x"))
                    .with_size(PxSize::new(Px(width), Px(20)))
            })
            .collect();
        LayoutEngine::new(Px(50), None).arrange(&items)
    }

    #[test]
    fn centering_insets() {
        let arrangement = arrangement(&[50, 120, 80]);
        let positioner = ScrollPositioner::new(standard(true), 3, 1);
        assert_eq!(
            positioner.content_insets(&arrangement, Px(300)),
            ContentInsets {
                left: Px(125),
                right: Px(110),
            }
        );
    }

    #[test]
    fn no_insets_without_centering() {
        let arrangement = arrangement(&[50, 120, 80]);
        for mode in [standard(false), DisplayMode::SegmentedControl] {
            let positioner = ScrollPositioner::new(mode, 3, 1);
            assert_eq!(
                positioner.content_insets(&arrangement, Px(300)),
                ContentInsets::ZERO
            );
        }
    }

    #[test]
    fn single_item_menu_never_scrolls() {
        let arrangement = arrangement(&[500]);
        let positioner = ScrollPositioner::new(standard(false), 1, 1);
        assert_eq!(positioner.proportional_offset(0, Px(500), Px(300)), Px::ZERO);

        let centered = ScrollPositioner::new(standard(true), 1, 1);
        assert_eq!(
            centered.content_insets(&arrangement, Px(300)),
            ContentInsets::ZERO
        );
    }

    #[test]
    fn proportional_offset_when_content_fits() {
        let arrangement = arrangement(&[60; 5]);
        let positioner = ScrollPositioner::new(standard(false), 5, 1);
        let frame = arrangement.items()[4].frame;
        assert_eq!(
            positioner.target_offset(4, frame, &arrangement, Px(300)),
            ScrollTarget::Offset(Px::ZERO)
        );
    }

    #[test]
    fn proportional_offset_spreads_overflow() {
        let positioner = ScrollPositioner::new(standard(false), 5, 1);
        let offsets: Vec<_> = (0..5)
            .map(|page| positioner.proportional_offset(page, Px(700), Px(300)))
            .collect();
        assert_eq!(offsets, vec![Px(0), Px(100), Px(200), Px(300), Px(400)]);
    }

    #[test]
    fn minimum_supported_count_disables_proportional_scroll() {
        let positioner = ScrollPositioner::new(standard(false), 3, 3);
        assert_eq!(positioner.proportional_offset(2, Px(900), Px(300)), Px::ZERO);
    }

    #[test]
    fn centered_modes_center_the_selection() {
        let arrangement = arrangement(&[100, 100, 100, 100]);
        let frame = arrangement.items()[2].frame;
        let infinite = DisplayMode::Infinite {
            width_mode: WidthMode::Flexible,
            scroll_policy: ScrollPolicy::ScrollEnabled,
        };
        for mode in [standard(true), infinite] {
            let positioner = ScrollPositioner::new(mode, 4, 1);
            assert_eq!(
                positioner.target_offset(2, frame, &arrangement, Px(300)),
                ScrollTarget::Offset(Px(100))
            );
        }
    }

    #[test]
    fn segmented_control_leaves_offset_alone() {
        let arrangement = arrangement(&[75, 75, 75, 75]);
        let positioner = ScrollPositioner::new(DisplayMode::SegmentedControl, 4, 1);
        let target = positioner.target_offset(3, arrangement.items()[3].frame, &arrangement, Px(300));
        assert_eq!(target, ScrollTarget::Unchanged);
        assert_eq!(target.offset(), None);
    }
}
