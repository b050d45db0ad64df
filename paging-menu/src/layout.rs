//! Linear arrangement of menu items.
//!
//! Items are placed edge to edge in slot order starting at x = 0. Every item
//! spans the full menu height; the content extent is the sum of the widths,
//! saturating at [`Px::MAX`].
use crate::{
    item::MenuItem,
    px::{Px, PxRect, PxSize},
};

/// Geometry of one slot in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangedItem {
    /// Position in the row.
    pub slot: usize,
    /// Identity of the item placed here.
    pub display_index: usize,
    /// Page of the item placed here.
    pub logical_index: usize,
    /// Item frame in content coordinates.
    pub frame: PxRect,
    /// Divider frame at the trailing edge, if dividers are enabled and this is
    /// not the last slot.
    pub divider: Option<PxRect>,
}

/// The laid-out row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arrangement {
    items: Vec<ArrangedItem>,
    content_size: PxSize,
}

impl Arrangement {
    /// Slots in row order.
    pub fn items(&self) -> &[ArrangedItem] {
        &self.items
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if nothing is arranged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total width × menu height.
    pub fn content_size(&self) -> PxSize {
        self.content_size
    }

    /// Total width of all items.
    pub fn content_width(&self) -> Px {
        self.content_size.width
    }

    /// Leftmost slot.
    pub fn first(&self) -> Option<&ArrangedItem> {
        self.items.first()
    }

    /// Rightmost slot.
    pub fn last(&self) -> Option<&ArrangedItem> {
        self.items.last()
    }

    /// Slot holding the item with `display_index`.
    pub fn find(&self, display_index: usize) -> Option<&ArrangedItem> {
        self.items
            .iter()
            .find(|entry| entry.display_index == display_index)
    }

    /// Offsets of every slot, in row order.
    pub fn offsets(&self) -> impl Iterator<Item = Px> + '_ {
        self.items.iter().map(|entry| entry.frame.x)
    }

    /// Number of dividers placed.
    pub fn divider_count(&self) -> usize {
        self.items.iter().filter(|entry| entry.divider.is_some()).count()
    }
}

/// Places items in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    menu_height: Px,
    divider: Option<PxSize>,
}

impl LayoutEngine {
    /// Downward nudge applied to vertically centered dividers.
    pub const DIVIDER_NUDGE: Px = Px(1);

    /// Creates an engine for a row `menu_height` tall. `divider` is the
    /// divider image size, if dividers are enabled.
    pub fn new(menu_height: Px, divider: Option<PxSize>) -> Self {
        Self {
            menu_height,
            divider,
        }
    }

    /// Arranges `ordered` items left to right.
    ///
    /// Pure function of the item widths and order: arranging the same
    /// sequence twice yields identical geometry.
    pub fn arrange<'a>(&self, ordered: impl IntoIterator<Item = &'a MenuItem>) -> Arrangement {
        let mut items: Vec<ArrangedItem> = Vec::new();
        let mut left = Px::ZERO;
        for (slot, item) in ordered.into_iter().enumerate() {
            let width = item.size().width;
            items.push(ArrangedItem {
                slot,
                display_index: item.display_index(),
                logical_index: item.logical_index(),
                frame: PxRect::new(left, Px::ZERO, width, self.menu_height),
                divider: None,
            });
            left = left.saturating_add(width);
        }

        if let Some(divider) = self.divider {
            let last = items.len().saturating_sub(1);
            for entry in items.iter_mut().take(last) {
                entry.divider = Some(self.divider_frame(&entry.frame, divider));
            }
        }

        Arrangement {
            items,
            content_size: PxSize::new(left, self.menu_height),
        }
    }

    fn divider_frame(&self, item: &PxRect, divider: PxSize) -> PxRect {
        PxRect::new(
            item.max_x() - divider.width,
            (self.menu_height - divider.height) / 2 + Self::DIVIDER_NUDGE,
            divider.width,
            divider.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MenuContent;

    fn items(widths: &[i32]) -> Vec<MenuItem> {
        widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                MenuItem::new(index, index, MenuContent::text("x"))
                    .with_size(PxSize::new(Px(width), Px(18)))
            })
            .collect()
    }

    #[test]
    fn offsets_are_cumulative_widths() {
        let items = items(&[50, 70, 80]);
        let arrangement = LayoutEngine::new(Px(44), None).arrange(&items);

        assert_eq!(
            arrangement.offsets().collect::<Vec<_>>(),
            vec![Px(0), Px(50), Px(120)]
        );
        assert_eq!(arrangement.content_size(), PxSize::new(Px(200), Px(44)));
        assert!(arrangement.items().iter().all(|entry| entry.frame.height == Px(44)));
        assert_eq!(arrangement.last().map(|entry| entry.frame.max_x()), Some(Px(200)));
    }

    #[test]
    fn arranging_twice_is_identical() {
        let items = items(&[61, 33, 95, 12]);
        let engine = LayoutEngine::new(Px(50), Some(PxSize::new(Px(1), Px(20))));
        assert_eq!(engine.arrange(&items), engine.arrange(&items));
    }

    #[test]
    fn order_follows_input() {
        let items = items(&[10, 20, 30]);
        let reversed: Vec<&MenuItem> = items.iter().rev().collect();
        let arrangement = LayoutEngine::new(Px(10), None).arrange(reversed);

        let order: Vec<_> = arrangement.items().iter().map(|e| e.display_index).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(arrangement.find(0).map(|e| e.frame.x), Some(Px(50)));
    }

    #[test]
    fn dividers_skip_the_last_slot() {
        let items = items(&[40, 40, 40]);
        let arrangement =
            LayoutEngine::new(Px(50), Some(PxSize::new(Px(2), Px(20)))).arrange(&items);

        assert_eq!(arrangement.divider_count(), 2);
        assert_eq!(
            arrangement.items()[0].divider,
            Some(PxRect::new(Px(38), Px(16), Px(2), Px(20)))
        );
        assert_eq!(arrangement.items()[2].divider, None);
    }

    #[test]
    fn huge_widths_saturate() {
        let items = items(&[1 << 30, 1 << 30, 1 << 30]);
        let arrangement = LayoutEngine::new(Px(50), Some(PxSize::new(Px(1), Px(20))))
            .arrange(&items);

        assert_eq!(
            arrangement.offsets().collect::<Vec<_>>(),
            vec![Px(0), Px(1 << 30), Px::MAX]
        );
        assert_eq!(arrangement.content_width(), Px::MAX);
        assert_eq!(arrangement.last().map(|entry| entry.frame.max_x()), Some(Px::MAX));
    }

    #[test]
    fn empty_input() {
        let arrangement = LayoutEngine::new(Px(50), None).arrange(std::iter::empty());
        assert!(arrangement.is_empty());
        assert_eq!(arrangement.content_width(), Px::ZERO);
    }
}
