//! Menu items and their resolved appearance.
use crate::{
    color::Color,
    content::{ContentMetrics, Font, MenuContent},
    options::MenuOptions,
    px::PxSize,
    size_policy::SizePolicy,
};

/// One selectable entry in the menu row.
///
/// In infinite mode a page is represented by several items (one per repeated
/// copy); they share `logical_index` and differ in `display_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    logical_index: usize,
    display_index: usize,
    content: MenuContent,
    size: PxSize,
    selected: bool,
}

impl MenuItem {
    pub(crate) fn new(logical_index: usize, display_index: usize, content: MenuContent) -> Self {
        Self {
            logical_index,
            display_index,
            content,
            size: PxSize::ZERO,
            selected: false,
        }
    }

    /// The page this item stands for.
    pub fn logical_index(&self) -> usize {
        self.logical_index
    }

    /// Identity among all item copies.
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    /// What the item shows.
    pub fn content(&self) -> &MenuContent {
        &self.content
    }

    /// Size from the last measurement.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Whether this item is the selected one.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[cfg(test)]
    pub(crate) fn with_size(mut self, size: PxSize) -> Self {
        self.size = size;
        self
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Re-measures with the font that matches the current selection state.
    pub(crate) fn remeasure(
        &mut self,
        policy: &SizePolicy,
        options: &MenuOptions,
        metrics: &impl ContentMetrics,
    ) {
        self.size = policy.measure(&self.content, options.font_for(self.selected), metrics);
    }

    /// How the host should draw this item right now.
    pub fn appearance(&self, options: &MenuOptions) -> ItemAppearance {
        // The round rect supplies all visible fill, items stay transparent.
        let background = if options.indicator.is_round_rect() {
            Color::TRANSPARENT
        } else if self.selected {
            options.selected_background_color
        } else {
            options.background_color
        };

        let (text_color, font) = match self.content {
            MenuContent::Text(_) => {
                let color = if self.selected {
                    options.selected_text_color
                } else {
                    options.text_color
                };
                (Some(color), Some(options.font_for(self.selected).clone()))
            }
            MenuContent::Image(_) => (None, None),
        };

        ItemAppearance {
            background,
            text_color,
            font,
            z_index: if self.selected { 0 } else { -1 },
        }
    }
}

/// Resolved drawing attributes of a [`MenuItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAppearance {
    /// Fill behind the item.
    pub background: Color,
    /// Title color, `None` for image items.
    pub text_color: Option<Color>,
    /// Title font, `None` for image items.
    pub font: Option<Font>,
    /// Stacking order; the selected item is in front.
    pub z_index: i32,
}
