//! Menu configuration.
//!
//! ## Usage
//!
//! Start from [`MenuOptions::default`] and override what differs:
//!
//! ```
//! use paging_menu::{DisplayMode, IndicatorKind, MenuOptions, Px, ScrollPolicy, WidthMode};
//!
//! let options = MenuOptions::default()
//!     .display_mode(DisplayMode::Standard {
//!         width_mode: WidthMode::Flexible,
//!         center_selected_item: true,
//!         scroll_policy: ScrollPolicy::ScrollEnabledAndBounces,
//!     })
//!     .indicator(IndicatorKind::round_rect(Px(8)))
//!     .menu_height(Px(44));
//!
//! assert!(options.validate().is_ok());
//! ```
use std::time::Duration;

use derive_setters::Setters;

use crate::{MenuError, color::Color, content::Font, content::ImageRef, px::Px};

/// Default values for [`MenuOptions`].
pub struct MenuDefaults;

impl MenuDefaults {
    /// Default menu height.
    pub const MENU_HEIGHT: Px = Px(50);
    /// Default horizontal margin on each side of a text item.
    pub const ITEM_MARGIN: Px = Px(20);
    /// Default fixed item width.
    pub const FIXED_ITEM_WIDTH: Px = Px(100);
    /// Default underline height.
    pub const UNDERLINE_HEIGHT: Px = Px(3);
    /// Default round-rect corner radius.
    pub const ROUND_RECT_RADIUS: Px = Px(11);
    /// Default round-rect vertical padding.
    pub const ROUND_RECT_VERTICAL_PADDING: Px = Px(8);
    /// Default transition duration.
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);
    /// Default number of logical cycles in the infinite window.
    pub const REPEAT_FACTOR: usize = 3;
    /// Item counts at or below this value never scroll proportionally.
    pub const MINIMUM_SUPPORTED_COUNT: usize = 1;
    /// Default text size.
    pub const FONT_SIZE: f32 = 16.0;

    /// Default selected text color.
    pub fn selected_text_color() -> Color {
        Color::BLACK
    }

    /// Default indicator color.
    pub fn indicator_color() -> Color {
        Color::from_rgb_u8(0, 122, 255)
    }
}

/// How a text item's width is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthMode {
    /// Measured title width plus the item margin on each side.
    #[default]
    Flexible,
    /// A fixed width that already includes any margin.
    Fixed(Px),
}

/// How the host scroll view reacts to user gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPolicy {
    /// Free scrolling without edge bounce.
    ScrollEnabled,
    /// Free scrolling with edge bounce.
    ScrollEnabledAndBounces,
    /// The menu only moves when the page changes.
    #[default]
    PagingEnabled,
}

impl ScrollPolicy {
    /// Whether user scrolling is enabled.
    pub fn scroll_enabled(self) -> bool {
        match self {
            Self::ScrollEnabled | Self::ScrollEnabledAndBounces => true,
            Self::PagingEnabled => false,
        }
    }

    /// Whether the scroll view bounces at its edges.
    pub fn bounces(self) -> bool {
        match self {
            Self::ScrollEnabledAndBounces => true,
            Self::ScrollEnabled | Self::PagingEnabled => false,
        }
    }
}

/// Layout strategy of the menu row. Exactly one is active per menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Items laid out once, left to right.
    Standard {
        /// Text item width policy.
        width_mode: WidthMode,
        /// Keep the selected item centered in the viewport.
        center_selected_item: bool,
        /// Gesture behavior.
        scroll_policy: ScrollPolicy,
    },
    /// Items share the container width equally, like a segmented control.
    SegmentedControl,
    /// Items repeat in a window that is recentered on every page change.
    Infinite {
        /// Text item width policy.
        width_mode: WidthMode,
        /// Gesture behavior.
        scroll_policy: ScrollPolicy,
    },
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Standard {
            width_mode: WidthMode::Fixed(MenuDefaults::FIXED_ITEM_WIDTH),
            center_selected_item: false,
            scroll_policy: ScrollPolicy::default(),
        }
    }
}

impl DisplayMode {
    /// `true` for [`DisplayMode::Infinite`].
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite { .. })
    }

    /// `true` when the selected item is kept centered.
    pub fn centers_selected_item(&self) -> bool {
        match self {
            Self::Standard {
                center_selected_item,
                ..
            } => *center_selected_item,
            Self::SegmentedControl => false,
            Self::Infinite { .. } => true,
        }
    }

    /// Whether user scrolling is enabled for the menu row.
    pub fn scroll_enabled(&self) -> bool {
        match self {
            Self::Standard { scroll_policy, .. } | Self::Infinite { scroll_policy, .. } => {
                scroll_policy.scroll_enabled()
            }
            Self::SegmentedControl => false,
        }
    }

    /// Whether the menu row bounces at its edges.
    pub fn bounces(&self) -> bool {
        match self {
            Self::Standard { scroll_policy, .. } | Self::Infinite { scroll_policy, .. } => {
                scroll_policy.bounces()
            }
            Self::SegmentedControl => false,
        }
    }

    /// Horizontal margin applied on each side of flexible text items.
    ///
    /// Segments fill their share of the container exactly, so they get none.
    pub fn horizontal_margin(&self, item_margin: Px) -> Px {
        match self {
            Self::SegmentedControl => Px::ZERO,
            Self::Standard { .. } | Self::Infinite { .. } => item_margin,
        }
    }
}

/// Visual used to highlight the selected item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorKind {
    /// A bar along the bottom of the selected item.
    Underline {
        /// Bar thickness.
        height: Px,
        /// Bar color.
        color: Color,
        /// Inset from each side of the item.
        horizontal_padding: Px,
        /// Gap between the bar and the bottom of the menu.
        vertical_padding: Px,
    },
    /// A rounded rectangle behind the selected item.
    RoundRect {
        /// Corner radius.
        radius: Px,
        /// Inset from each side of the item.
        horizontal_padding: Px,
        /// Inset from the top and bottom of the menu.
        vertical_padding: Px,
        /// Fill color.
        color: Color,
    },
    /// No indicator.
    None,
}

impl Default for IndicatorKind {
    fn default() -> Self {
        Self::Underline {
            height: MenuDefaults::UNDERLINE_HEIGHT,
            color: MenuDefaults::indicator_color(),
            horizontal_padding: Px::ZERO,
            vertical_padding: Px::ZERO,
        }
    }
}

impl IndicatorKind {
    /// A round rect with default radius and padding and the given horizontal
    /// padding.
    pub fn round_rect(horizontal_padding: Px) -> Self {
        Self::RoundRect {
            radius: MenuDefaults::ROUND_RECT_RADIUS,
            horizontal_padding,
            vertical_padding: MenuDefaults::ROUND_RECT_VERTICAL_PADDING,
            color: MenuDefaults::indicator_color().with_alpha(0.2),
        }
    }

    /// `true` for [`IndicatorKind::RoundRect`].
    pub fn is_round_rect(&self) -> bool {
        matches!(self, Self::RoundRect { .. })
    }

    /// Horizontal and vertical padding, `None` for [`IndicatorKind::None`].
    pub fn padding(&self) -> Option<(Px, Px)> {
        match *self {
            Self::Underline {
                horizontal_padding,
                vertical_padding,
                ..
            }
            | Self::RoundRect {
                horizontal_padding,
                vertical_padding,
                ..
            } => Some((horizontal_padding, vertical_padding)),
            Self::None => None,
        }
    }

    /// Vertical space the indicator occupies, padding included.
    pub fn vertical_extent(&self) -> Px {
        match *self {
            Self::Underline {
                height,
                vertical_padding,
                ..
            } => height + vertical_padding,
            Self::RoundRect {
                vertical_padding, ..
            } => vertical_padding * 2,
            Self::None => Px::ZERO,
        }
    }
}

/// Scroll deceleration hint passed through to the host scroll view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecelerationRate {
    /// Platform default deceleration.
    Normal,
    /// Quick stop, the usual choice for tab strips.
    #[default]
    Fast,
}

/// Configuration for a [`MenuControl`](crate::MenuControl).
///
/// Required in full at construction; nothing is filled in lazily later.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuOptions {
    /// Layout strategy.
    pub display_mode: DisplayMode,
    /// Selection indicator.
    pub indicator: IndicatorKind,
    /// Item background when unselected.
    pub background_color: Color,
    /// Item background when selected.
    pub selected_background_color: Color,
    /// Title color when unselected.
    pub text_color: Color,
    /// Title color when selected.
    pub selected_text_color: Color,
    /// Title font when unselected.
    pub font: Font,
    /// Title font when selected.
    pub selected_font: Font,
    /// Height of the menu row.
    pub menu_height: Px,
    /// Horizontal margin on each side of flexible text items.
    pub item_margin: Px,
    /// Divider drawn after every item except the last.
    #[setters(strip_option)]
    pub divider: Option<ImageRef>,
    /// Length of an animated page transition.
    pub animation_duration: Duration,
    /// Logical cycles in the infinite window. Must be odd and at least 3.
    pub repeat_factor: usize,
    /// Item counts at or below this value never scroll proportionally and get
    /// no centering insets.
    pub minimum_supported_count: usize,
    /// Deceleration hint for the host scroll view.
    pub deceleration_rate: DecelerationRate,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            indicator: IndicatorKind::default(),
            background_color: Color::WHITE,
            selected_background_color: Color::WHITE,
            text_color: Color::LIGHT_GRAY,
            selected_text_color: MenuDefaults::selected_text_color(),
            font: Font::system(MenuDefaults::FONT_SIZE),
            selected_font: Font::system(MenuDefaults::FONT_SIZE),
            menu_height: MenuDefaults::MENU_HEIGHT,
            item_margin: MenuDefaults::ITEM_MARGIN,
            divider: None,
            animation_duration: MenuDefaults::ANIMATION_DURATION,
            repeat_factor: MenuDefaults::REPEAT_FACTOR,
            minimum_supported_count: MenuDefaults::MINIMUM_SUPPORTED_COUNT,
            deceleration_rate: DecelerationRate::default(),
        }
    }
}

impl MenuOptions {
    /// Checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// - [`MenuError::InvalidRepeatFactor`] when infinite mode is selected with
    ///   an even repeat factor or one below 3.
    /// - [`MenuError::NegativeIndicatorPadding`] when an indicator padding is
    ///   below zero.
    /// - [`MenuError::IndicatorDoesNotFit`] when the indicator is taller than
    ///   the menu.
    pub fn validate(&self) -> Result<(), MenuError> {
        if self.display_mode.is_infinite()
            && (self.repeat_factor < 3 || self.repeat_factor % 2 == 0)
        {
            return Err(MenuError::InvalidRepeatFactor(self.repeat_factor));
        }

        if let Some((horizontal, vertical)) = self.indicator.padding() {
            let padding = horizontal.min(vertical);
            if padding < Px::ZERO {
                return Err(MenuError::NegativeIndicatorPadding(padding.raw()));
            }
        }

        let required = self.indicator.vertical_extent();
        if required > self.menu_height {
            return Err(MenuError::IndicatorDoesNotFit {
                menu_height: self.menu_height.raw(),
                required: required.raw(),
            });
        }

        Ok(())
    }

    /// Repeat factor actually applied: the configured one in infinite mode,
    /// 1 otherwise.
    pub fn effective_repeat_factor(&self) -> usize {
        match self.display_mode {
            DisplayMode::Infinite { .. } => self.repeat_factor,
            DisplayMode::Standard { .. } | DisplayMode::SegmentedControl => 1,
        }
    }

    /// Font for an item in the given selection state.
    pub fn font_for(&self, selected: bool) -> &Font {
        if selected {
            &self.selected_font
        } else {
            &self.font
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_flags_follow_policy() {
        let standard = DisplayMode::Standard {
            width_mode: WidthMode::Flexible,
            center_selected_item: false,
            scroll_policy: ScrollPolicy::ScrollEnabledAndBounces,
        };
        assert!(standard.scroll_enabled());
        assert!(standard.bounces());

        let infinite = DisplayMode::Infinite {
            width_mode: WidthMode::Flexible,
            scroll_policy: ScrollPolicy::ScrollEnabled,
        };
        assert!(infinite.scroll_enabled());
        assert!(!infinite.bounces());

        assert!(!DisplayMode::SegmentedControl.scroll_enabled());
        assert!(!DisplayMode::SegmentedControl.bounces());
        assert!(!DisplayMode::default().scroll_enabled());
    }

    #[test]
    fn centering_per_mode() {
        assert!(!DisplayMode::default().centers_selected_item());
        assert!(!DisplayMode::SegmentedControl.centers_selected_item());
        assert!(
            DisplayMode::Infinite {
                width_mode: WidthMode::Flexible,
                scroll_policy: ScrollPolicy::PagingEnabled,
            }
            .centers_selected_item()
        );
    }

    #[test]
    fn segmented_items_have_no_margin() {
        assert_eq!(DisplayMode::SegmentedControl.horizontal_margin(Px(20)), Px::ZERO);
        assert_eq!(DisplayMode::default().horizontal_margin(Px(20)), Px(20));
    }

    #[test]
    fn repeat_factor_must_be_odd_and_at_least_three() {
        let infinite = MenuOptions::default().display_mode(DisplayMode::Infinite {
            width_mode: WidthMode::Flexible,
            scroll_policy: ScrollPolicy::ScrollEnabled,
        });

        assert_eq!(infinite.clone().validate(), Ok(()));
        assert_eq!(
            infinite.clone().repeat_factor(4).validate(),
            Err(MenuError::InvalidRepeatFactor(4))
        );
        assert_eq!(
            infinite.repeat_factor(1).validate(),
            Err(MenuError::InvalidRepeatFactor(1))
        );
        // Ignored outside infinite mode.
        assert_eq!(MenuOptions::default().repeat_factor(2).validate(), Ok(()));
        assert_eq!(MenuOptions::default().effective_repeat_factor(), 1);
    }

    #[test]
    fn indicator_must_fit_menu_height() {
        let options = MenuOptions::default()
            .menu_height(Px(10))
            .indicator(IndicatorKind::RoundRect {
                radius: Px(4),
                horizontal_padding: Px::ZERO,
                vertical_padding: Px(6),
                color: Color::BLACK,
            });
        assert_eq!(
            options.validate(),
            Err(MenuError::IndicatorDoesNotFit {
                menu_height: 10,
                required: 12,
            })
        );
        assert_eq!(options.indicator(IndicatorKind::None).validate(), Ok(()));
    }

    #[test]
    fn indicator_padding_must_not_be_negative() {
        let underline = MenuOptions::default().indicator(IndicatorKind::Underline {
            height: Px(3),
            color: Color::BLACK,
            horizontal_padding: Px(-5),
            vertical_padding: Px::ZERO,
        });
        assert_eq!(
            underline.validate(),
            Err(MenuError::NegativeIndicatorPadding(-5))
        );

        let round_rect = MenuOptions::default().indicator(IndicatorKind::RoundRect {
            radius: Px(4),
            horizontal_padding: Px(2),
            vertical_padding: Px(-1),
            color: Color::BLACK,
        });
        assert_eq!(
            round_rect.validate(),
            Err(MenuError::NegativeIndicatorPadding(-1))
        );
        assert_eq!(IndicatorKind::None.padding(), None);
    }

    #[test]
    fn fonts_follow_selection() {
        let options = MenuOptions::default().selected_font(Font::system_bold(16.0));
        assert_eq!(options.font_for(true).weight, Font::BOLD);
        assert_eq!(options.font_for(false).weight, Font::REGULAR);
    }
}
