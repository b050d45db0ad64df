//! Selection indicator geometry.
//!
//! The indicator tracks the frame of the selected item. An underline hugs the
//! bottom of the menu, a round rect fills the item between its vertical
//! paddings and sits behind the content.
use crate::{
    color::Color,
    options::IndicatorKind,
    px::{Px, PxRect},
};

/// Where and how to draw the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorGeometry {
    /// Frame in content coordinates.
    pub frame: PxRect,
    /// Corner radius, zero for an underline.
    pub corner_radius: Px,
    /// Fill color.
    pub color: Color,
}

impl IndicatorGeometry {
    /// Interpolates toward `to` for hosts that step transitions themselves.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            frame: self.frame.lerp(&to.frame, t),
            corner_radius: self.corner_radius.lerp(to.corner_radius, t),
            color: self.color.lerp(to.color, t),
        }
    }
}

/// Computes the indicator frame for a selected item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorTracker {
    kind: IndicatorKind,
    menu_height: Px,
}

impl IndicatorTracker {
    /// Creates a tracker for a menu `menu_height` tall.
    pub fn new(kind: IndicatorKind, menu_height: Px) -> Self {
        Self { kind, menu_height }
    }

    /// `false` for [`IndicatorKind::None`].
    pub fn is_active(&self) -> bool {
        !matches!(self.kind, IndicatorKind::None)
    }

    /// Indicator geometry for an item occupying `selected`.
    ///
    /// Paddings wider than the item collapse the indicator to a zero-width
    /// frame at the item's center. Negative paddings are applied as given and
    /// widen the frame; [`MenuOptions::validate`](crate::MenuOptions::validate)
    /// rejects them for a configured menu.
    pub fn geometry_for(&self, selected: PxRect) -> Option<IndicatorGeometry> {
        match self.kind {
            IndicatorKind::Underline {
                height,
                color,
                horizontal_padding,
                vertical_padding,
            } => {
                let (x, width) = padded_span(selected, horizontal_padding);
                Some(IndicatorGeometry {
                    frame: PxRect::new(
                        x,
                        self.menu_height - (height + vertical_padding),
                        width,
                        height,
                    ),
                    corner_radius: Px::ZERO,
                    color,
                })
            }
            IndicatorKind::RoundRect {
                radius,
                horizontal_padding,
                vertical_padding,
                color,
            } => {
                let (x, width) = padded_span(selected, horizontal_padding);
                Some(IndicatorGeometry {
                    frame: PxRect::new(
                        x,
                        vertical_padding,
                        width,
                        (self.menu_height - vertical_padding * 2).max(Px::ZERO),
                    ),
                    corner_radius: radius,
                    color,
                })
            }
            IndicatorKind::None => None,
        }
    }
}

/// Left edge and width of `selected` inset by `padding` on both sides.
fn padded_span(selected: PxRect, padding: Px) -> (Px, Px) {
    let inset = padding.min(selected.width / 2);
    (
        selected.min_x().saturating_add(inset),
        (selected.width - inset * 2).max(Px::ZERO),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn underline(height: i32, hpad: i32, vpad: i32) -> IndicatorKind {
        IndicatorKind::Underline {
            height: Px(height),
            color: Color::BLUE,
            horizontal_padding: Px(hpad),
            vertical_padding: Px(vpad),
        }
    }

    #[test]
    fn underline_sits_on_the_bottom_edge() {
        let tracker = IndicatorTracker::new(underline(3, 0, 0), Px(50));
        let selected = PxRect::new(Px(100), Px::ZERO, Px(80), Px(50));
        let geometry = tracker.geometry_for(selected).unwrap();

        assert_eq!(geometry.frame, PxRect::new(Px(100), Px(47), Px(80), Px(3)));
        assert_eq!(geometry.frame.max_y(), Px(50));
        assert_eq!(geometry.corner_radius, Px::ZERO);
    }

    #[test]
    fn underline_padding() {
        let tracker = IndicatorTracker::new(underline(2, 10, 4), Px(44));
        let selected = PxRect::new(Px(40), Px::ZERO, Px(60), Px(44));
        assert_eq!(
            tracker.geometry_for(selected).unwrap().frame,
            PxRect::new(Px(50), Px(38), Px(40), Px(2))
        );
    }

    #[test]
    fn round_rect_fills_between_paddings() {
        let tracker = IndicatorTracker::new(IndicatorKind::round_rect(Px(6)), Px(50));
        let selected = PxRect::new(Px(20), Px::ZERO, Px(90), Px(50));
        let geometry = tracker.geometry_for(selected).unwrap();

        assert_eq!(geometry.frame, PxRect::new(Px(26), Px(8), Px(78), Px(34)));
        assert_eq!(geometry.corner_radius, Px(11));
    }

    #[test]
    fn indicator_stays_inside_the_selected_frame() {
        let kinds = [
            underline(3, 0, 0),
            underline(4, 12, 6),
            IndicatorKind::round_rect(Px(0)),
            IndicatorKind::round_rect(Px(30)),
        ];
        for kind in kinds {
            let tracker = IndicatorTracker::new(kind, Px(50));
            for (x, width) in [(0, 40), (75, 100), (300, 24)] {
                let selected = PxRect::new(Px(x), Px::ZERO, Px(width), Px(50));
                let frame = tracker.geometry_for(selected).unwrap().frame;
                assert!(frame.min_x() >= selected.min_x(), "{kind:?} {frame:?}");
                assert!(frame.max_x() <= selected.max_x(), "{kind:?} {frame:?}");
                assert!(frame.y >= Px::ZERO && frame.max_y() <= Px(50));
                assert!(frame.width >= Px::ZERO);
            }
        }
    }

    #[test]
    fn negative_padding_widens_the_frame() {
        let tracker = IndicatorTracker::new(underline(3, -5, 0), Px(50));
        let selected = PxRect::new(Px(0), Px::ZERO, Px(100), Px(50));
        assert_eq!(
            tracker.geometry_for(selected).unwrap().frame,
            PxRect::new(Px(-5), Px(47), Px(110), Px(3))
        );
    }

    #[test]
    fn no_indicator() {
        let tracker = IndicatorTracker::new(IndicatorKind::None, Px(50));
        assert!(!tracker.is_active());
        assert_eq!(tracker.geometry_for(PxRect::new(Px(0), Px(0), Px(10), Px(50))), None);
    }

    #[test]
    fn lerp_moves_between_items() {
        let tracker = IndicatorTracker::new(underline(3, 0, 0), Px(50));
        let from = tracker
            .geometry_for(PxRect::new(Px(0), Px::ZERO, Px(100), Px(50)))
            .unwrap();
        let to = tracker
            .geometry_for(PxRect::new(Px(100), Px::ZERO, Px(60), Px(50)))
            .unwrap();
        let halfway = from.lerp(&to, 0.5);
        assert_eq!(halfway.frame, PxRect::new(Px(50), Px(47), Px(80), Px(3)));
        assert_eq!(from.lerp(&to, 1.0), to);
    }
}
