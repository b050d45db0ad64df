//! Item sizing under each display mode.
//!
//! | mode                | text width                              | image width            |
//! |---------------------|-----------------------------------------|------------------------|
//! | Standard / Infinite | `Flexible`: ceil(text) + 2 × margin     | intrinsic width        |
//! |                     | `Fixed(w)`: `w`                         |                        |
//! | SegmentedControl    | container / item count                  | container / item count |
//!
//! Heights are the floored text height, or the intrinsic image height.
use tracing::trace;

use crate::{
    content::{ContentMetrics, Font, MenuContent},
    options::{DisplayMode, WidthMode},
    px::{Px, PxSize},
};

/// Sizes menu items for one container geometry.
///
/// Built fresh for every layout pass so the container width is always the
/// current one.
#[derive(Debug, Clone, Copy)]
pub struct SizePolicy {
    display_mode: DisplayMode,
    container_width: Px,
    item_count: usize,
    horizontal_margin: Px,
}

impl SizePolicy {
    /// Creates a policy.
    ///
    /// `item_margin` is the configured margin; segmented control mode
    /// overrides it with zero.
    pub fn new(
        display_mode: DisplayMode,
        container_width: Px,
        item_count: usize,
        item_margin: Px,
    ) -> Self {
        Self {
            display_mode,
            container_width,
            item_count,
            horizontal_margin: display_mode.horizontal_margin(item_margin),
        }
    }

    /// Width of one segment: the container divided evenly, rounded down.
    pub fn segment_width(&self) -> Px {
        self.container_width.split(self.item_count)
    }

    /// Margin applied on each side of flexible text items.
    pub fn horizontal_margin(&self) -> Px {
        self.horizontal_margin
    }

    /// Computes the size of `content` drawn with `font`.
    ///
    /// Content the host cannot measure (non-finite or empty extent, zero
    /// intrinsic size) is sized `0 × 0` in every mode.
    pub fn measure(
        &self,
        content: &MenuContent,
        font: &Font,
        metrics: &impl ContentMetrics,
    ) -> PxSize {
        let size = match content {
            MenuContent::Text(title) => {
                let extent = metrics.measure_text(title, font);
                if extent.is_degenerate() {
                    return PxSize::ZERO;
                }
                let width = match self.display_mode {
                    DisplayMode::Standard { width_mode, .. }
                    | DisplayMode::Infinite { width_mode, .. } => {
                        text_width(extent.width, width_mode, self.horizontal_margin)
                    }
                    DisplayMode::SegmentedControl => self.segment_width(),
                };
                PxSize::new(width, Px::floor_from_f32(extent.height))
            }
            MenuContent::Image(image) => {
                let intrinsic = metrics.intrinsic_size(image);
                if intrinsic.is_empty() {
                    return PxSize::ZERO;
                }
                let width = match self.display_mode {
                    DisplayMode::Standard { .. } | DisplayMode::Infinite { .. } => {
                        intrinsic.width
                    }
                    DisplayMode::SegmentedControl => self.segment_width(),
                };
                PxSize::new(width, intrinsic.height)
            }
        };
        trace!(?content, ?size, "measured menu item");
        size
    }
}

/// Width of a text item under `width_mode`.
///
/// Fixed widths already include their margins. Flexible widths saturate at
/// [`Px::MAX`].
pub fn text_width(measured_width: f32, width_mode: WidthMode, horizontal_margin: Px) -> Px {
    match width_mode {
        WidthMode::Flexible => Px::ceil_from_f32(measured_width)
            .saturating_add(horizontal_margin)
            .saturating_add(horizontal_margin),
        WidthMode::Fixed(width) => width,
    }
}
