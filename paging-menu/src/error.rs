//! Error types.
use thiserror::Error;

/// Errors reported by the menu engine.
///
/// Construction with zero items is not represented here: it is a caller bug
/// and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A page index outside `0..item_count` was requested. The engine never
    /// clamps.
    #[error("page {page} is out of range for a menu with {item_count} items")]
    IndexOutOfRange {
        /// The rejected page.
        page: usize,
        /// Number of logical items in the menu.
        item_count: usize,
    },
    /// Infinite mode needs an odd repeat factor of at least 3 so that a
    /// centered window exists.
    #[error("infinite mode needs an odd repeat factor of at least 3, got {0}")]
    InvalidRepeatFactor(usize),
    /// An indicator padding is below zero.
    #[error("indicator padding must not be negative, got {0}")]
    NegativeIndicatorPadding(i32),
    /// The menu height cannot hold the configured indicator.
    #[error("menu height {menu_height} is smaller than the indicator extent {required}")]
    IndicatorDoesNotFit {
        /// Configured menu height in pixels.
        menu_height: i32,
        /// Height the indicator needs, padding included.
        required: i32,
    },
}
