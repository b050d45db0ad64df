//! Integer pixel units for menu geometry.
//!
//! Every length the engine produces (item widths, offsets, insets, indicator
//! frames) is expressed in whole pixels. Fractional values coming from the
//! host, such as measured text extents, are rounded at the boundary with
//! [`Px::ceil_from_f32`] or [`Px::floor_from_f32`] so that layout results are
//! deterministic.
//!
//! # Key Types
//!
//! - [`Px`] - A single pixel value. Negative values are allowed because scroll
//!   offsets and insets can go below zero.
//! - [`PxSize`] - A width/height pair.
//! - [`PxRect`] - An axis-aligned rectangle in content coordinates.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the menu content
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use paging_menu::px::{Px, PxRect, PxSize};
//!
//! let size = PxSize::new(Px::new(120), Px::new(44));
//! let frame = PxRect::new(Px::new(80), Px::ZERO, size.width, size.height);
//!
//! assert_eq!(frame.max_x(), Px::new(200));
//! assert_eq!(frame.mid_x(), Px::new(140));
//! ```

/// A pixel length or coordinate.
///
/// # Examples
///
/// ```
/// use paging_menu::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-40);
///
/// assert_eq!(a + b, Px::new(60));
/// assert_eq!(a / 3, Px::new(33));
/// assert_eq!(Px::new(i32::MAX).saturating_add(Px::new(1)), Px::MAX);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The largest representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an `i32`.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw `i32` value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an `f32`, truncating toward zero and saturating at
    /// the `i32` bounds. `NaN` maps to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use paging_menu::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px::new(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px::MAX);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Rounds `value` up to the next whole pixel.
    ///
    /// Used for measured text widths so that a label is never clipped.
    pub fn ceil_from_f32(value: f32) -> Self {
        Self::saturating_from_f32(value.ceil())
    }

    /// Rounds `value` down to the previous whole pixel.
    pub fn floor_from_f32(value: f32) -> Self {
        Self::saturating_from_f32(value.floor())
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Multiplies by `numerator / denominator` using 64-bit intermediates,
    /// truncating toward zero.
    ///
    /// Returns [`Px::ZERO`] when `denominator` is zero.
    pub fn mul_ratio(self, numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Px::ZERO;
        }
        let scaled = i64::from(self.0) * numerator as i64 / denominator as i64;
        Px(scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Divides evenly into `parts`, rounding down. Zero parts yield zero.
    pub fn split(self, parts: usize) -> Self {
        self.mul_ratio(1, parts)
    }

    /// Linear interpolation toward `to`, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let value = self.to_f32() + (to.to_f32() - self.to_f32()) * t;
        Px::saturating_from_f32(value.round())
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// The width in pixels
    pub width: Px,
    /// The height in pixels
    pub height: Px,
}

impl PxSize {
    /// A zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= Px::ZERO || self.height <= Px::ZERO
    }
}

/// An axis-aligned rectangle in pixels.
///
/// `x`/`y` address the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// Creates a new rectangle.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> Px {
        self.x
    }

    /// Right edge, saturating at [`Px::MAX`].
    pub fn max_x(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// Horizontal center, rounded toward zero.
    pub fn mid_x(&self) -> Px {
        self.x.saturating_add(self.width / 2)
    }

    /// Bottom edge, saturating at [`Px::MAX`].
    pub fn max_y(&self) -> Px {
        self.y.saturating_add(self.height)
    }

    /// The rectangle's size.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// Interpolates every edge toward `to`.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            width: self.width.lerp(to.width, t),
            height: self.height.lerp(to.height, t),
        }
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}
