//! Menu item content and the host services that measure it.
//!
//! The engine never rasterizes text or decodes images. It asks the host,
//! through [`ContentMetrics`], for text extents and intrinsic image sizes and
//! turns those into whole-pixel item sizes.

use crate::px::{Px, PxSize};

/// A font description handed back to the host's text measurer.
///
/// The engine only compares fonts and passes them through; interpretation of
/// `family` and `weight` is up to the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Family name. `None` selects the host's system font.
    pub family: Option<String>,
    /// Point size.
    pub size: f32,
    /// Weight on the usual 100..=900 scale.
    pub weight: u16,
}

impl Font {
    /// Regular weight.
    pub const REGULAR: u16 = 400;
    /// Bold weight.
    pub const BOLD: u16 = 700;

    /// The host's system font at `size`, regular weight.
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: Self::REGULAR,
        }
    }

    /// The host's system font at `size`, bold weight.
    pub fn system_bold(size: f32) -> Self {
        Self {
            weight: Self::BOLD,
            ..Self::system(size)
        }
    }

    /// Replaces the family name.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

/// A reference to an image owned by the host.
///
/// The name is opaque to the engine; the host resolves it in
/// [`ContentMetrics::intrinsic_size`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Creates a new image reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The host-side name of the image.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// What a menu item displays.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuContent {
    /// A single-line title rendered with the selected or unselected font.
    Text(String),
    /// An image drawn at its intrinsic size.
    Image(ImageRef),
}

impl MenuContent {
    /// Shorthand for [`MenuContent::Text`].
    pub fn text(title: impl Into<String>) -> Self {
        Self::Text(title.into())
    }

    /// Shorthand for [`MenuContent::Image`].
    pub fn image(name: impl Into<String>) -> Self {
        Self::Image(ImageRef::new(name))
    }

    /// Returns `true` for text content.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// The rendered extent of a string, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    /// Width in fractional pixels.
    pub width: f32,
    /// Height in fractional pixels.
    pub height: f32,
}

impl TextExtent {
    /// Creates a new extent.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` when the host could not produce a usable extent: a non-finite
    /// dimension, or nothing to draw at all.
    pub fn is_degenerate(&self) -> bool {
        !self.width.is_finite()
            || !self.height.is_finite()
            || (self.width <= 0.0 && self.height <= 0.0)
    }
}

/// Measurement services provided by the host platform.
pub trait ContentMetrics {
    /// Measures `text` rendered in `font` on a single line.
    fn measure_text(&self, text: &str, font: &Font) -> TextExtent;

    /// Returns the intrinsic size of `image`. Unknown images should report
    /// [`PxSize::ZERO`].
    fn intrinsic_size(&self, image: &ImageRef) -> PxSize;
}

impl<T: ContentMetrics + ?Sized> ContentMetrics for &T {
    fn measure_text(&self, text: &str, font: &Font) -> TextExtent {
        (**self).measure_text(text, font)
    }

    fn intrinsic_size(&self, image: &ImageRef) -> PxSize {
        (**self).intrinsic_size(image)
    }
}

impl<T: ContentMetrics + ?Sized> ContentMetrics for Box<T> {
    fn measure_text(&self, text: &str, font: &Font) -> TextExtent {
        (**self).measure_text(text, font)
    }

    fn intrinsic_size(&self, image: &ImageRef) -> PxSize {
        (**self).intrinsic_size(image)
    }
}

/// A deterministic measurer: every glyph advances by a fixed fraction of the
/// font size and line height is a fixed multiple of it. Images are looked up
/// in a small table.
///
/// Useful for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedAdvanceMetrics {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height_ratio: f32,
    /// Known images and their intrinsic sizes.
    pub images: Vec<(ImageRef, PxSize)>,
}

impl FixedAdvanceMetrics {
    /// Advance of `advance_ratio × size` per character, line height
    /// `line_height_ratio × size`.
    pub fn new(advance_ratio: f32, line_height_ratio: f32) -> Self {
        Self {
            advance_ratio,
            line_height_ratio,
            images: Vec::new(),
        }
    }

    /// Registers an image size.
    pub fn with_image(mut self, name: impl Into<String>, width: i32, height: i32) -> Self {
        self.images
            .push((ImageRef::new(name), PxSize::new(Px(width), Px(height))));
        self
    }
}

impl ContentMetrics for FixedAdvanceMetrics {
    fn measure_text(&self, text: &str, font: &Font) -> TextExtent {
        let glyphs = text.chars().count() as f32;
        TextExtent::new(
            glyphs * font.size * self.advance_ratio,
            font.size * self.line_height_ratio,
        )
    }

    fn intrinsic_size(&self, image: &ImageRef) -> PxSize {
        self.images
            .iter()
            .find(|(known, _)| known == image)
            .map_or(PxSize::ZERO, |(_, size)| *size)
    }
}
