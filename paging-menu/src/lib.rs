//! paging-menu is a headless layout engine for horizontal paging tab strips.
//!
//! It decides how wide every tab is, where it sits in the row, how far the row
//! should scroll to show the selected tab and where the selection indicator
//! goes. Drawing, gestures and animation stay with the host: it supplies text
//! and image measurements through [`ContentMetrics`] and applies the
//! [`MenuFrame`]s the engine returns.
//!
//! # Display modes
//!
//! - [`DisplayMode::Standard`]: tabs laid out once, optionally keeping the
//!   selection centered.
//! - [`DisplayMode::SegmentedControl`]: tabs share the container width.
//! - [`DisplayMode::Infinite`]: tabs repeat and the row wraps around.
//!
//! # Usage
//!
//! ```
//! use paging_menu::{
//!     FixedAdvanceMetrics, MenuContent, MenuControl, MenuOptions, Px, PxSize, ScrollTarget,
//! };
//!
//! let contents = ["Home", "News", "Sports"].map(MenuContent::text).to_vec();
//! let mut menu = MenuControl::construct(
//!     contents,
//!     MenuOptions::default(),
//!     PxSize::new(Px(320), Px(50)),
//!     FixedAdvanceMetrics::new(0.5, 1.25),
//! )?;
//!
//! let transition = menu.move_to_page(2, true)?;
//! // Animate the host toward `transition.target`, then:
//! let frame = menu.settle(transition.id).expect("latest transition");
//!
//! assert_eq!(menu.current_page(), 2);
//! assert_eq!(frame.scroll, ScrollTarget::Offset(Px::ZERO));
//! # Ok::<(), paging_menu::MenuError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod content;
pub mod control;
pub mod error;
pub mod index_space;
pub mod indicator;
pub mod item;
pub mod layout;
pub mod options;
pub mod px;
pub mod scroll;
pub mod size_policy;

pub use crate::{
    color::Color,
    content::{ContentMetrics, FixedAdvanceMetrics, Font, ImageRef, MenuContent, TextExtent},
    control::{Animator, MenuControl, MenuFrame, Teardown, Transition, TransitionId},
    error::MenuError,
    index_space::IndexSpace,
    indicator::{IndicatorGeometry, IndicatorTracker},
    item::{ItemAppearance, MenuItem},
    layout::{ArrangedItem, Arrangement, LayoutEngine},
    options::{
        DecelerationRate, DisplayMode, IndicatorKind, MenuDefaults, MenuOptions, ScrollPolicy,
        WidthMode,
    },
    px::{Px, PxRect, PxSize},
    scroll::{ContentInsets, ScrollPositioner, ScrollTarget},
    size_policy::SizePolicy,
};
