//! The menu controller.
//!
//! [`MenuControl`] owns the items of one menu and drives the layout pipeline:
//! size policy, index space, layout engine, scroll positioner and indicator
//! tracker. Every operation returns a [`MenuFrame`], a complete description of
//! what the host should show.
//!
//! Page changes happen in two phases. [`MenuControl::move_to_page`] commits the
//! new page and returns a [`Transition`] whose target frame is the end state of
//! the host animation. Once the animation is done the host calls
//! [`MenuControl::settle`], which recenters the infinite window and produces the
//! final frame. A newer commit supersedes an older one: settling a stale
//! transition does nothing.
use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    MenuError,
    content::{ContentMetrics, MenuContent},
    index_space::IndexSpace,
    indicator::{IndicatorGeometry, IndicatorTracker},
    item::{ItemAppearance, MenuItem},
    layout::{Arrangement, LayoutEngine},
    options::{DecelerationRate, MenuOptions},
    px::{PxRect, PxSize},
    scroll::{ContentInsets, ScrollPositioner, ScrollTarget},
    size_policy::SizePolicy,
};

/// Runs a host animation toward a frame.
pub trait Animator {
    /// Animates from the current host state to `target` over `duration` and
    /// returns once the end state is applied. A zero duration means apply
    /// immediately.
    fn animate(&mut self, duration: Duration, target: &MenuFrame);
}

/// Identifies one committed page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

/// Everything the host needs to present the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFrame {
    /// Item and divider geometry in slot order.
    pub arrangement: Arrangement,
    /// Scroll offset to apply.
    pub scroll: ScrollTarget,
    /// Extra scrollable space on each side.
    pub insets: ContentInsets,
    /// Selection indicator, `None` when disabled.
    pub indicator: Option<IndicatorGeometry>,
    /// Slot of the selected item.
    pub selected_slot: usize,
}

impl MenuFrame {
    /// Frame of the selected item.
    pub fn selected_frame(&self) -> Option<PxRect> {
        self.arrangement
            .items()
            .get(self.selected_slot)
            .map(|entry| entry.frame)
    }

    /// Page shown in the selected slot.
    pub fn selected_page(&self) -> Option<usize> {
        self.arrangement
            .items()
            .get(self.selected_slot)
            .map(|entry| entry.logical_index)
    }
}

/// A committed page change waiting to settle.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Pass to [`MenuControl::settle`] when the host animation is done.
    pub id: TransitionId,
    /// Page selected before the commit.
    pub from_page: usize,
    /// Page selected by the commit.
    pub to_page: usize,
    /// Animation length, zero for immediate moves.
    pub duration: Duration,
    /// Set for immediate moves: the host should hide the menu row until the
    /// transition settles so the window reshuffle is not visible.
    pub conceal: bool,
    /// End state of the animation.
    pub target: MenuFrame,
}

/// What a torn-down menu leaves for the host to detach.
#[derive(Debug, Clone, PartialEq)]
pub struct Teardown {
    /// Every item copy, by display index.
    pub items: Vec<MenuItem>,
    /// Number of dividers that were placed.
    pub dividers: usize,
    /// Whether an indicator was shown.
    pub indicator: bool,
    /// Transition that was still waiting to settle.
    pub cancelled: Option<TransitionId>,
}

/// A horizontal paging menu.
#[derive(Debug)]
pub struct MenuControl<M: ContentMetrics> {
    options: MenuOptions,
    metrics: M,
    viewport: PxSize,
    items: Vec<MenuItem>,
    index: IndexSpace,
    layout: LayoutEngine,
    indicator: IndicatorTracker,
    frame: MenuFrame,
    pending: Option<TransitionId>,
    next_transition: u64,
}

impl<M: ContentMetrics> MenuControl<M> {
    /// Builds a menu on page 0, measured and laid out for `viewport`.
    ///
    /// In infinite mode every content entry is repeated
    /// [`MenuOptions::repeat_factor`] times.
    ///
    /// # Errors
    ///
    /// Returns the error of [`MenuOptions::validate`].
    ///
    /// # Panics
    ///
    /// Panics if `contents` is empty.
    #[tracing::instrument(level = "debug", skip(contents, options, metrics), fields(items = contents.len()))]
    pub fn construct(
        contents: Vec<MenuContent>,
        options: MenuOptions,
        viewport: PxSize,
        metrics: M,
    ) -> Result<Self, MenuError> {
        assert!(!contents.is_empty(), "a menu needs at least one item");
        options.validate()?;

        let item_count = contents.len();
        let index = IndexSpace::new(item_count, options.effective_repeat_factor());
        let items = contents
            .iter()
            .cycle()
            .take(index.display_count())
            .enumerate()
            .map(|(display_index, content)| {
                MenuItem::new(display_index % item_count, display_index, content.clone())
            })
            .collect();

        // An unknown divider image disables dividers.
        let divider = options
            .divider
            .as_ref()
            .map(|image| metrics.intrinsic_size(image))
            .filter(|size| !size.is_empty());
        let layout = LayoutEngine::new(options.menu_height, divider);
        let indicator = IndicatorTracker::new(options.indicator, options.menu_height);

        let mut control = Self {
            options,
            metrics,
            viewport,
            items,
            index,
            layout,
            indicator,
            frame: MenuFrame {
                arrangement: Arrangement::default(),
                scroll: ScrollTarget::Unchanged,
                insets: ContentInsets::ZERO,
                indicator: None,
                selected_slot: 0,
            },
            pending: None,
            next_transition: 0,
        };
        control.apply_selection();
        control.index.recenter();
        control.relayout();

        debug!(
            display_count = control.index.display_count(),
            content_width = control.frame.arrangement.content_width().raw(),
            "constructed menu"
        );
        Ok(control)
    }

    /// Commits a move to `page`.
    ///
    /// Selection and sizes update immediately and the returned transition
    /// carries the frame to animate toward. Call [`settle`](Self::settle) with
    /// its id once the animation is done. A pending transition is superseded.
    ///
    /// # Errors
    ///
    /// [`MenuError::IndexOutOfRange`] if `page` is not a valid page. The menu
    /// is left untouched.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn move_to_page(&mut self, page: usize, animated: bool) -> Result<Transition, MenuError> {
        let from_page = self.index.current_page();
        if let Err(error) = self.index.set_current_page(page) {
            warn!(%error, "rejected page move");
            return Err(error);
        }

        self.apply_selection();
        let target = self.relayout();

        let id = TransitionId(self.next_transition);
        self.next_transition += 1;
        if let Some(stale) = self.pending.replace(id) {
            debug!(?stale, "superseded pending transition");
        }

        let duration = if animated {
            self.options.animation_duration
        } else {
            Duration::ZERO
        };
        debug!(?id, from_page, to_page = page, ?duration, "committed page change");

        Ok(Transition {
            id,
            from_page,
            to_page: page,
            duration,
            conceal: !animated,
            target,
        })
    }

    /// Finishes the transition `id`.
    ///
    /// Recenters the infinite window on the selected item and returns the
    /// final frame. Returns `None` without touching anything if `id` has been
    /// superseded or already settled.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn settle(&mut self, id: TransitionId) -> Option<MenuFrame> {
        if self.pending != Some(id) {
            debug!(pending = ?self.pending, "ignoring stale transition");
            return None;
        }
        self.pending = None;

        if self.index.recenter() {
            debug!(anchor = self.index.anchor(), "recentered window");
        }
        Some(self.relayout())
    }

    /// Commits a move to `page`, runs it through `animator` and settles it.
    ///
    /// # Errors
    ///
    /// See [`move_to_page`](Self::move_to_page).
    pub fn move_to_page_with(
        &mut self,
        page: usize,
        animated: bool,
        animator: &mut impl Animator,
    ) -> Result<MenuFrame, MenuError> {
        let transition = self.move_to_page(page, animated)?;
        animator.animate(transition.duration, &transition.target);
        Ok(self
            .settle(transition.id)
            .unwrap_or_else(|| self.frame.clone()))
    }

    /// Re-measures and re-arranges every item for a new container size.
    ///
    /// Calling it again with the same size yields the same frame.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_layout(&mut self, container_size: PxSize) -> MenuFrame {
        self.viewport = container_size;
        self.apply_selection();
        let frame = self.relayout();
        debug!(
            content_width = frame.arrangement.content_width().raw(),
            "updated layout"
        );
        frame
    }

    /// Releases the menu and reports what the host should detach.
    pub fn teardown(self) -> Teardown {
        let dividers = self.frame.arrangement.divider_count();
        let indicator = self.indicator.is_active();
        debug!(items = self.items.len(), dividers, indicator, "tore down menu");
        Teardown {
            items: self.items,
            dividers,
            indicator,
            cancelled: self.pending,
        }
    }

    /// The selected page.
    pub fn current_page(&self) -> usize {
        self.index.current_page()
    }

    /// The item representing the selected page.
    pub fn current_item(&self) -> &MenuItem {
        &self.items[self.index.selected_display_index()]
    }

    /// The page before the current one, wrapping.
    pub fn previous_page(&self) -> usize {
        self.index.previous_page()
    }

    /// The page after the current one, wrapping.
    pub fn next_page(&self) -> usize {
        self.index.next_page()
    }

    /// Number of pages.
    pub fn item_count(&self) -> usize {
        self.index.item_count()
    }

    /// Every item copy, by display index.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The current arrangement.
    pub fn arrangement(&self) -> &Arrangement {
        &self.frame.arrangement
    }

    /// The last computed frame.
    pub fn frame(&self) -> &MenuFrame {
        &self.frame
    }

    /// Drawing attributes of the item with `display_index`.
    pub fn item_appearance(&self, display_index: usize) -> Option<ItemAppearance> {
        self.items
            .get(display_index)
            .map(|item| item.appearance(&self.options))
    }

    /// The configuration the menu was built with.
    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// The container size of the last layout pass.
    pub fn viewport(&self) -> PxSize {
        self.viewport
    }

    /// Transition waiting to settle, if any.
    pub fn pending_transition(&self) -> Option<TransitionId> {
        self.pending
    }

    /// Whether the host scroll view should accept user scrolling.
    pub fn scroll_enabled(&self) -> bool {
        self.options.display_mode.scroll_enabled()
    }

    /// Whether the host scroll view should bounce at its edges.
    pub fn bounces(&self) -> bool {
        self.options.display_mode.bounces()
    }

    /// Deceleration hint for the host scroll view.
    pub fn deceleration_rate(&self) -> DecelerationRate {
        self.options.deceleration_rate
    }

    fn size_policy(&self) -> SizePolicy {
        SizePolicy::new(
            self.options.display_mode,
            self.viewport.width,
            self.index.item_count(),
            self.options.item_margin,
        )
    }

    /// Moves the selection flag to the selected copy and re-measures, since
    /// the selected font may differ.
    fn apply_selection(&mut self) {
        let selected = self.index.selected_display_index();
        let policy = self.size_policy();
        for item in &mut self.items {
            item.set_selected(item.display_index() == selected);
            item.remeasure(&policy, &self.options, &self.metrics);
        }
    }

    /// Arranges items in the current window order and derives scroll,
    /// insets and indicator from it.
    fn relayout(&mut self) -> MenuFrame {
        let ordered = self
            .index
            .window()
            .into_iter()
            .filter_map(|display_index| self.items.get(display_index));
        let arrangement = self.layout.arrange(ordered);

        let selected_slot = self
            .index
            .slot_for_display_index(self.index.selected_display_index());
        let selected_frame = arrangement
            .items()
            .get(selected_slot)
            .map(|entry| entry.frame)
            .unwrap_or_default();

        let positioner = ScrollPositioner::new(
            self.options.display_mode,
            self.index.item_count(),
            self.options.minimum_supported_count,
        );
        let scroll = positioner.target_offset(
            self.index.current_page(),
            selected_frame,
            &arrangement,
            self.viewport.width,
        );
        let insets = positioner.content_insets(&arrangement, self.viewport.width);
        let indicator = self.indicator.geometry_for(selected_frame);

        self.frame = MenuFrame {
            arrangement,
            scroll,
            insets,
            indicator,
            selected_slot,
        };
        self.frame.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::FixedAdvanceMetrics,
        options::{DisplayMode, ScrollPolicy, WidthMode},
        px::Px,
    };

    fn metrics() -> FixedAdvanceMetrics {
        // 16pt: 8px per glyph, 20px line height.
        FixedAdvanceMetrics::new(0.5, 1.25)
    }

    fn titles(names: &[&str]) -> Vec<MenuContent> {
        names.iter().map(|name| MenuContent::text(*name)).collect()
    }

    fn viewport(width: i32) -> PxSize {
        PxSize::new(Px(width), Px(50))
    }

    #[test]
    fn construct_selects_the_first_page() {
        let control = MenuControl::construct(
            titles(&["Home", "News", "Shop"]),
            MenuOptions::default(),
            viewport(320),
            metrics(),
        )
        .unwrap();

        assert_eq!(control.current_page(), 0);
        assert!(control.current_item().is_selected());
        assert_eq!(control.items().iter().filter(|i| i.is_selected()).count(), 1);
        assert_eq!(control.arrangement().len(), 3);
        assert_eq!(control.frame().selected_slot, 0);
        assert_eq!(control.pending_transition(), None);
    }

    #[test]
    fn commit_then_settle() {
        let mut control = MenuControl::construct(
            titles(&["Home", "News", "Shop"]),
            MenuOptions::default(),
            viewport(320),
            metrics(),
        )
        .unwrap();

        let transition = control.move_to_page(2, true).unwrap();
        assert_eq!((transition.from_page, transition.to_page), (0, 2));
        assert_eq!(transition.duration, Duration::from_millis(300));
        assert!(!transition.conceal);
        assert_eq!(transition.target.selected_page(), Some(2));
        assert_eq!(control.pending_transition(), Some(transition.id));

        let settled = control.settle(transition.id).unwrap();
        assert_eq!(settled, transition.target);
        assert_eq!(control.settle(transition.id), None);
    }

    #[test]
    fn immediate_moves_conceal_the_row() {
        let mut control = MenuControl::construct(
            titles(&["A", "B"]),
            MenuOptions::default(),
            viewport(320),
            metrics(),
        )
        .unwrap();

        let transition = control.move_to_page(1, false).unwrap();
        assert_eq!(transition.duration, Duration::ZERO);
        assert!(transition.conceal);
    }

    #[test]
    fn selected_font_changes_the_width() {
        let options = MenuOptions::default()
            .display_mode(DisplayMode::Standard {
                width_mode: WidthMode::Flexible,
                center_selected_item: false,
                scroll_policy: ScrollPolicy::ScrollEnabled,
            })
            .selected_font(crate::content::Font::system_bold(20.0));
        let mut control = MenuControl::construct(
            titles(&["Home", "News"]),
            options,
            viewport(320),
            metrics(),
        )
        .unwrap();

        let widths = |control: &MenuControl<FixedAdvanceMetrics>| {
            control
                .items()
                .iter()
                .map(|item| item.size().width)
                .collect::<Vec<_>>()
        };
        assert_eq!(widths(&control), vec![Px(80), Px(72)]);

        control.move_to_page(1, true).unwrap();
        assert_eq!(widths(&control), vec![Px(72), Px(80)]);
    }

    #[test]
    fn host_flags_follow_options() {
        let control = MenuControl::construct(
            titles(&["A"]),
            MenuOptions::default(),
            viewport(320),
            metrics(),
        )
        .unwrap();
        assert!(!control.scroll_enabled());
        assert!(!control.bounces());
        assert_eq!(control.deceleration_rate(), DecelerationRate::Fast);
    }

    #[test]
    fn appearance_lookup() {
        let control = MenuControl::construct(
            titles(&["A", "B"]),
            MenuOptions::default(),
            viewport(320),
            metrics(),
        )
        .unwrap();
        assert_eq!(control.item_appearance(0).map(|a| a.z_index), Some(0));
        assert_eq!(control.item_appearance(1).map(|a| a.z_index), Some(-1));
        assert_eq!(control.item_appearance(2), None);
    }
}
