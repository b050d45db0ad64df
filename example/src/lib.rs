//! Walks a paging menu through every display mode and logs each frame.
//!
//! Run with `RUST_LOG=paging_menu=debug` to see the engine's own spans.
use std::time::Duration;

use paging_menu::{
    Animator, DisplayMode, FixedAdvanceMetrics, ImageRef, IndicatorKind, MenuContent,
    MenuControl, MenuError, MenuFrame, MenuOptions, Px, PxSize, ScrollPolicy, WidthMode,
};
use tracing::info;

const VIEWPORT: PxSize = PxSize::new(Px(375), Px(50));

/// Logs instead of animating.
struct LoggingAnimator;

impl Animator for LoggingAnimator {
    fn animate(&mut self, duration: Duration, target: &MenuFrame) {
        info!(
            ?duration,
            page = ?target.selected_page(),
            scroll = ?target.scroll,
            indicator = ?target.indicator.map(|geometry| geometry.frame),
            "animating"
        );
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,example=info,paging_menu=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn metrics() -> FixedAdvanceMetrics {
    FixedAdvanceMetrics::new(0.55, 1.2)
        .with_image("home", 24, 24)
        .with_image("divider", 1, 20)
}

fn contents() -> Vec<MenuContent> {
    vec![
        MenuContent::image("home"),
        MenuContent::text("Top stories"),
        MenuContent::text("World"),
        MenuContent::text("Business"),
        MenuContent::text("Technology"),
        MenuContent::text("Sports"),
    ]
}

fn log_layout(label: &str, frame: &MenuFrame) {
    let widths: Vec<i32> = frame
        .arrangement
        .items()
        .iter()
        .map(|entry| entry.frame.width.raw())
        .collect();
    info!(
        label,
        content_width = frame.arrangement.content_width().raw(),
        ?widths,
        insets = ?frame.insets,
        "layout"
    );
}

fn walk(label: &str, options: MenuOptions) -> Result<(), MenuError> {
    let mut menu = MenuControl::construct(contents(), options, VIEWPORT, metrics())?;
    log_layout(label, menu.frame());

    let mut animator = LoggingAnimator;
    let last = menu.item_count() - 1;
    for page in [2, last, 0] {
        let frame = menu.move_to_page_with(page, true, &mut animator)?;
        info!(label, page, slot = frame.selected_slot, scroll = ?frame.scroll, "settled");
    }

    // Wrap backwards without animation: the host hides the row until settle.
    let transition = menu.move_to_page(menu.previous_page(), false)?;
    info!(label, conceal = transition.conceal, to = transition.to_page, "jumped");
    if let Some(frame) = menu.settle(transition.id) {
        info!(label, slot = frame.selected_slot, scroll = ?frame.scroll, "settled jump");
    }

    let frame = menu.update_layout(PxSize::new(Px(768), VIEWPORT.height));
    log_layout(label, &frame);

    let teardown = menu.teardown();
    info!(
        label,
        items = teardown.items.len(),
        dividers = teardown.dividers,
        indicator = teardown.indicator,
        "torn down"
    );
    Ok(())
}

/// Runs the demo.
///
/// # Errors
///
/// Returns the first error the engine reports.
pub fn run() -> Result<(), MenuError> {
    init_tracing();

    walk(
        "standard",
        MenuOptions::default()
            .display_mode(DisplayMode::Standard {
                width_mode: WidthMode::Flexible,
                center_selected_item: false,
                scroll_policy: ScrollPolicy::ScrollEnabledAndBounces,
            })
            .divider(ImageRef::new("divider")),
    )?;
    walk(
        "centered",
        MenuOptions::default()
            .display_mode(DisplayMode::Standard {
                width_mode: WidthMode::Flexible,
                center_selected_item: true,
                scroll_policy: ScrollPolicy::ScrollEnabled,
            })
            .indicator(IndicatorKind::round_rect(Px(8))),
    )?;
    walk(
        "segmented",
        MenuOptions::default().display_mode(DisplayMode::SegmentedControl),
    )?;
    walk(
        "infinite",
        MenuOptions::default().display_mode(DisplayMode::Infinite {
            width_mode: WidthMode::Fixed(Px(110)),
            scroll_policy: ScrollPolicy::PagingEnabled,
        }),
    )?;

    Ok(())
}
