//! Headless dashboard walkthrough.
//!
//! Drives the sample dashboard without a window: drags the Revenue card past
//! the right edge, expands the navigation rail, and prints what a renderer
//! would draw. Run with `RUST_LOG=glassboard_ui=trace` for per-frame logs, or
//! pass `--profile` to serve puffin scopes on port 8585.

use std::time::{Duration, Instant};

use glassboard::core::logging;
use glassboard::core::profiling::{DEFAULT_PROFILER_ADDR, init_profiling, new_frame};
use glassboard::prelude::*;
use glassboard_test_utils::ScriptedGestureSource;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    logging::init();
    if std::env::args().any(|arg| arg == "--profile") {
        init_profiling(DEFAULT_PROFILER_ADDR);
    }

    let mut dashboard =
        Dashboard::with_sample_widgets(Size::new(375.0, 800.0), DashboardConfig::default())
            .expect("sample widgets have unique ids");

    dashboard.on_widget_moved(|moved| {
        println!("{} released at ({}, {})", moved.id, moved.x(), moved.y());
    });
    dashboard.on_nav_toggled(|toggled| {
        println!("navigation expanded: {}", toggled.expanded);
    });

    let start = Instant::now();
    let mut time = FrameTime::starting_at(start);
    let mut step = |dashboard: &mut Dashboard| {
        new_frame();
        time.update_at(start + FRAME * (time.frame_count() as u32 + 1));
        dashboard.frame(time.scaled_delta())
    };

    let revenue = WidgetId::new("1");
    let mut script = ScriptedGestureSource::new()
        .press()
        .drag_to(200.0, 0.0, 10)
        .release();
    while script.advance() {
        dashboard
            .pump(revenue, &mut script)
            .expect("revenue card exists");
        step(&mut dashboard);
    }

    dashboard.toggle_nav();
    while step(&mut dashboard).animating {}

    let frame = dashboard.snapshot();
    println!("{} - {}", frame.header_title, frame.header_subtitle);
    println!(
        "rail width {} (icon {:?}), content margin {}",
        frame.nav.outputs.width, frame.nav.icon, frame.content_margin
    );
    for item in &frame.nav.items {
        let marker = if item.active { "*" } else { " " };
        println!(" {} {}", marker, item.item.label);
    }
    for card in &frame.cards {
        println!(
            "{:<12} at ({:>5.1}, {:>5.1}) scale {:.2} value {}",
            card.title,
            card.position.x,
            card.position.y,
            card.scale,
            card.content.value()
        );
    }
}
