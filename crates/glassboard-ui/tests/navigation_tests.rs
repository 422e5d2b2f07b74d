//! Navigation rail and content margin behavior through the dashboard.

use std::time::Duration;

use glassboard_core::geometry::Size;
use glassboard_test_utils::RecordingSink;
use glassboard_ui::{
    Dashboard, DashboardConfig, DashboardError, NavConfig, NavToggled, ToggleIcon,
};

const FRAME: Duration = Duration::from_millis(16);

fn dashboard() -> Dashboard {
    Dashboard::with_sample_widgets(Size::new(375.0, 800.0), DashboardConfig::default()).unwrap()
}

fn run_frames(dash: &mut Dashboard, frames: usize) {
    for _ in 0..frames {
        dash.frame(FRAME);
    }
}

#[test]
fn test_expand_animates_width_and_labels() {
    let mut dash = dashboard();
    let frame = dash.snapshot();
    assert_eq!(frame.nav.outputs.width, 70.0);
    assert_eq!(frame.nav.icon, ToggleIcon::Menu);

    dash.toggle_nav();
    run_frames(&mut dash, 10);
    let mid = dash.snapshot().nav.outputs;
    assert!(mid.width > 70.0 && mid.width < 200.0);
    assert!(mid.label_opacity > 0.0 && mid.label_opacity < 1.0);
    assert!(mid.label_offset_x > -20.0 && mid.label_offset_x < 0.0);

    run_frames(&mut dash, 20);
    let frame = dash.snapshot();
    assert_eq!(frame.nav.outputs.width, 200.0);
    assert_eq!(frame.nav.outputs.label_opacity, 1.0);
    assert_eq!(frame.nav.outputs.label_offset_x, 0.0);
    assert_eq!(frame.nav.icon, ToggleIcon::ChevronBack);
    assert_eq!(frame.content_margin, 220.0);
}

#[test]
fn test_reverse_mid_animation_retargets_from_current_width() {
    let mut dash = dashboard();
    dash.toggle_nav();
    run_frames(&mut dash, 8);
    let reached = dash.nav().width();

    dash.toggle_nav();
    assert_eq!(dash.nav().width(), reached);

    let mut previous = reached;
    while dash.nav().is_animating() {
        dash.frame(FRAME);
        let width = dash.nav().width();
        assert!(width <= previous);
        previous = width;
    }
    assert_eq!(dash.nav().width(), 70.0);
}

#[test]
fn test_rapid_toggles_follow_last_target() {
    let mut dash = dashboard();
    for _ in 0..5 {
        dash.toggle_nav();
        dash.frame(FRAME);
    }
    assert!(dash.nav().is_expanded());
    run_frames(&mut dash, 30);
    assert_eq!(dash.nav().width(), 200.0);
}

#[test]
fn test_toggle_notifies_listeners() {
    let mut dash = dashboard();
    let sink = RecordingSink::new();
    dash.on_nav_toggled(sink.callback());

    dash.toggle_nav();
    dash.toggle_nav();
    dash.set_nav_expanded(false);

    assert_eq!(
        sink.events(),
        vec![NavToggled { expanded: true }, NavToggled { expanded: false }]
    );
}

#[test]
fn test_custom_widths() {
    let config = DashboardConfig::default().with_nav(NavConfig::default().with_widths(56.0, 240.0));
    let mut dash =
        Dashboard::with_sample_widgets(Size::new(768.0, 1024.0), config).unwrap();
    assert_eq!(dash.nav().width(), 56.0);
    dash.toggle_nav();
    run_frames(&mut dash, 30);
    assert_eq!(dash.nav().width(), 240.0);
}

#[test]
fn test_nav_selection() {
    let mut dash = dashboard();
    assert_eq!(dash.active_nav_item().unwrap().id, "dashboard");

    dash.select_nav_item("analytics").unwrap();
    let frame = dash.snapshot();
    let active: Vec<_> = frame.nav.items.iter().filter(|i| i.active).map(|i| i.item.id).collect();
    assert_eq!(active, ["analytics"]);

    assert_eq!(
        dash.select_nav_item("billing"),
        Err(DashboardError::UnknownNavItem("billing".to_string()))
    );
    assert_eq!(dash.active_nav_item().unwrap().id, "analytics");
}
