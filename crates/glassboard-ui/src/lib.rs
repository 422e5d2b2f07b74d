//! Glassboard UI - draggable widget cards and a collapsible navigation rail
//!
//! This crate holds the dashboard screen's state machines; it draws nothing.
//! A host feeds it gesture samples and frame ticks and reads back a
//! [`DashboardFrame`] snapshot to render.
//!
//! - [`DragController`]: one per card, turns a press/move/release gesture
//!   into a clamped [`WidgetMoved`] and drives the lift scale
//! - [`NavExpansion`]: one progress value driving rail width and label fade
//! - [`WidgetStore`]: the authoritative id -> widget mapping
//! - [`Dashboard`]: the screen gluing the above together
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use glassboard_core::geometry::Size;
//! use glassboard_core::input::GestureSample;
//! use glassboard_core::math::Vec2;
//! use glassboard_ui::{Dashboard, DashboardConfig, WidgetId};
//!
//! let mut dashboard =
//!     Dashboard::with_sample_widgets(Size::new(375.0, 800.0), DashboardConfig::default()).unwrap();
//! let revenue = WidgetId::new("1");
//!
//! dashboard.queue_gesture(revenue, GestureSample::start()).unwrap();
//! dashboard.queue_gesture(revenue, GestureSample::moved(200.0, 0.0)).unwrap();
//! dashboard.queue_gesture(revenue, GestureSample::end(Vec2::new(200.0, 0.0))).unwrap();
//!
//! let report = dashboard.frame(Duration::from_millis(16));
//! assert_eq!(report.moved[0].position, Vec2::new(115.0, 20.0));
//! ```

pub mod animation;
pub mod changes;
pub mod chrome;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod drag;
pub mod error;
pub mod navigation;
pub mod store;
pub mod view;
pub mod widget;
pub mod widget_id;

pub use animation::{AnimatedValue, AnimationState, EasingFunction, SpringConfig};
pub use changes::FrameChanges;
pub use color::Color;
pub use config::{DashboardConfig, DragConfig, MarginConfig, NavConfig};
pub use dashboard::{Dashboard, FrameReport};
pub use drag::{DragBounds, DragController, DragState, WidgetMoved};
pub use error::{DashboardError, DashboardResult};
pub use navigation::{
    ContentMargin, NAV_ITEMS, NavExpansion, NavItem, NavOutputs, NavSelection, NavToggled,
    ToggleIcon,
};
pub use store::WidgetStore;
pub use view::{CardView, DashboardFrame, LabelView, NavItemView, NavView};
pub use widget::{SAMPLE_WIDGET_SIZE, Widget, WidgetContent, WidgetKind, sample_widgets};
pub use widget_id::WidgetId;
