//! Glassboard - a glass-styled mobile dashboard
//!
//! A screen of draggable widget cards next to a collapsible navigation rail.
//! The crate is renderer-agnostic: it consumes gesture samples and frame
//! ticks and produces a [`DashboardFrame`](ui::DashboardFrame) per frame.
//!
//! - **Drag**: cards follow the pointer, lift while held and are clamped into
//!   the viewport on release
//! - **Navigation**: the rail's width and label fade animate together from a
//!   single progress value
//! - **Tooling**: `tracing` logs and `puffin` profiling scopes throughout
//!
//! # Quick Start
//!
//! ```
//! use glassboard::prelude::*;
//!
//! glassboard::core::logging::init();
//!
//! let mut dashboard =
//!     Dashboard::with_sample_widgets(Size::new(375.0, 800.0), DashboardConfig::default()).unwrap();
//! let mut time = FrameTime::new();
//!
//! dashboard.toggle_nav();
//! for _ in 0..3 {
//!     time.update();
//!     dashboard.frame(time.scaled_delta());
//! }
//! let frame = dashboard.snapshot();
//! assert_eq!(frame.cards.len(), 4);
//! ```

pub mod time;

pub use glassboard_core as core;
pub use glassboard_core::math;
pub use glassboard_ui as ui;

pub use time::FrameTime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::time::FrameTime;

    pub use glassboard_core::geometry::{Rect, Size};
    pub use glassboard_core::input::{GesturePhase, GestureSample, GestureSource};
    pub use glassboard_core::math::Vec2;

    pub use glassboard_ui::{
        Color, Dashboard, DashboardConfig, DashboardError, DashboardFrame, DashboardResult,
        DragController, FrameChanges, FrameReport, NavExpansion, NavToggled, Widget, WidgetId,
        WidgetMoved, WidgetStore,
    };
}
