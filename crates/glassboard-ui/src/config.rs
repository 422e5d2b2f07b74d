//! Tunables for the dashboard screen.
//!
//! All values are in logical pixels unless stated otherwise.

use std::time::Duration;

use glassboard_core::math::Vec2;

use crate::animation::{EasingFunction, SpringConfig};

/// Drag behaviour for widget cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Space kept free for chrome (navigation rail, header) when clamping a
    /// released card. Subtracted from the viewport along with the card size.
    pub reserved_margin: Vec2,
    /// Scale a card springs to while it is held.
    pub lift_scale: f32,
    /// Spring used for the lift and settle feedback.
    pub spring: SpringConfig,
}

impl DragConfig {
    pub fn with_reserved_margin(mut self, horizontal: f32, vertical: f32) -> Self {
        self.reserved_margin = Vec2::new(horizontal, vertical);
        self
    }

    pub fn with_lift_scale(mut self, scale: f32) -> Self {
        self.lift_scale = scale;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            reserved_margin: Vec2::new(100.0, 200.0),
            lift_scale: 1.05,
            spring: SpringConfig::default(),
        }
    }
}

/// Navigation rail expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    pub collapsed_width: f32,
    pub expanded_width: f32,
    /// Horizontal label offset at progress 0.
    pub label_hidden_offset: f32,
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl NavConfig {
    pub fn with_widths(mut self, collapsed: f32, expanded: f32) -> Self {
        self.collapsed_width = collapsed;
        self.expanded_width = expanded;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            collapsed_width: 70.0,
            expanded_width: 200.0,
            label_hidden_offset: -20.0,
            duration: Duration::from_millis(300),
            easing: EasingFunction::EaseInOut,
        }
    }
}

/// Left margin of the main content area, pushed by the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginConfig {
    /// Margin before the first layout pass runs.
    pub initial: f32,
    pub collapsed: f32,
    pub expanded: f32,
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl MarginConfig {
    pub fn with_targets(mut self, collapsed: f32, expanded: f32) -> Self {
        self.collapsed = collapsed;
        self.expanded = expanded;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            initial: 70.0,
            collapsed: 90.0,
            expanded: 220.0,
            duration: Duration::from_millis(300),
            easing: EasingFunction::EaseInOut,
        }
    }
}

/// Configuration for a whole [`Dashboard`](crate::Dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardConfig {
    pub drag: DragConfig,
    pub nav: NavConfig,
    pub margin: MarginConfig,
}

impl DashboardConfig {
    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_nav(mut self, nav: NavConfig) -> Self {
        self.nav = nav;
        self
    }

    pub fn with_margin(mut self, margin: MarginConfig) -> Self {
        self.margin = margin;
        self
    }
}
