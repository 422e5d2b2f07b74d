//! Collapsible navigation rail.
//!
//! [`NavExpansion`] drives a single `progress` value in `[0, 1]`; the rail
//! width and the label opacity/offset are pure linear functions of it, so they
//! always move in lockstep. [`ContentMargin`] is driven separately from the
//! boolean target only, so the content shift is not pixel-synchronized with
//! the rail.

use std::time::Duration;

use glassboard_core::math::lerp;

use crate::animation::{AnimatedValue, AnimationState};
use crate::config::{MarginConfig, NavConfig};
use crate::error::{DashboardError, DashboardResult};

/// Emitted when the rail's target state flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToggled {
    pub expanded: bool,
}

/// Icon shown on the rail's toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Menu,
    ChevronBack,
}

/// Interpolated rail outputs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavOutputs {
    pub progress: f32,
    pub width: f32,
    pub label_opacity: f32,
    pub label_offset_x: f32,
}

/// Drives the rail's expansion progress.
#[derive(Debug, Clone)]
pub struct NavExpansion {
    expanded: bool,
    progress: AnimatedValue,
    config: NavConfig,
}

impl NavExpansion {
    pub fn new(config: NavConfig) -> Self {
        Self::with_state(false, config)
    }

    /// Start settled in the given state.
    pub fn with_state(expanded: bool, config: NavConfig) -> Self {
        Self {
            expanded,
            progress: AnimatedValue::new(if expanded { 1.0 } else { 0.0 }),
            config,
        }
    }

    /// The target state.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Animate toward expanded (1) or collapsed (0) from the current progress.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        let target = if expanded { 1.0 } else { 0.0 };
        if self
            .progress
            .animate_to(target, self.config.duration, self.config.easing)
        {
            tracing::debug!(expanded, from = self.progress.value(), "nav animation started");
        }
    }

    /// Flip the target state.
    pub fn toggle(&mut self) -> NavToggled {
        let expanded = !self.expanded;
        self.set_expanded(expanded);
        tracing::info!(expanded, "navigation toggled");
        NavToggled { expanded }
    }

    pub fn tick(&mut self, dt: Duration) -> AnimationState {
        self.progress.tick(dt)
    }

    pub fn width(&self) -> f32 {
        lerp(
            self.config.collapsed_width,
            self.config.expanded_width,
            self.progress(),
        )
    }

    pub fn label_opacity(&self) -> f32 {
        self.progress()
    }

    pub fn label_offset_x(&self) -> f32 {
        lerp(self.config.label_hidden_offset, 0.0, self.progress())
    }

    /// Labels are only laid out while the target state is expanded.
    pub fn labels_visible(&self) -> bool {
        self.expanded
    }

    pub fn toggle_icon(&self) -> ToggleIcon {
        if self.expanded {
            ToggleIcon::ChevronBack
        } else {
            ToggleIcon::Menu
        }
    }

    pub fn outputs(&self) -> NavOutputs {
        NavOutputs {
            progress: self.progress(),
            width: self.width(),
            label_opacity: self.label_opacity(),
            label_offset_x: self.label_offset_x(),
        }
    }
}

impl Default for NavExpansion {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

/// Content-area margin that follows the rail's target state.
#[derive(Debug, Clone)]
pub struct ContentMargin {
    value: AnimatedValue,
    config: MarginConfig,
}

impl ContentMargin {
    pub fn new(config: MarginConfig) -> Self {
        Self {
            value: AnimatedValue::new(config.initial),
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value.value()
    }

    pub fn is_animating(&self) -> bool {
        self.value.is_animating()
    }

    /// Retarget from the rail's boolean state.
    pub fn follow(&mut self, nav_expanded: bool) {
        let target = if nav_expanded {
            self.config.expanded
        } else {
            self.config.collapsed
        };
        self.value
            .animate_to(target, self.config.duration, self.config.easing);
    }

    pub fn tick(&mut self, dt: Duration) -> AnimationState {
        self.value.tick(dt)
    }
}

/// One entry on the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// The rail's entries, top to bottom.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "dashboard",
        icon: "grid-outline",
        label: "Dashboard",
    },
    NavItem {
        id: "analytics",
        icon: "analytics-outline",
        label: "Analytics",
    },
    NavItem {
        id: "settings",
        icon: "settings-outline",
        label: "Settings",
    },
    NavItem {
        id: "profile",
        icon: "person-outline",
        label: "Profile",
    },
];

/// Which rail entry is selected.
#[derive(Debug, Clone)]
pub struct NavSelection {
    items: &'static [NavItem],
    active: usize,
}

impl NavSelection {
    pub fn new(items: &'static [NavItem]) -> Self {
        Self { items, active: 0 }
    }

    pub fn items(&self) -> &'static [NavItem] {
        self.items
    }

    /// The selected item, if the item list is non-empty.
    pub fn active(&self) -> Option<&'static NavItem> {
        self.items.get(self.active)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|item| item.id == id)
    }

    /// Select the item with `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> DashboardResult<&'static NavItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DashboardError::UnknownNavItem(id.to_string()))?;
        self.active = index;
        Ok(&self.items[index])
    }
}

impl Default for NavSelection {
    fn default() -> Self {
        Self::new(&NAV_ITEMS)
    }
}
