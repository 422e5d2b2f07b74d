//! Per-frame snapshots handed to the renderer.
//!
//! A [`DashboardFrame`] is recomputed from controller state after every frame;
//! the renderer only ever reads it.

use glassboard_core::geometry::Rect;
use glassboard_core::math::Vec2;

use crate::chrome::CardStyle;
use crate::color::Color;
use crate::navigation::{NavItem, NavOutputs, ToggleIcon};
use crate::widget::{WidgetContent, WidgetKind};
use crate::widget_id::WidgetId;

/// One widget card as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: WidgetId,
    pub title: String,
    pub kind: WidgetKind,
    /// Unscaled top-left corner; equals `base + live offset` while dragging.
    pub position: Vec2,
    /// Bounds with the lift scale applied about the center.
    pub rect: Rect,
    pub scale: f32,
    pub dragging: bool,
    pub content: WidgetContent,
    pub style: CardStyle,
}

/// Label of a navigation entry while the rail is expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelView {
    pub text: &'static str,
    pub opacity: f32,
    pub offset_x: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItemView {
    pub item: &'static NavItem,
    pub active: bool,
    pub tint: Color,
    /// Highlight behind the active entry.
    pub background: Option<Color>,
    /// `None` while the rail is collapsed.
    pub label: Option<LabelView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    pub expanded: bool,
    pub icon: ToggleIcon,
    pub outputs: NavOutputs,
    pub blur_intensity: u8,
    pub items: Vec<NavItemView>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFrame {
    pub background: [Color; 3],
    pub header_title: &'static str,
    pub header_subtitle: &'static str,
    pub content_margin: f32,
    pub nav: NavView,
    pub cards: Vec<CardView>,
}

impl DashboardFrame {
    pub fn card(&self, id: WidgetId) -> Option<&CardView> {
        self.cards.iter().find(|card| card.id == id)
    }
}
