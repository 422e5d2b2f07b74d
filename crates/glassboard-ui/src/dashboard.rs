//! The dashboard screen.
//!
//! [`Dashboard`] owns the authoritative [`WidgetStore`], one
//! [`DragController`] per widget, the navigation rail and the content margin.
//! The host feeds it gesture samples and frame ticks and reads back a
//! [`DashboardFrame`].
//!
//! Gesture samples can be applied immediately with
//! [`handle_gesture`](Dashboard::handle_gesture) or queued with
//! [`queue_gesture`](Dashboard::queue_gesture); queued move samples are
//! coalesced so only the latest per widget is applied on the next
//! [`frame`](Dashboard::frame).

use std::fmt;
use std::time::Duration;

use glassboard_core::alloc::HashMap;
use glassboard_core::geometry::Size;
use glassboard_core::input::{GestureSample, GestureSource, SampleCoalescer};
use glassboard_core::math::Vec2;
use glassboard_core::profiling::{profile_function, profile_scope};

use crate::changes::FrameChanges;
use crate::chrome::{
    BACKGROUND_GRADIENT, CardStyle, HEADER_SUBTITLE, HEADER_TITLE, NAV_ACTIVE_BACKGROUND,
    NAV_ACTIVE_TINT, NAV_BLUR_INTENSITY,
};
use crate::color::Color;
use crate::config::DashboardConfig;
use crate::drag::{DragBounds, DragController, WidgetMoved};
use crate::error::{DashboardError, DashboardResult};
use crate::navigation::{ContentMargin, NavExpansion, NavItem, NavSelection, NavToggled};
use crate::store::WidgetStore;
use crate::view::{CardView, DashboardFrame, LabelView, NavItemView, NavView};
use crate::widget::{Widget, sample_widgets};
use crate::widget_id::WidgetId;

type MovedListener = Box<dyn FnMut(&WidgetMoved)>;
type ToggledListener = Box<dyn FnMut(&NavToggled)>;

/// What happened during one [`Dashboard::frame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Releases committed this frame, in processing order.
    pub moved: Vec<WidgetMoved>,
    /// Whether any animation still needs frames.
    pub animating: bool,
    pub changes: FrameChanges,
}

pub struct Dashboard {
    config: DashboardConfig,
    viewport: Size<f32>,
    store: WidgetStore,
    controllers: HashMap<WidgetId, DragController>,
    pending: HashMap<WidgetId, SampleCoalescer>,
    nav: NavExpansion,
    margin: ContentMargin,
    selection: NavSelection,
    moved_listeners: Vec<MovedListener>,
    toggled_listeners: Vec<ToggledListener>,
    frame_index: u64,
}

impl Dashboard {
    /// Create a dashboard over `widgets` for a viewport of `viewport`.
    pub fn new(
        widgets: impl IntoIterator<Item = Widget>,
        viewport: Size<f32>,
        config: DashboardConfig,
    ) -> DashboardResult<Self> {
        let store = WidgetStore::from_widgets(widgets)?;
        let controllers = store
            .iter()
            .map(|widget| {
                (
                    widget.id(),
                    DragController::for_widget(widget, viewport, config.drag),
                )
            })
            .collect();

        let nav = NavExpansion::new(config.nav);
        let mut margin = ContentMargin::new(config.margin);
        margin.follow(nav.is_expanded());

        tracing::info!(
            widgets = store.len(),
            width = viewport.width,
            height = viewport.height,
            "dashboard created"
        );

        Ok(Self {
            config,
            viewport,
            store,
            controllers,
            pending: HashMap::new(),
            nav,
            margin,
            selection: NavSelection::default(),
            moved_listeners: Vec::new(),
            toggled_listeners: Vec::new(),
            frame_index: 0,
        })
    }

    /// A dashboard populated with the built-in sample widgets.
    pub fn with_sample_widgets(viewport: Size<f32>, config: DashboardConfig) -> DashboardResult<Self> {
        Self::new(sample_widgets(), viewport, config)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size<f32> {
        self.viewport
    }

    /// Recompute every card's release bounds for a new viewport.
    pub fn set_viewport(&mut self, viewport: Size<f32>) {
        self.viewport = viewport;
        for widget in self.store.iter() {
            if let Some(controller) = self.controllers.get_mut(&widget.id()) {
                controller.set_bounds(DragBounds::from_viewport(
                    viewport,
                    widget.size(),
                    self.config.drag.reserved_margin,
                ));
            }
        }
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport changed");
    }

    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.store.get(id)
    }

    pub fn controller(&self, id: WidgetId) -> Option<&DragController> {
        self.controllers.get(&id)
    }

    pub fn nav(&self) -> &NavExpansion {
        &self.nav
    }

    pub fn content_margin(&self) -> f32 {
        self.margin.value()
    }

    pub fn active_nav_item(&self) -> Option<&'static NavItem> {
        self.selection.active()
    }

    /// Register a callback invoked for every committed release.
    pub fn on_widget_moved(&mut self, listener: impl FnMut(&WidgetMoved) + 'static) {
        self.moved_listeners.push(Box::new(listener));
    }

    /// Register a callback invoked whenever the rail's target state flips.
    pub fn on_nav_toggled(&mut self, listener: impl FnMut(&NavToggled) + 'static) {
        self.toggled_listeners.push(Box::new(listener));
    }

    /// Apply one sample right away.
    ///
    /// Samples already queued for this widget are applied first so ordering
    /// is preserved.
    pub fn handle_gesture(
        &mut self,
        id: WidgetId,
        sample: GestureSample,
    ) -> DashboardResult<Option<WidgetMoved>> {
        let controller = self
            .controllers
            .get_mut(&id)
            .ok_or(DashboardError::UnknownWidget(id))?;

        let mut moved = Vec::new();
        if let Some(queue) = self.pending.get_mut(&id) {
            moved.extend(queue.flush().into_iter().filter_map(|s| controller.handle(s)));
        }
        let result = controller.handle(sample);
        moved.extend(result);

        for event in &moved {
            self.commit(event);
        }
        Ok(result)
    }

    /// Queue a sample for the next frame.
    pub fn queue_gesture(&mut self, id: WidgetId, sample: GestureSample) -> DashboardResult<()> {
        if !self.controllers.contains_key(&id) {
            return Err(DashboardError::UnknownWidget(id));
        }
        self.pending.entry(id).or_default().push(sample);
        Ok(())
    }

    /// Queue every sample `source` has pending for widget `id`.
    pub fn pump<S: GestureSource + ?Sized>(&mut self, id: WidgetId, source: &mut S) -> DashboardResult<()> {
        if !self.controllers.contains_key(&id) {
            return Err(DashboardError::UnknownWidget(id));
        }
        let queue = self.pending.entry(id).or_default();
        while let Some(sample) = source.poll_sample() {
            queue.push(sample);
        }
        Ok(())
    }

    /// Apply queued gestures and advance every animation by `dt`.
    pub fn frame(&mut self, dt: Duration) -> FrameReport {
        profile_function!();
        self.frame_index += 1;

        let mut moved = Vec::new();
        let mut changes = FrameChanges::NONE;
        {
            profile_scope!("apply_gestures");
            for id in self.store.ids() {
                let (Some(queue), Some(controller)) =
                    (self.pending.get_mut(&id), self.controllers.get_mut(&id))
                else {
                    continue;
                };
                let samples = queue.flush();
                if !samples.is_empty() {
                    changes |= FrameChanges::TRANSFORM;
                }
                moved.extend(samples.into_iter().filter_map(|s| controller.handle(s)));
            }
        }
        for event in &moved {
            self.commit(event);
        }
        if !moved.is_empty() {
            changes |= FrameChanges::LAYOUT;
        }

        {
            profile_scope!("tick_animations");
            for controller in self.controllers.values_mut() {
                changes |= FrameChanges::from_animation(controller.tick(dt), FrameChanges::TRANSFORM);
            }
            changes |= FrameChanges::from_animation(self.nav.tick(dt), FrameChanges::NAV);
            changes |= FrameChanges::from_animation(self.margin.tick(dt), FrameChanges::MARGIN);
        }
        let animating = self.is_animating();

        tracing::trace!(frame = self.frame_index, committed = moved.len(), animating, ?changes, "frame");
        FrameReport {
            moved,
            animating,
            changes,
        }
    }

    /// Whether any card, the rail or the margin is still moving.
    pub fn is_animating(&self) -> bool {
        self.controllers.values().any(DragController::is_animating)
            || self.nav.is_animating()
            || self.margin.is_animating()
    }

    /// Flip the navigation rail.
    pub fn toggle_nav(&mut self) -> NavToggled {
        let toggled = self.nav.toggle();
        self.margin.follow(toggled.expanded);
        for listener in &mut self.toggled_listeners {
            listener(&toggled);
        }
        toggled
    }

    /// Set the rail's target state. Returns `None` if it was already there.
    pub fn set_nav_expanded(&mut self, expanded: bool) -> Option<NavToggled> {
        if self.nav.is_expanded() == expanded {
            return None;
        }
        Some(self.toggle_nav())
    }

    pub fn select_nav_item(&mut self, id: &str) -> DashboardResult<&'static NavItem> {
        let item = self.selection.select(id)?;
        tracing::info!(item = item.id, "navigation item selected");
        Ok(item)
    }

    /// Move a widget from outside the drag path and resync its controller.
    pub fn set_widget_position(&mut self, id: WidgetId, position: Vec2) -> DashboardResult<()> {
        self.store.set_position(id, position)?;
        if let Some(controller) = self.controllers.get_mut(&id) {
            controller.sync_to(position);
        }
        Ok(())
    }

    /// Build the renderer snapshot for the current state.
    pub fn snapshot(&self) -> DashboardFrame {
        let cards = self
            .store
            .iter()
            .filter_map(|widget| {
                let controller = self.controllers.get(&widget.id())?;
                Some(CardView {
                    id: widget.id(),
                    title: widget.title.clone(),
                    kind: widget.kind,
                    position: controller.position(),
                    rect: controller.rendered_rect(widget.size()),
                    scale: controller.scale(),
                    dragging: controller.is_dragging(),
                    content: widget.content(),
                    style: CardStyle::tinted(widget.color),
                })
            })
            .collect();

        let outputs = self.nav.outputs();
        let items = self
            .selection
            .items()
            .iter()
            .map(|item| {
                let active = self.selection.is_active(item.id);
                NavItemView {
                    item,
                    active,
                    tint: if active { NAV_ACTIVE_TINT } else { Color::WHITE },
                    background: active.then_some(NAV_ACTIVE_BACKGROUND),
                    label: self.nav.labels_visible().then_some(LabelView {
                        text: item.label,
                        opacity: outputs.label_opacity,
                        offset_x: outputs.label_offset_x,
                    }),
                }
            })
            .collect();

        DashboardFrame {
            background: BACKGROUND_GRADIENT,
            header_title: HEADER_TITLE,
            header_subtitle: HEADER_SUBTITLE,
            content_margin: self.margin.value(),
            nav: NavView {
                expanded: self.nav.is_expanded(),
                icon: self.nav.toggle_icon(),
                outputs,
                blur_intensity: NAV_BLUR_INTENSITY,
                items,
            },
            cards,
        }
    }

    fn commit(&mut self, moved: &WidgetMoved) {
        match self.store.apply_move(moved) {
            Ok(()) => {
                tracing::info!(widget = %moved.id, x = moved.x(), y = moved.y(), "widget moved");
                for listener in &mut self.moved_listeners {
                    listener(moved);
                }
            }
            Err(err) => tracing::warn!("dropping release: {}", err),
        }
    }
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("viewport", &self.viewport)
            .field("widgets", &self.store.len())
            .field("nav_expanded", &self.nav.is_expanded())
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const PHONE: Size<f32> = Size::new(375.0, 800.0);

    fn dashboard() -> Dashboard {
        Dashboard::with_sample_widgets(PHONE, DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_handle_gesture_commits_on_release() {
        let mut dash = dashboard();
        let id = WidgetId::new("1");
        dash.handle_gesture(id, GestureSample::start()).unwrap();
        dash.handle_gesture(id, GestureSample::moved(200.0, 0.0)).unwrap();
        let moved = dash
            .handle_gesture(id, GestureSample::end(Vec2::new(200.0, 0.0)))
            .unwrap()
            .unwrap();

        assert_eq!(moved.position, Vec2::new(115.0, 20.0));
        assert_eq!(dash.store().position(id).unwrap(), Vec2::new(115.0, 20.0));
    }

    #[test]
    fn test_queued_moves_coalesce_per_frame() {
        let mut dash = dashboard();
        let id = WidgetId::new("2");
        dash.queue_gesture(id, GestureSample::start()).unwrap();
        for i in 1..=20 {
            dash.queue_gesture(id, GestureSample::moved(-(i as f32), 0.0)).unwrap();
        }
        let report = dash.frame(FRAME);
        assert!(report.moved.is_empty());
        assert!(report.changes.contains(FrameChanges::TRANSFORM));
        assert!(!report.changes.contains(FrameChanges::LAYOUT));
        assert_eq!(dash.controller(id).unwrap().position(), Vec2::new(180.0, 20.0));
        assert_eq!(dash.store().position(id).unwrap(), Vec2::new(200.0, 20.0));
    }

    #[test]
    fn test_unknown_widget_is_rejected() {
        let mut dash = dashboard();
        let ghost = WidgetId::new("ghost");
        assert_eq!(
            dash.handle_gesture(ghost, GestureSample::start()),
            Err(DashboardError::UnknownWidget(ghost))
        );
        assert!(dash.queue_gesture(ghost, GestureSample::start()).is_err());
    }

    #[test]
    fn test_toggle_drives_margin() {
        let mut dash = dashboard();
        assert_eq!(dash.content_margin(), 70.0);
        for _ in 0..30 {
            dash.frame(FRAME);
        }
        assert_eq!(dash.content_margin(), 90.0);

        assert_eq!(dash.toggle_nav(), NavToggled { expanded: true });
        let report = dash.frame(FRAME);
        assert!(report.animating);
        assert!(report.changes.contains(FrameChanges::NAV | FrameChanges::MARGIN));
        for _ in 0..30 {
            dash.frame(FRAME);
        }
        assert!(!dash.is_animating());
        assert_eq!(dash.frame(FRAME).changes, FrameChanges::NONE);
        assert_eq!(dash.content_margin(), 220.0);
        assert_eq!(dash.nav().width(), 200.0);
    }

    #[test]
    fn test_set_nav_expanded_is_idempotent() {
        let mut dash = dashboard();
        assert!(dash.set_nav_expanded(false).is_none());
        assert!(dash.set_nav_expanded(true).is_some());
        assert!(dash.set_nav_expanded(true).is_none());
    }

    #[test]
    fn test_viewport_change_updates_bounds() {
        let mut dash = dashboard();
        dash.set_viewport(Size::new(1024.0, 768.0));
        let bounds = dash.controller(WidgetId::new("1")).unwrap().bounds();
        assert_eq!(bounds.max(), Vec2::new(764.0, 448.0));
    }

    #[test]
    fn test_snapshot_labels_follow_target() {
        let mut dash = dashboard();
        assert!(dash.snapshot().nav.items.iter().all(|i| i.label.is_none()));

        dash.toggle_nav();
        let frame = dash.snapshot();
        assert!(frame.nav.items.iter().all(|i| i.label.is_some()));
        assert_eq!(frame.nav.items[0].label.unwrap().opacity, 0.0);
        assert!(frame.nav.items[0].active);
        assert_eq!(frame.nav.items[0].tint, NAV_ACTIVE_TINT);
    }

    #[test]
    fn test_snapshot_highlights_active_item() {
        let mut dash = dashboard();
        let frame = dash.snapshot();
        assert_eq!(frame.nav.blur_intensity, NAV_BLUR_INTENSITY);
        assert_eq!(frame.nav.items[0].background, Some(NAV_ACTIVE_BACKGROUND));
        assert!(frame.nav.items[1..].iter().all(|i| i.background.is_none()));

        let second = frame.nav.items[1].item.id;
        dash.select_nav_item(second).unwrap();
        let frame = dash.snapshot();
        assert_eq!(frame.nav.items[0].background, None);
        assert_eq!(frame.nav.items[1].background, Some(NAV_ACTIVE_BACKGROUND));
    }

    #[test]
    fn test_stalled_frame_settles_animations() {
        let mut dash = dashboard();
        let id = WidgetId::new("1");
        dash.toggle_nav();
        dash.handle_gesture(id, GestureSample::start()).unwrap();
        dash.frame(FRAME);

        let report = dash.frame(Duration::MAX);
        assert!(!report.animating);
        assert_eq!(dash.nav().width(), 200.0);
        assert_eq!(dash.content_margin(), 220.0);
        let lift = DashboardConfig::default().drag.lift_scale;
        assert_eq!(dash.controller(id).unwrap().scale(), lift);
    }

    #[test]
    fn test_external_position_resyncs_controller() {
        let mut dash = dashboard();
        let id = WidgetId::new("3");
        dash.set_widget_position(id, Vec2::new(60.0, 300.0)).unwrap();
        assert_eq!(dash.controller(id).unwrap().position(), Vec2::new(60.0, 300.0));
        assert_eq!(dash.snapshot().card(id).unwrap().position, Vec2::new(60.0, 300.0));
    }
}
