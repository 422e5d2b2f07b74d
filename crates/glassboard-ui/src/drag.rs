//! Drag controller for dashboard widget cards.
//!
//! Each card owns one [`DragController`]. The controller turns a pointer
//! gesture into a live position and, on release, into a clamped committed
//! position reported as a [`WidgetMoved`] event:
//!
//! * `start` captures the committed position as the base and zeroes the live
//!   offset;
//! * `move` replaces the live offset with the gesture's cumulative delta, and
//!   the rendered position tracks `base + offset` 1:1;
//! * `end` folds the offset into the base, clamps each axis into the
//!   [`DragBounds`], snaps to the clamped value and reports it.
//!
//! The lift feedback is a spring on the card's scale running alongside.

use std::time::Duration;

use glassboard_core::geometry::{Rect, Size};
use glassboard_core::input::{GesturePhase, GestureSample, GestureSource};
use glassboard_core::math::{Vec2, clamp_to_extent};

use crate::animation::{AnimatedValue, AnimationState};
use crate::config::DragConfig;
use crate::widget::Widget;
use crate::widget_id::WidgetId;

/// The area a released card's origin is clamped into: `[0, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    max: Vec2,
}

impl DragBounds {
    /// Bounds with the given upper limits. Negative limits are floored at 0,
    /// which pins the card to the origin.
    pub fn new(max_x: f32, max_y: f32) -> Self {
        Self {
            max: Vec2::new(max_x.max(0.0), max_y.max(0.0)),
        }
    }

    /// `viewport - widget - reserved` per axis.
    pub fn from_viewport(viewport: Size<f32>, widget: Size<f32>, reserved: Vec2) -> Self {
        let free = viewport - widget;
        Self::new(free.width - reserved.x, free.height - reserved.y)
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Clamp each axis independently.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            clamp_to_extent(position.x, self.max.x),
            clamp_to_extent(position.y, self.max.y),
        )
    }

    pub fn contains(&self, position: Vec2) -> bool {
        self.clamp(position) == position
    }
}

/// Emitted once per completed gesture with the clamped final position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetMoved {
    pub id: WidgetId,
    pub position: Vec2,
}

impl WidgetMoved {
    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Position state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// The committed position the current gesture is relative to.
    pub base_position: Vec2,
    /// Unclamped delta of the in-progress gesture.
    pub live_offset: Vec2,
}

impl DragState {
    pub fn at(position: Vec2) -> Self {
        Self {
            base_position: position,
            live_offset: Vec2::ZERO,
        }
    }

    /// The rendered position.
    pub fn position(&self) -> Vec2 {
        self.base_position + self.live_offset
    }

    /// Fold the live offset into the base.
    pub fn flatten(&mut self) {
        self.base_position += self.live_offset;
        self.live_offset = Vec2::ZERO;
    }
}

/// Per-card drag controller.
#[derive(Debug, Clone)]
pub struct DragController {
    id: WidgetId,
    state: DragState,
    dragging: bool,
    scale: AnimatedValue,
    bounds: DragBounds,
    config: DragConfig,
}

impl DragController {
    /// Create a controller for a card resting at `position`.
    pub fn new(id: WidgetId, position: Vec2, bounds: DragBounds, config: DragConfig) -> Self {
        Self {
            id,
            state: DragState::at(position),
            dragging: false,
            scale: AnimatedValue::new(1.0),
            bounds,
            config,
        }
    }

    /// Create a controller for `widget`, deriving bounds from the viewport.
    pub fn for_widget(widget: &Widget, viewport: Size<f32>, config: DragConfig) -> Self {
        let bounds = DragBounds::from_viewport(viewport, widget.size(), config.reserved_margin);
        Self::new(widget.id(), widget.position(), bounds, config)
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The rendered position: `base + live offset`.
    pub fn position(&self) -> Vec2 {
        self.state.position()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the scale feedback is still moving.
    pub fn is_animating(&self) -> bool {
        self.scale.is_animating()
    }

    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    /// Replace the release bounds, e.g. after the viewport changed.
    pub fn set_bounds(&mut self, bounds: DragBounds) {
        self.bounds = bounds;
    }

    /// Rendered rect for a card of `size`, including the lift scale.
    pub fn rendered_rect(&self, size: Size<f32>) -> Rect {
        Rect::from_origin_size(self.position(), size).scaled_about_center(self.scale())
    }

    /// Pointer pressed on the card.
    pub fn on_gesture_start(&mut self) {
        if self.dragging {
            tracing::debug!(widget = %self.id, "gesture restarted before release");
        }
        self.state = DragState::at(self.state.position());
        self.dragging = true;
        self.scale.spring_to(self.config.lift_scale, self.config.spring);
        tracing::debug!(widget = %self.id, base = ?self.state.base_position, "drag started");
    }

    /// Pointer moved; `delta` is the total delta since the gesture started.
    pub fn on_gesture_move(&mut self, delta: Vec2) {
        if !self.dragging {
            tracing::debug!(widget = %self.id, "move without start, starting drag implicitly");
            self.on_gesture_start();
        }
        self.state.live_offset = delta;
        tracing::trace!(widget = %self.id, position = ?self.state.position(), "drag moved");
    }

    /// Pointer released. Flattens, clamps, snaps and reports the result.
    ///
    /// Safe to call without a preceding start: the offset is already zero, so
    /// the committed position is clamped and reported unchanged.
    pub fn on_gesture_end(&mut self) -> WidgetMoved {
        if !self.dragging {
            tracing::debug!(widget = %self.id, "release without start");
        }
        self.state.flatten();
        let raw = self.state.base_position;
        let clamped = self.bounds.clamp(raw);
        self.state = DragState::at(clamped);
        self.dragging = false;
        self.scale.spring_to(1.0, self.config.spring);

        if raw != clamped {
            tracing::debug!(widget = %self.id, ?raw, ?clamped, "drag released out of bounds");
        } else {
            tracing::debug!(widget = %self.id, position = ?clamped, "drag released");
        }

        WidgetMoved {
            id: self.id,
            position: clamped,
        }
    }

    /// Dispatch one sample. Returns the release event for `End` samples.
    pub fn handle(&mut self, sample: GestureSample) -> Option<WidgetMoved> {
        match sample.phase {
            GesturePhase::Start => {
                self.on_gesture_start();
                None
            }
            GesturePhase::Move => {
                self.on_gesture_move(sample.delta);
                None
            }
            GesturePhase::End => Some(self.on_gesture_end()),
        }
    }

    /// Drain `source`, invoking `on_moved` for every completed gesture.
    pub fn drive<S, F>(&mut self, source: &mut S, mut on_moved: F)
    where
        S: GestureSource + ?Sized,
        F: FnMut(WidgetMoved),
    {
        while let Some(sample) = source.poll_sample() {
            if let Some(moved) = self.handle(sample) {
                on_moved(moved);
            }
        }
    }

    /// The authoritative position changed from outside this controller.
    ///
    /// An in-progress gesture keeps its offset relative to the new base.
    pub fn sync_to(&mut self, position: Vec2) {
        if self.state.base_position == position {
            return;
        }
        tracing::debug!(widget = %self.id, from = ?self.state.base_position, to = ?position, "position resynced");
        self.state.base_position = position;
    }

    /// Advance the scale feedback.
    pub fn tick(&mut self, dt: Duration) -> AnimationState {
        self.scale.tick(dt)
    }
}
