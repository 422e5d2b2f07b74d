//! Dashboard widget records and their static card content.

use glassboard_core::geometry::{Rect, Size};
use glassboard_core::math::Vec2;

use crate::color::Color;
use crate::widget_id::WidgetId;

/// The kind of card a widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Stat,
    Chart,
    Progress,
}

/// A widget record as held by the [`WidgetStore`](crate::WidgetStore).
///
/// Records are values: a move produces a new record through
/// [`Widget::with_position`] and leaves every other field untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    id: WidgetId,
    pub title: String,
    pub kind: WidgetKind,
    pub color: Color,
    position: Vec2,
    size: Size<f32>,
}

impl Widget {
    pub fn new(
        id: impl Into<WidgetId>,
        title: impl Into<String>,
        kind: WidgetKind,
        color: Color,
        position: Vec2,
        size: Size<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            color,
            position,
            size,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Size<f32> {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// A copy of this record placed at `position`.
    #[must_use]
    pub fn with_position(&self, position: Vec2) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Static card content for this widget.
    pub fn content(&self) -> WidgetContent {
        WidgetContent::for_widget(self)
    }
}

/// A glyph drawn in place of chart data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartGlyph {
    TrendingUp,
}

/// What a card displays, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetContent {
    Stat {
        value: &'static str,
        label: String,
        change: &'static str,
    },
    Chart {
        label: String,
        glyph: ChartGlyph,
        value: &'static str,
    },
    Progress {
        label: String,
        /// Fill fraction in `[0, 1]`.
        fraction: f32,
        bar_color: Color,
        value: &'static str,
    },
}

impl WidgetContent {
    pub fn for_widget(widget: &Widget) -> Self {
        let label = widget.title.clone();
        match widget.kind {
            WidgetKind::Stat => WidgetContent::Stat {
                value: "$24.8K",
                label,
                change: "+12.5%",
            },
            WidgetKind::Chart => WidgetContent::Chart {
                label,
                glyph: ChartGlyph::TrendingUp,
                value: "1,847",
            },
            WidgetKind::Progress => WidgetContent::Progress {
                label,
                fraction: 0.78,
                bar_color: widget.color,
                value: "78%",
            },
        }
    }

    /// The headline figure shown on the card.
    pub fn value(&self) -> &'static str {
        match self {
            WidgetContent::Stat { value, .. }
            | WidgetContent::Chart { value, .. }
            | WidgetContent::Progress { value, .. } => *value,
        }
    }
}

/// Size shared by all sample cards.
pub const SAMPLE_WIDGET_SIZE: Size<f32> = Size::new(160.0, 120.0);

/// The four cards shown on a fresh dashboard.
pub fn sample_widgets() -> Vec<Widget> {
    [
        ("1", "Revenue", WidgetKind::Stat, 0x007AFF, (20.0, 20.0)),
        ("2", "Users", WidgetKind::Chart, 0x34C759, (200.0, 20.0)),
        ("3", "Performance", WidgetKind::Progress, 0xFF9500, (20.0, 160.0)),
        ("4", "Conversion", WidgetKind::Stat, 0xFF3B30, (200.0, 160.0)),
    ]
    .into_iter()
    .map(|(id, title, kind, hex, (x, y))| {
        Widget::new(
            id,
            title,
            kind,
            Color::from_hex(hex),
            Vec2::new(x, y),
            SAMPLE_WIDGET_SIZE,
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_position_only_changes_position() {
        let widget = sample_widgets().remove(0);
        let moved = widget.with_position(Vec2::new(115.0, 20.0));
        assert_eq!(moved.position(), Vec2::new(115.0, 20.0));
        assert_eq!(moved.id(), widget.id());
        assert_eq!(moved.title, widget.title);
        assert_eq!(moved.size(), widget.size());
        assert_eq!(moved.color, widget.color);
        assert_eq!(widget.position(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_content_per_kind() {
        let widgets = sample_widgets();
        assert_eq!(widgets[0].content().value(), "$24.8K");
        assert!(matches!(widgets[1].content(), WidgetContent::Chart { value: "1,847", .. }));
        match widgets[2].content() {
            WidgetContent::Progress {
                fraction,
                bar_color,
                label,
                ..
            } => {
                assert_eq!(fraction, 0.78);
                assert_eq!(bar_color, Color::from_hex(0xFF9500));
                assert_eq!(label, "Performance");
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let widgets = sample_widgets();
        for (i, a) in widgets.iter().enumerate() {
            for b in &widgets[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
