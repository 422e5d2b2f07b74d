//! The authoritative widget list.

use indexmap::IndexMap;

use glassboard_core::math::Vec2;

use crate::drag::WidgetMoved;
use crate::error::{DashboardError, DashboardResult};
use crate::widget::Widget;
use crate::widget_id::WidgetId;

/// Flat id -> widget mapping, kept in insertion (paint) order.
///
/// The only mutation after construction is [`apply_move`](Self::apply_move),
/// which swaps in a repositioned copy of the record.
#[derive(Debug, Clone, Default)]
pub struct WidgetStore {
    widgets: IndexMap<WidgetId, Widget>,
    revision: u64,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records. Fails on the first repeated id.
    pub fn from_widgets(widgets: impl IntoIterator<Item = Widget>) -> DashboardResult<Self> {
        let mut store = Self::new();
        for widget in widgets {
            store.insert(widget)?;
        }
        Ok(store)
    }

    pub fn insert(&mut self, widget: Widget) -> DashboardResult<()> {
        let id = widget.id();
        if self.widgets.contains_key(&id) {
            return Err(DashboardError::DuplicateWidget(id));
        }
        self.widgets.insert(id, widget);
        self.revision += 1;
        Ok(())
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub fn position(&self, id: WidgetId) -> DashboardResult<Vec2> {
        self.get(id)
            .map(Widget::position)
            .ok_or(DashboardError::UnknownWidget(id))
    }

    /// Replace the position of the widget named by `moved`.
    pub fn apply_move(&mut self, moved: &WidgetMoved) -> DashboardResult<()> {
        self.set_position(moved.id, moved.position)
    }

    pub fn set_position(&mut self, id: WidgetId, position: Vec2) -> DashboardResult<()> {
        let slot = self
            .widgets
            .get_mut(&id)
            .ok_or(DashboardError::UnknownWidget(id))?;
        if slot.position() != position {
            *slot = slot.with_position(position);
            self.revision += 1;
        }
        Ok(())
    }

    /// Bumped on every insert and every effective move.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::sample_widgets;

    #[test]
    fn test_apply_move_updates_only_target() {
        let mut store = WidgetStore::from_widgets(sample_widgets()).unwrap();
        let revenue = WidgetId::new("1");
        let users = WidgetId::new("2");

        store
            .apply_move(&WidgetMoved {
                id: revenue,
                position: Vec2::new(115.0, 20.0),
            })
            .unwrap();

        assert_eq!(store.position(revenue).unwrap(), Vec2::new(115.0, 20.0));
        assert_eq!(store.position(users).unwrap(), Vec2::new(200.0, 20.0));
        assert_eq!(store.get(revenue).unwrap().title, "Revenue");
    }

    #[test]
    fn test_unknown_widget() {
        let mut store = WidgetStore::from_widgets(sample_widgets()).unwrap();
        let ghost = WidgetId::new("ghost");
        assert_eq!(
            store.set_position(ghost, Vec2::ZERO),
            Err(DashboardError::UnknownWidget(ghost))
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut widgets = sample_widgets();
        widgets.push(widgets[0].clone());
        let err = WidgetStore::from_widgets(widgets).unwrap_err();
        assert_eq!(err, DashboardError::DuplicateWidget(WidgetId::new("1")));
    }

    #[test]
    fn test_revision_ignores_noop_moves() {
        let mut store = WidgetStore::from_widgets(sample_widgets()).unwrap();
        let before = store.revision();
        store.set_position(WidgetId::new("1"), Vec2::new(20.0, 20.0)).unwrap();
        assert_eq!(store.revision(), before);
        store.set_position(WidgetId::new("1"), Vec2::new(21.0, 20.0)).unwrap();
        assert_eq!(store.revision(), before + 1);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let store = WidgetStore::from_widgets(sample_widgets()).unwrap();
        let titles: Vec<_> = store.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["Revenue", "Users", "Performance", "Conversion"]);
    }
}
