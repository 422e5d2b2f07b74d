//! Error types for the dashboard.

use std::fmt;

use crate::widget_id::WidgetId;

/// Misuse of the dashboard's stores and controllers.
///
/// None of these are fatal; the screen logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// No widget with this id exists in the store.
    UnknownWidget(WidgetId),

    /// A widget with this id is already in the store.
    DuplicateWidget(WidgetId),

    /// No navigation item has this id.
    UnknownNavItem(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::UnknownWidget(id) => write!(f, "Unknown widget: {}", id),
            DashboardError::DuplicateWidget(id) => write!(f, "Widget already exists: {}", id),
            DashboardError::UnknownNavItem(item) => write!(f, "Unknown navigation item: '{}'", item),
        }
    }
}

impl std::error::Error for DashboardError {}

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
