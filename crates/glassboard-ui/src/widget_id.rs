//! Stable identifiers for dashboard widgets.

use std::fmt;

/// A stable identifier for a dashboard widget.
///
/// Widget ids are derived from a string key with FNV-1a, so the same key always
/// maps to the same id and ids can be built in `const` context for static
/// sample data.
///
/// # Example
/// ```
/// use glassboard_ui::WidgetId;
///
/// const REVENUE: WidgetId = WidgetId::new("1");
/// assert_eq!(REVENUE, WidgetId::from("1"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Create a widget ID from a string key.
    pub const fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create a widget ID from raw u64 (for generated IDs).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    const fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let bytes = s.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        hash
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{:08x}", self.0 as u32)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_is_stable() {
        assert_eq!(WidgetId::new("1"), WidgetId::new("1"));
        assert_ne!(WidgetId::new("1"), WidgetId::new("2"));
    }

    #[test]
    fn test_const_and_runtime_hash_agree() {
        const ID: WidgetId = WidgetId::new("revenue");
        let runtime: WidgetId = String::from("revenue").into();
        assert_eq!(ID, runtime);
    }

    #[test]
    fn test_raw_round_trip() {
        let id = WidgetId::from_raw(7);
        assert_eq!(id.as_u64(), 7);
    }
}
