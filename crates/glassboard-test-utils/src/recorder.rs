//! Event recording for callback-based APIs.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared, cloneable log of events.
///
/// Hand [`callback`](Self::callback) to an API that takes a listener, keep a
/// clone of the sink, and assert on [`events`](Self::events) afterwards.
///
/// ```rust
/// use glassboard_test_utils::RecordingSink;
///
/// let sink = RecordingSink::new();
/// let mut listener = sink.callback();
/// listener(&3);
/// listener(&4);
/// assert_eq!(sink.events(), vec![3, 4]);
/// ```
#[derive(Debug)]
pub struct RecordingSink<T> {
    events: Arc<Mutex<Vec<T>>>,
}

impl<T> RecordingSink<T> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, event: T) {
        self.events.lock().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<T: Clone> RecordingSink<T> {
    pub fn events(&self) -> Vec<T> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.events.lock().last().cloned()
    }
}

impl<T: Clone + 'static> RecordingSink<T> {
    /// A listener closure that records a clone of every event it sees.
    pub fn callback(&self) -> impl FnMut(&T) + use<T> {
        let events = Arc::clone(&self.events);
        move |event: &T| events.lock().push(event.clone())
    }
}

impl<T> Clone for RecordingSink<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}
