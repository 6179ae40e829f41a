//! Ordered event log shared across capability fakes.

use std::sync::{Arc, Mutex};

/// A cheaply clonable, thread-safe journal of capability invocations.
///
/// Every fake handed to a suite records its calls here, so a test can assert
/// cross-capability ordering (e.g. checkout strictly before prefetch) from a
/// single place.
#[derive(Clone, Default)]
pub struct CallJournal {
    events: Arc<Mutex<Vec<String>>>,
}

impl CallJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    /// Snapshot of all events in recording order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Position of the first event equal to `event`, if any.
    pub fn position(&self, event: &str) -> Option<usize> {
        self.events.lock().unwrap().iter().position(|e| e == event)
    }

    /// Number of events equal to `event`.
    pub fn count(&self, event: &str) -> usize {
        self.events.lock().unwrap().iter().filter(|e| *e == event).count()
    }

    /// Assert that `earlier` was recorded and precedes every occurrence of
    /// `later` (which must also be present).
    ///
    /// # Panics
    /// Panics with a descriptive message if either event is missing or the
    /// order is violated.
    pub fn assert_precedes(&self, earlier: &str, later: &str) {
        let events = self.events();
        let first = events
            .iter()
            .position(|e| e == earlier)
            .unwrap_or_else(|| panic!("event '{earlier}' was never recorded: {events:?}"));
        let second = events
            .iter()
            .position(|e| e == later)
            .unwrap_or_else(|| panic!("event '{later}' was never recorded: {events:?}"));
        assert!(
            first < second,
            "expected '{earlier}' before '{later}', got: {events:?}"
        );
    }
}
