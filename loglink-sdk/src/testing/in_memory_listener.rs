use loglink::{LogEvent, LoggerEventListener};
use std::sync::{Arc, Mutex, PoisonError};

/// A listener that stores the events it receives.
///
/// Clones share their storage, but each clone wrapped in its own `Arc` is a
/// distinct listener for registration purposes.
#[derive(Clone, Debug, Default)]
pub struct InMemoryListener {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl InMemoryListener {
    /// Returns the events received so far, in notification order.
    pub fn get_emitted_events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears the internal (in-memory) storage.
    pub fn reset(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LoggerEventListener for InMemoryListener {
    fn accept(&self, event: &LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
