use crate::LogEvent;

/// An in-process observer of emitted log messages.
///
/// Listeners are invoked synchronously on the thread that logged, after the
/// message has been forwarded to the backend. They are held as
/// `Arc<dyn LoggerEventListener>` and compared by identity: registering the
/// same `Arc` twice has no effect, and removal needs a clone of the very
/// `Arc` that was registered.
///
/// A panicking listener is not isolated; the panic reaches the caller of the
/// logging method.
///
/// Any `Fn(&LogEvent) + Send + Sync` closure is a listener.
///
/// ```
/// use loglink::{LogEvent, LoggerEventListener};
/// use std::sync::Arc;
///
/// let listener: Arc<dyn LoggerEventListener> = Arc::new(|event: &LogEvent| {
///     eprintln!("{event}");
/// });
/// # let _ = listener;
/// ```
pub trait LoggerEventListener: Send + Sync {
    /// Called once per accepted log message.
    fn accept(&self, event: &LogEvent);
}

impl<F> LoggerEventListener for F
where
    F: Fn(&LogEvent) + Send + Sync,
{
    fn accept(&self, event: &LogEvent) {
        self(event)
    }
}
