use loglink::LoggerEventListener;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type Snapshot = Arc<[Arc<dyn LoggerEventListener>]>;

/// Identity-keyed, copy-on-write set of listeners.
///
/// Mutations replace the whole slice under the write lock, so they are
/// linearizable. Readers clone the current slice and iterate it without
/// holding any lock, which lets a listener add or remove listeners while it
/// is being notified.
pub(crate) struct ListenerSet {
    current: RwLock<Snapshot>,
}

impl ListenerSet {
    pub(crate) fn new() -> Self {
        ListenerSet::from_snapshot(Arc::from(Vec::new()))
    }

    pub(crate) fn from_snapshot(snapshot: Snapshot) -> Self {
        ListenerSet {
            current: RwLock::new(snapshot),
        }
    }

    /// Returns `false` if the very same listener is already present.
    pub(crate) fn insert(&self, listener: Arc<dyn LoggerEventListener>) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.iter().any(|existing| same_listener(existing, &listener)) {
            return false;
        }
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(listener);
        *current = next.into();
        true
    }

    /// Returns `false` if the listener was not present.
    pub(crate) fn remove(&self, listener: &Arc<dyn LoggerEventListener>) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if !current.iter().any(|existing| same_listener(existing, listener)) {
            return false;
        }
        *current = current
            .iter()
            .filter(|existing| !same_listener(existing, listener))
            .cloned()
            .collect();
        true
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}

/// Identity comparison on the data pointer only; vtable pointers of the same
/// object may differ between codegen units.
fn same_listener(a: &Arc<dyn LoggerEventListener>, b: &Arc<dyn LoggerEventListener>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
