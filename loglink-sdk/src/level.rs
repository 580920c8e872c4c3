use loglink::Level;
use std::sync::atomic::{AtomicU8, Ordering};

/// A [`Level`] that can be replaced through a shared reference.
///
/// Loads and stores are relaxed: a reader may briefly see the previous
/// threshold after a concurrent `store`.
#[derive(Debug)]
pub(crate) struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub(crate) fn new(level: Level) -> Self {
        AtomicLevel(AtomicU8::new(level as u8))
    }

    #[inline]
    pub(crate) fn load(&self) -> Level {
        // only valid levels are ever stored
        Level::from_u8(self.0.load(Ordering::Relaxed)).unwrap_or_default()
    }

    #[inline]
    pub(crate) fn store(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_loads_every_level() {
        let cell = AtomicLevel::new(Level::Info);
        assert_eq!(cell.load(), Level::Info);
        for level in Level::ALL {
            cell.store(level);
            assert_eq!(cell.load(), level);
        }
    }
}
