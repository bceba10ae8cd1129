use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide monotonic id source for one record kind.
///
/// Ids handed out by [`IdCounter::next`] are never reused within a process.
/// Records loaded from disk keep their stored id and call
/// [`IdCounter::observe`] so later allocations land above them.
#[derive(Debug)]
pub struct IdCounter(AtomicU64);

impl IdCounter {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    pub fn observe(&self, id: u64) {
        self.0.fetch_max(id.saturating_add(1), Ordering::Relaxed);
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) static FLASHCARD_IDS: IdCounter = IdCounter::new();
pub(crate) static SET_IDS: IdCounter = IdCounter::new();
pub(crate) static NOTE_IDS: IdCounter = IdCounter::new();
