//! Lookup statistics tracking.
//!
//! Thread-safe counters shared by every request the server handles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupErrorKind;

/// Thread-safe lookup statistics tracker.
///
/// All error kinds are initialized to zero on creation, so increments never
/// allocate and can be shared across tasks behind an `Arc`.
pub struct LookupStats {
    lookups: AtomicUsize,
    defaults_used: AtomicUsize,
    annotated: AtomicUsize,
    errors: HashMap<LookupErrorKind, AtomicUsize>,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in LookupErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }

        LookupStats {
            lookups: AtomicUsize::new(0),
            defaults_used: AtomicUsize::new(0),
            annotated: AtomicUsize::new(0),
            errors,
        }
    }

    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_defaults_used(&self) {
        self.defaults_used.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_annotated(&self) {
        self.annotated.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment an error counter.
    pub fn increment_error(&self, kind: LookupErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map",
                kind
            );
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn defaults_used(&self) -> usize {
        self.defaults_used.load(Ordering::SeqCst)
    }

    pub fn annotated(&self) -> usize {
        self.annotated.load(Ordering::SeqCst)
    }

    /// Get the count for an error kind.
    pub fn get_error_count(&self, kind: LookupErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
