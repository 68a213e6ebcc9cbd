//! Identity types for windows.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for window IDs. Starts at 1 so the first window is `#1`.
static WINDOW_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-wide identity of a window.
///
/// Identities are for diagnostics only: nothing in the memory model depends
/// on them, and they are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(u64);

impl WindowId {
    /// Issues the next unique window ID.
    #[must_use]
    pub fn next() -> Self {
        Self(WINDOW_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
