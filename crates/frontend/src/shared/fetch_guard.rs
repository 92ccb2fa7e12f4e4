//! Discards responses that arrive after their view has moved on.
//!
//! Every fetch takes a ticket with [`FetchGuard::begin`]. Starting a newer
//! fetch, or calling [`FetchGuard::invalidate`] from `on_cleanup`, makes
//! every older ticket stale; callers check [`FetchGuard::is_current`] before
//! writing a result into their signals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; supersedes every ticket handed out before.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Make every outstanding ticket stale (navigation / unmount).
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_invalidate_makes_all_stale() {
        let guard = FetchGuard::new();
        let ticket = guard.begin();
        guard.clone().invalidate();
        assert!(!guard.is_current(ticket));

        let next = guard.begin();
        assert!(guard.is_current(next));
    }
}
