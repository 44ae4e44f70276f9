//! # Notes Request State
//!
//! Tracks in-flight notes requests so that only the newest one may write
//! into the workspace.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Latest Request Wins                                  │
//! │                                                                         │
//! │  click #1 ──► begin() = 1 ─────────── slow call ────────► finish(1)    │
//! │  click #2 ──► begin() = 2 ── fast call ──► finish(2)          │         │
//! │                                               │               ▼         │
//! │                                           current? yes   current? no    │
//! │                                           write notes    drop result    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Ticket handed out by [`NotesState::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesTicket(u64);

/// Shared notes request bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct NotesState {
    generation: Arc<AtomicU64>,
    in_flight: Arc<AtomicUsize>,
}

impl NotesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request and supersedes every earlier one.
    pub fn begin(&self) -> NotesTicket {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        NotesTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if no newer request has started since `ticket` was issued.
    pub fn is_current(&self, ticket: NotesTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Ends a request, whether or not its result was used.
    pub fn finish(&self, _ticket: NotesTicket) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// Drives the "generating..." indicator.
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let state = NotesState::new();
        assert!(!state.is_generating());

        let first = state.begin();
        let second = state.begin();

        assert!(!state.is_current(first));
        assert!(state.is_current(second));
        assert!(state.is_generating());

        state.finish(first);
        assert!(state.is_generating());
        state.finish(second);
        assert!(!state.is_generating());
    }
}
