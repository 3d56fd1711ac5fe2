use std::sync::atomic::{AtomicU64, Ordering};

/// Stale-response guard.
///
/// Every request a screen issues takes a ticket; only the holder of the most
/// recent ticket may publish its response. Older responses are dropped when
/// they settle.
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: AtomicU64,
}

/// Proof of which request a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_tickets_are_distinct() {
        let guard = RequestGuard::new();
        let a = guard.begin();
        let b = guard.begin();
        assert_ne!(a, b);
    }
}
