//! Latest-request-wins guard for async responses.
//!
//! The frontend fires requests without cancelling older ones. Each request
//! takes a ticket first; when its response arrives it is applied only if no
//! newer ticket has been issued in the meantime.

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Monotonic ticket counter.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    /// Issue a ticket, superseding every earlier one.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether `ticket` is still the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        let current = ticket.0 == self.latest;
        if !current {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "dropping stale response");
        }
        current
    }

    /// Supersede every outstanding ticket without starting a request, e.g.
    /// when the view that would show the response closes.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::RequestSequencer;

    #[test]
    fn newest_ticket_wins_regardless_of_resolution_order() {
        let mut seq = RequestSequencer::default();
        let slow = seq.begin();
        let fast = seq.begin();

        // fast resolves first, slow resolves afterwards
        assert!(seq.is_current(fast));
        assert!(!seq.is_current(slow));
    }

    #[test]
    fn invalidate_drops_in_flight_ticket() {
        let mut seq = RequestSequencer::default();
        let ticket = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn tickets_increase() {
        let mut seq = RequestSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert!(seq.is_current(b));
    }
}
