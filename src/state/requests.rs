// ============================================================================
// REQUEST TRACKER - Secuencia monotónica por loader
// ============================================================================
// Cada carga pide un ticket; al volver la respuesta solo se aplica si su
// ticket sigue siendo el último emitido para ese loader.
// ============================================================================

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    UserBookings,
    AdminBookings,
    UserPayments,
    Services,
    ProviderReviews,
    EarningsDashboard,
    PaymentHistory,
    PendingProviders,
    Profile,
    NotificationCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub loader: Loader,
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: HashMap<Loader, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, loader: Loader) -> RequestTicket {
        let seq = self.latest.entry(loader).or_insert(0);
        *seq += 1;
        RequestTicket { loader, seq: *seq }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.get(&ticket.loader) == Some(&ticket.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(Loader::UserPayments);
        let second = tracker.begin(Loader::UserPayments);
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert!(second.seq > first.seq);
    }

    #[test]
    fn loaders_are_independent() {
        let mut tracker = RequestTracker::new();
        let payments = tracker.begin(Loader::UserPayments);
        let _services = tracker.begin(Loader::Services);
        let _services = tracker.begin(Loader::Services);
        assert!(tracker.is_current(&payments));
    }
}
