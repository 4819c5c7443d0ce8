//! Query state of the reports page.
//!
//! The stats and the hiring series load in parallel behind one loading
//! flag. Results carry the ticket of the filter state that issued them;
//! a ticket minted before the latest `begin()` is stale and its result
//! (or failure) is discarded, so a slow response for old filters can
//! never shadow a newer one.

use contracts::dashboards::d100_management_reports::{MonthlyHiring, ReportStats};

/// Ticket of one filter generation; both reads of a refresh share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportQueryState {
    generation: u64,
    pending: u8,
    pub stats: Option<ReportStats>,
    pub hiring: Vec<MonthlyHiring>,
}

impl ReportQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh for the current filters: both reads become pending
    /// and every earlier ticket goes stale.
    pub fn begin(&mut self) -> QueryTicket {
        self.generation += 1;
        self.pending = 2;
        QueryTicket {
            generation: self.generation,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Settle the stats read. Failures keep the previously rendered
    /// stats; the caller is responsible for notifying. Returns `false`
    /// for stale tickets, which change nothing.
    pub fn apply_stats(&mut self, ticket: QueryTicket, result: Result<ReportStats, ()>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        if let Ok(stats) = result {
            self.stats = Some(stats);
        }
        true
    }

    /// Settle the hiring series read, same contract as `apply_stats`.
    pub fn apply_hiring(
        &mut self,
        ticket: QueryTicket,
        result: Result<Vec<MonthlyHiring>, ()>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        if let Ok(hiring) = result {
            self.hiring = hiring;
        }
        true
    }

    fn settle(&mut self, ticket: QueryTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(admissions: u32) -> ReportStats {
        ReportStats {
            admissions,
            departures: 1,
            replacements: 0,
            turnover: 2.5,
        }
    }

    #[test]
    fn loading_clears_after_both_reads_settle() {
        let mut state = ReportQueryState::new();
        let ticket = state.begin();
        assert!(state.is_loading());

        assert!(state.apply_stats(ticket, Ok(stats(3))));
        assert!(state.is_loading());
        assert!(state.apply_hiring(ticket, Ok(vec![])));
        assert!(!state.is_loading());
        assert_eq!(state.stats.as_ref().map(|s| s.admissions), Some(3));
    }

    #[test]
    fn stale_result_never_overwrites_newer_generation() {
        let mut state = ReportQueryState::new();
        let old = state.begin();
        let new = state.begin();

        assert!(state.apply_stats(new, Ok(stats(7))));
        // The slow response for the old filters lands afterwards.
        assert!(!state.apply_stats(old, Ok(stats(1))));
        assert_eq!(state.stats.as_ref().map(|s| s.admissions), Some(7));

        assert!(state.apply_hiring(new, Ok(vec![])));
        assert!(!state.is_loading());
        assert!(!state.apply_hiring(old, Ok(vec![])));
    }

    #[test]
    fn one_failure_does_not_block_the_other_result() {
        let mut state = ReportQueryState::new();
        let ticket = state.begin();

        assert!(state.apply_stats(ticket, Err(())));
        assert!(state.apply_hiring(
            ticket,
            Ok(vec![MonthlyHiring {
                month: "2025-03".to_string(),
                total: 4,
            }])
        ));
        assert!(!state.is_loading());
        assert_eq!(state.hiring.len(), 1);
        assert!(state.stats.is_none());
    }

    #[test]
    fn failure_keeps_previously_rendered_data() {
        let mut state = ReportQueryState::new();
        let first = state.begin();
        state.apply_stats(first, Ok(stats(5)));
        state.apply_hiring(first, Ok(vec![]));

        let second = state.begin();
        state.apply_stats(second, Err(()));
        assert_eq!(state.stats.as_ref().map(|s| s.admissions), Some(5));
    }

    #[test]
    fn stale_settle_does_not_touch_pending_count() {
        let mut state = ReportQueryState::new();
        let old = state.begin();
        let new = state.begin();

        assert!(!state.apply_stats(old, Ok(stats(1))));
        assert!(!state.apply_hiring(old, Err(())));
        assert!(state.is_loading());

        state.apply_stats(new, Ok(stats(2)));
        state.apply_hiring(new, Ok(vec![]));
        assert!(!state.is_loading());
    }
}
