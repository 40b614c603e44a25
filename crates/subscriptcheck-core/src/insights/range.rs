use chrono::NaiveDate;

use crate::insights::date::first_of_month_before;
use crate::insights::types::{TimeRange, Transaction};

impl TimeRange {
    /// Inclusive lower bound of the window, `None` when unbounded.
    pub fn cutoff(self, reference: NaiveDate) -> Option<NaiveDate> {
        self.months_back()
            .map(|months| first_of_month_before(reference, months))
    }
}

/// Keeps transactions dated on or after the window start, preserving input order.
pub fn filter_by_range(
    transactions: &[Transaction],
    range: TimeRange,
    reference: NaiveDate,
) -> Vec<Transaction> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let cutoff = range.cutoff(reference).unwrap_or(NaiveDate::MIN);
    transactions
        .iter()
        .filter(|transaction| transaction.date >= cutoff)
        .cloned()
        .collect()
}
