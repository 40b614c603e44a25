use std::collections::BTreeMap;

use crate::insights::date::{month_key, month_label};
use crate::insights::types::{MonthBucket, Transaction};

/// Buckets spend by calendar month, oldest month first.
///
/// The input is expected to be range-filtered already; no window is applied here.
pub fn aggregate_monthly(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<String, MonthBucket> = BTreeMap::new();

    for transaction in transactions {
        let key = month_key(&transaction.date);
        let bucket = buckets.entry(key.clone()).or_insert_with(|| MonthBucket {
            key,
            label: month_label(&transaction.date),
            total: rust_decimal::Decimal::ZERO,
        });
        bucket.total = bucket.total.saturating_add(transaction.amount);
    }

    tracing::debug!(
        transactions = transactions.len(),
        months = buckets.len(),
        "aggregated monthly trend"
    );

    buckets.into_values().collect()
}
