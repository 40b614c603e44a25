use chrono::NaiveDate;

use crate::insights::category::aggregate_categories;
use crate::insights::kpi::summarize;
use crate::insights::range::filter_by_range;
use crate::insights::trend::aggregate_monthly;
use crate::insights::types::{CategoryBreakdown, KpiSummary, MonthBucket, TimeRange, Transaction};

/// Everything the dashboard renders for one range selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsView {
    pub range: TimeRange,
    pub reference: NaiveDate,
    pub cutoff: Option<NaiveDate>,
    pub filtered_count: usize,
    pub trend: Vec<MonthBucket>,
    pub categories: CategoryBreakdown,
    pub kpis: KpiSummary,
}

pub fn build_insights(
    snapshot: &[Transaction],
    range: TimeRange,
    reference: NaiveDate,
) -> InsightsView {
    let filtered = filter_by_range(snapshot, range, reference);
    let trend = aggregate_monthly(&filtered);
    let categories = aggregate_categories(&filtered);
    // KPIs describe the whole snapshot, not the selected window.
    let kpis = summarize(snapshot);

    tracing::debug!(
        range = range.as_str(),
        snapshot = snapshot.len(),
        filtered = filtered.len(),
        "built insights view"
    );

    InsightsView {
        range,
        reference,
        cutoff: range.cutoff(reference),
        filtered_count: filtered.len(),
        trend,
        categories,
        kpis,
    }
}

/// Newest first; transactions sharing a date keep their input order.
pub fn recent_transactions(snapshot: &[Transaction], limit: Option<usize>) -> Vec<Transaction> {
    let mut rows = snapshot.to_vec();
    rows.sort_by(|left, right| right.date.cmp(&left.date));
    if let Some(max_rows) = limit {
        rows.truncate(max_rows);
    }
    rows
}
