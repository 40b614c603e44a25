use chrono::NaiveDate;

use crate::InsightsResult;
use crate::commands::common::sample_snapshot;
use crate::commands::insights::insights_data;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::insights::sample::sample_transactions;
use crate::insights::types::TimeRange;
use crate::settings::resolve_reference_date;

#[derive(Debug)]
pub struct DemoRunOptions {
    pub range: TimeRange,
    pub as_of: Option<String>,
    pub today: NaiveDate,
}

/// Renders the insights view over the built-in sample snapshot.
pub fn run_with_options(options: DemoRunOptions) -> InsightsResult<SuccessEnvelope> {
    let reference = resolve_reference_date(options.as_of.as_deref(), options.today, "demo")?;
    let loaded = sample_snapshot(sample_transactions(reference));
    let data = insights_data(loaded, options.range, reference);

    tracing::info!(
        range = data.range.range.as_str(),
        rows = data.snapshot.summary.rows_read,
        "demo insights computed"
    );
    success("demo", data)
}
