use chrono::NaiveDate;

use crate::InsightsResult;
use crate::commands::common::{
    LoadedSnapshot, RangeRunOptions, category_rows, kpi_data, load_snapshot, range_data,
    trend_rows,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{InsightsData, money};
use crate::insights::types::TimeRange;
use crate::insights::view::build_insights;
use crate::settings::resolve_reference_date;

pub fn run(path: &str, range: TimeRange, today: NaiveDate) -> InsightsResult<SuccessEnvelope> {
    run_with_options(RangeRunOptions {
        range,
        ..RangeRunOptions::for_path(path, today)
    })
}

#[doc(hidden)]
pub fn run_with_options(options: RangeRunOptions) -> InsightsResult<SuccessEnvelope> {
    let reference = resolve_reference_date(options.as_of.as_deref(), options.today, "insights")?;
    let loaded = load_snapshot(options.path, options.stdin_override, options.policy)?;
    let data = insights_data(loaded, options.range, reference);

    tracing::info!(
        range = data.range.range.as_str(),
        rows = data.snapshot.summary.rows_valid,
        "insights computed"
    );
    success("insights", data)
}

pub(crate) fn insights_data(
    loaded: LoadedSnapshot,
    range: TimeRange,
    reference: NaiveDate,
) -> InsightsData {
    let view = build_insights(&loaded.transactions, range, reference);

    InsightsData {
        range: range_data(&view),
        trend: trend_rows(&view.trend),
        categories: category_rows(&view.categories),
        grand_total: money(view.categories.grand_total),
        kpis: kpi_data(&view.kpis),
        snapshot: loaded.snapshot,
    }
}
