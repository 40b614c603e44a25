use crate::InsightsResult;
use crate::commands::common::{RangeRunOptions, load_snapshot, range_data, trend_rows};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TrendData;
use crate::insights::view::build_insights;
use crate::settings::resolve_reference_date;

#[doc(hidden)]
pub fn run_with_options(options: RangeRunOptions) -> InsightsResult<SuccessEnvelope> {
    let reference = resolve_reference_date(options.as_of.as_deref(), options.today, "trend")?;
    let loaded = load_snapshot(options.path, options.stdin_override, options.policy)?;
    let view = build_insights(&loaded.transactions, options.range, reference);

    let data = TrendData {
        snapshot: loaded.snapshot,
        range: range_data(&view),
        rows: trend_rows(&view.trend),
    };

    tracing::info!(months = data.rows.len(), "trend computed");
    success("trend", data)
}
