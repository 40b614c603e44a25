use crate::InsightsResult;
use crate::commands::common::{RangeRunOptions, category_rows, load_snapshot, range_data};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoriesData, money};
use crate::insights::view::build_insights;
use crate::settings::resolve_reference_date;

#[doc(hidden)]
pub fn run_with_options(options: RangeRunOptions) -> InsightsResult<SuccessEnvelope> {
    let reference =
        resolve_reference_date(options.as_of.as_deref(), options.today, "categories")?;
    let loaded = load_snapshot(options.path, options.stdin_override, options.policy)?;
    let view = build_insights(&loaded.transactions, options.range, reference);

    let data = CategoriesData {
        snapshot: loaded.snapshot,
        range: range_data(&view),
        rows: category_rows(&view.categories),
        grand_total: money(view.categories.grand_total),
    };

    tracing::info!(categories = data.rows.len(), "categories computed");
    success("categories", data)
}
