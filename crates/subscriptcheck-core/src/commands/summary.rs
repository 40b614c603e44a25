use crate::InsightsResult;
use crate::commands::common::{kpi_data, load_snapshot};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;
use crate::insights::kpi::summarize;
use crate::insights::normalize::BatchPolicy;

#[derive(Debug, Default)]
pub struct SummaryRunOptions {
    pub path: Option<String>,
    pub policy: BatchPolicy,
    pub stdin_override: Option<String>,
}

pub fn run_with_options(options: SummaryRunOptions) -> InsightsResult<SuccessEnvelope> {
    let loaded = load_snapshot(options.path, options.stdin_override, options.policy)?;
    let kpis = summarize(&loaded.transactions);

    tracing::info!(transactions = kpis.transaction_count, "summary computed");
    success(
        "summary",
        SummaryData {
            snapshot: loaded.snapshot,
            kpis: kpi_data(&kpis),
        },
    )
}
