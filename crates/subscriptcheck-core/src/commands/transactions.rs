use crate::InsightsResult;
use crate::commands::common::{load_snapshot, transaction_row};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TransactionsData;
use crate::insights::normalize::BatchPolicy;
use crate::insights::view::recent_transactions;

pub const DEFAULT_LIMIT: usize = 20;

#[derive(Debug)]
pub struct TransactionsRunOptions {
    pub path: Option<String>,
    pub limit: Option<usize>,
    pub policy: BatchPolicy,
    pub stdin_override: Option<String>,
}

impl Default for TransactionsRunOptions {
    fn default() -> Self {
        Self {
            path: None,
            limit: Some(DEFAULT_LIMIT),
            policy: BatchPolicy::default(),
            stdin_override: None,
        }
    }
}

pub fn run_with_options(options: TransactionsRunOptions) -> InsightsResult<SuccessEnvelope> {
    let loaded = load_snapshot(options.path, options.stdin_override, options.policy)?;
    let rows = recent_transactions(&loaded.transactions, options.limit)
        .iter()
        .map(transaction_row)
        .collect::<Vec<_>>();

    let data = TransactionsData {
        total: loaded.transactions.len() as i64,
        snapshot: loaded.snapshot,
        rows,
    };

    tracing::info!(shown = data.rows.len(), total = data.total, "transactions listed");
    success("transactions", data)
}
