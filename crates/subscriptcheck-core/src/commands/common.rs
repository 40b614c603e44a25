use chrono::NaiveDate;

use crate::InsightsResult;
use crate::contracts::types::{
    CategorySliceRow, KpiData, MonthBucketRow, RangeData, SnapshotData, SourceSummary,
    TransactionRow, money, share_percent,
};
use crate::insights::date::format_iso_date;
use crate::insights::normalize::{BatchPolicy, normalize_batch};
use crate::insights::types::{CategoryBreakdown, KpiSummary, MonthBucket, TimeRange, Transaction};
use crate::insights::view::InsightsView;
use crate::source::{SourceKind, parse_source, resolve_source};

/// Options shared by the commands that slice a source by time range.
#[derive(Debug, Clone)]
pub struct RangeRunOptions {
    pub path: Option<String>,
    pub range: TimeRange,
    pub as_of: Option<String>,
    pub today: NaiveDate,
    pub policy: BatchPolicy,
    pub stdin_override: Option<String>,
}

impl RangeRunOptions {
    pub fn for_path(path: &str, today: NaiveDate) -> Self {
        Self {
            path: Some(path.to_string()),
            range: TimeRange::default(),
            as_of: None,
            today,
            policy: BatchPolicy::default(),
            stdin_override: None,
        }
    }
}

pub(crate) struct LoadedSnapshot {
    pub transactions: Vec<Transaction>,
    pub snapshot: SnapshotData,
}

pub(crate) fn load_snapshot(
    path: Option<String>,
    stdin_override: Option<String>,
    policy: BatchPolicy,
) -> InsightsResult<LoadedSnapshot> {
    let source = resolve_source(path, stdin_override)?;
    let raws = parse_source(&source.content)?;
    let batch = normalize_batch(&raws, policy)?;

    Ok(LoadedSnapshot {
        snapshot: SnapshotData {
            source_used: source.source_kind.as_str().to_string(),
            source_ref: source.source_ref,
            summary: batch.summary,
            issues: batch.issues,
        },
        transactions: batch.transactions,
    })
}

pub(crate) fn sample_snapshot(transactions: Vec<Transaction>) -> LoadedSnapshot {
    let count = transactions.len() as i64;
    LoadedSnapshot {
        snapshot: SnapshotData {
            source_used: SourceKind::Sample.as_str().to_string(),
            source_ref: None,
            summary: SourceSummary {
                rows_read: count,
                rows_valid: count,
                rows_invalid: 0,
            },
            issues: Vec::new(),
        },
        transactions,
    }
}

pub(crate) fn range_data(view: &InsightsView) -> RangeData {
    RangeData {
        range: view.range.as_str().to_string(),
        label: view.range.label().to_string(),
        as_of: format_iso_date(&view.reference),
        cutoff: view.cutoff.as_ref().map(format_iso_date),
        transaction_count: view.filtered_count as i64,
    }
}

pub(crate) fn trend_rows(buckets: &[MonthBucket]) -> Vec<MonthBucketRow> {
    buckets
        .iter()
        .map(|bucket| MonthBucketRow {
            key: bucket.key.clone(),
            label: bucket.label.clone(),
            total: money(bucket.total),
        })
        .collect()
}

pub(crate) fn category_rows(breakdown: &CategoryBreakdown) -> Vec<CategorySliceRow> {
    breakdown
        .slices
        .iter()
        .map(|slice| CategorySliceRow {
            name: slice.name.clone(),
            total: money(slice.total),
            share_percent: share_percent(slice.total, breakdown.grand_total),
        })
        .collect()
}

pub(crate) fn kpi_data(kpis: &KpiSummary) -> KpiData {
    KpiData {
        total_spend: money(kpis.total_spend),
        transaction_count: kpis.transaction_count as i64,
        monthly_average: money(kpis.monthly_average),
    }
}

pub(crate) fn transaction_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        id: transaction.id.clone(),
        name: transaction.name.clone(),
        date: format_iso_date(&transaction.date),
        category: transaction.category.clone(),
        amount: money(transaction.amount),
    }
}
