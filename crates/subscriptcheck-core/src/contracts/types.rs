use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizeIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotData {
    pub source_used: String,
    pub source_ref: Option<String>,
    pub summary: SourceSummary,
    pub issues: Vec<NormalizeIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeData {
    pub range: String,
    pub label: String,
    pub as_of: String,
    pub cutoff: Option<String>,
    pub transaction_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthBucketRow {
    pub key: String,
    pub label: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySliceRow {
    pub name: String,
    pub total: Decimal,
    pub share_percent: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiData {
    pub total_spend: Decimal,
    pub transaction_count: i64,
    pub monthly_average: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub name: String,
    pub date: String,
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendData {
    pub snapshot: SnapshotData,
    pub range: RangeData,
    pub rows: Vec<MonthBucketRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub snapshot: SnapshotData,
    pub range: RangeData,
    pub rows: Vec<CategorySliceRow>,
    pub grand_total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub snapshot: SnapshotData,
    pub kpis: KpiData,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsData {
    pub snapshot: SnapshotData,
    pub range: RangeData,
    pub trend: Vec<MonthBucketRow>,
    pub categories: Vec<CategorySliceRow>,
    pub grand_total: Decimal,
    pub kpis: KpiData,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub snapshot: SnapshotData,
    pub total: i64,
    pub rows: Vec<TransactionRow>,
}

/// Rescales a money value to two fractional digits for presentation.
pub fn money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Percentage of `whole` taken by `part`, to one decimal place.
pub fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        let mut zero = Decimal::ZERO;
        zero.rescale(1);
        return zero;
    }
    let mut share = (part * Decimal::ONE_HUNDRED / whole)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    share.rescale(1);
    share
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{money, share_percent};

    #[test]
    fn money_pads_and_rounds_to_cents() {
        assert_eq!(money(Decimal::new(30, 0)).to_string(), "30.00");
        assert_eq!(money(Decimal::new(58333, 4)).to_string(), "5.83");
        assert_eq!(money(Decimal::new(155, 1)).to_string(), "15.50");
        assert_eq!(money(Decimal::new(1125, 3)).to_string(), "1.13");
    }

    #[test]
    fn share_percent_handles_zero_totals() {
        assert_eq!(
            share_percent(Decimal::new(100, 0), Decimal::new(12775, 2)).to_string(),
            "78.3"
        );
        assert_eq!(share_percent(Decimal::ZERO, Decimal::ZERO).to_string(), "0.0");
        assert_eq!(
            share_percent(Decimal::new(5, 0), Decimal::new(5, 0)).to_string(),
            "100.0"
        );
    }
}
