pub mod category;
pub mod date;
pub mod kpi;
pub mod normalize;
pub mod range;
pub mod sample;
pub mod trend;
pub mod types;
pub mod view;

pub use category::aggregate_categories;
pub use kpi::summarize;
pub use normalize::{BatchPolicy, NormalizedBatch, normalize_batch, normalize_transaction};
pub use range::filter_by_range;
pub use trend::aggregate_monthly;
pub use types::{
    CategoryBreakdown, CategorySlice, KpiSummary, MonthBucket, RawTransaction, TimeRange,
    Transaction, UNCATEGORIZED,
};
pub use view::{InsightsView, build_insights, recent_transactions};
