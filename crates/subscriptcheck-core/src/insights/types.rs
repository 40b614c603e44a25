use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// A record as delivered by the upstream source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTransaction {
    pub row: i64,
    pub id: Option<String>,
    pub name: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    #[default]
    SixMonths,
    OneYear,
    All,
}

impl TimeRange {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::All => "ALL",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::All => "All Time",
        }
    }

    /// Months before the reference month where the window starts.
    pub const fn months_back(self) -> Option<u32> {
        match self {
            Self::SixMonths => Some(5),
            Self::OneYear => Some(11),
            Self::All => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "6m" | "6months" | "six_months" => Some(Self::SixMonths),
            "1y" | "1year" | "one_year" => Some(Self::OneYear),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub key: String,
    pub label: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub slices: Vec<CategorySlice>,
    pub grand_total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KpiSummary {
    pub total_spend: Decimal,
    pub transaction_count: usize,
    pub monthly_average: Decimal,
}
