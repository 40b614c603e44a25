use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::contracts::types::{NormalizeIssue, SourceSummary};
use crate::error::ValidationError;
use crate::insights::date::parse_transaction_date;
use crate::insights::types::{RawTransaction, Transaction, UNCATEGORIZED};
use crate::{InsightsError, InsightsResult};

const MAX_AMOUNT_SCALE: u32 = 2;

/// Largest single amount accepted; keeps every in-memory sum far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x4E72_A000, 0x918, 0, false, 0); // 10_000_000_000_000

/// What a batch does when a record fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    #[default]
    SkipInvalid,
    FailFast,
}

#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub transactions: Vec<Transaction>,
    pub summary: SourceSummary,
    pub issues: Vec<NormalizeIssue>,
}

pub fn normalize_transaction(raw: &RawTransaction) -> Result<Transaction, ValidationError> {
    let amount = parse_amount(raw.amount.as_deref())?;
    let date = parse_date(raw.date.as_deref())?;

    let id = normalize_optional(raw.id.as_deref()).unwrap_or_else(|| format!("row-{}", raw.row));
    let name = normalize_optional(raw.name.as_deref()).unwrap_or_default();

    Ok(Transaction {
        id,
        name,
        amount,
        date,
        category: normalize_category(raw.category.as_deref()),
    })
}

pub fn normalize_category(value: Option<&str>) -> String {
    normalize_optional(value).unwrap_or_else(|| UNCATEGORIZED.to_string())
}

pub fn normalize_batch(
    raws: &[RawTransaction],
    policy: BatchPolicy,
) -> InsightsResult<NormalizedBatch> {
    let mut transactions = Vec::with_capacity(raws.len());
    let mut issues = Vec::new();

    for raw in raws {
        match normalize_transaction(raw) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => {
                tracing::warn!(
                    row = raw.row,
                    field = error.field(),
                    code = error.code(),
                    "skipping invalid transaction record"
                );
                issues.push(NormalizeIssue {
                    row: raw.row,
                    field: error.field().to_string(),
                    code: error.code().to_string(),
                    description: error.to_string(),
                    received: error.received().map(str::to_string),
                });
            }
        }
    }

    let summary = SourceSummary {
        rows_read: raws.len() as i64,
        rows_valid: transactions.len() as i64,
        rows_invalid: issues
            .iter()
            .map(|issue| issue.row)
            .collect::<HashSet<i64>>()
            .len() as i64,
    };

    if policy == BatchPolicy::FailFast && !issues.is_empty() {
        return Err(InsightsError::validation_failed(summary, issues));
    }

    Ok(NormalizedBatch {
        transactions,
        summary,
        issues,
    })
}

fn parse_amount(value: Option<&str>) -> Result<Decimal, ValidationError> {
    let Some(candidate) = normalize_optional(value) else {
        return Err(ValidationError::MissingField { field: "amount" });
    };

    let parsed = if candidate.contains(['e', 'E']) {
        Decimal::from_scientific(&candidate)
    } else {
        Decimal::from_str(&candidate)
    };
    let Ok(amount) = parsed else {
        return Err(ValidationError::InvalidAmount {
            received: candidate,
        });
    };

    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            received: candidate,
        });
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            received: candidate,
        });
    }

    let scale = amount.normalize().scale();
    if scale > MAX_AMOUNT_SCALE {
        return Err(ValidationError::AmountScale {
            received: candidate,
            scale,
        });
    }

    Ok(amount)
}

fn parse_date(value: Option<&str>) -> Result<chrono::NaiveDate, ValidationError> {
    let Some(candidate) = normalize_optional(value) else {
        return Err(ValidationError::MissingField { field: "date" });
    };
    parse_transaction_date(&candidate).ok_or(ValidationError::InvalidDate {
        received: candidate,
    })
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
