use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::insights::normalize::normalize_category;
use crate::insights::types::{CategoryBreakdown, CategorySlice, Transaction};

/// Sums spend per category, largest first; equal totals keep first-seen order.
pub fn aggregate_categories(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut slices: Vec<CategorySlice> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    let mut grand_total = Decimal::ZERO;

    for transaction in transactions {
        let name = normalize_category(Some(transaction.category.as_str()));
        grand_total = grand_total.saturating_add(transaction.amount);

        if let Some(index) = index_by_name.get(&name) {
            let slice = &mut slices[*index];
            slice.total = slice.total.saturating_add(transaction.amount);
            continue;
        }
        index_by_name.insert(name.clone(), slices.len());
        slices.push(CategorySlice {
            name,
            total: transaction.amount,
        });
    }

    // stable: equal totals stay in first-seen order
    slices.sort_by(|left, right| right.total.cmp(&left.total));

    tracing::debug!(
        transactions = transactions.len(),
        categories = slices.len(),
        "aggregated category breakdown"
    );

    CategoryBreakdown {
        slices,
        grand_total,
    }
}
