use rust_decimal::Decimal;

use crate::insights::types::{KpiSummary, Transaction};

/// Fixed divisor behind the monthly average card, independent of the data span.
pub const MONTHLY_AVERAGE_DIVISOR: i64 = 6;

pub fn summarize(transactions: &[Transaction]) -> KpiSummary {
    let total_spend = transactions
        .iter()
        .fold(Decimal::ZERO, |sum, transaction| sum.saturating_add(transaction.amount));
    let transaction_count = transactions.len();

    let divisor = if transaction_count > 0 {
        Decimal::from(MONTHLY_AVERAGE_DIVISOR)
    } else {
        Decimal::ONE
    };

    KpiSummary {
        total_spend,
        transaction_count,
        monthly_average: total_spend / divisor,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::summarize;
    use crate::insights::types::Transaction;

    fn transaction(amount: Decimal, year: i32, month: u32) -> Transaction {
        Transaction {
            id: format!("{year}-{month}"),
            name: String::new(),
            amount,
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN),
            category: "Food".to_string(),
        }
    }

    #[test]
    fn average_divides_by_six_regardless_of_span() {
        // three months of data spread over two years still divide by six
        let rows = vec![
            transaction(Decimal::new(10, 0), 2022, 1),
            transaction(Decimal::new(20, 0), 2023, 6),
            transaction(Decimal::new(5, 0), 2024, 2),
        ];
        let kpis = summarize(&rows);
        assert_eq!(kpis.total_spend, Decimal::new(35, 0));
        assert_eq!(kpis.transaction_count, 3);
        assert_eq!(kpis.monthly_average, Decimal::new(35, 0) / Decimal::new(6, 0));
    }

    #[test]
    fn single_transaction_is_still_divided_by_six() {
        let kpis = summarize(&[transaction(Decimal::new(60, 0), 2024, 1)]);
        assert_eq!(kpis.monthly_average, Decimal::new(10, 0));
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let rows = vec![
            transaction(Decimal::MAX, 2024, 1),
            transaction(Decimal::MAX, 2024, 2),
        ];
        let kpis = summarize(&rows);
        assert_eq!(kpis.total_spend, Decimal::MAX);
        assert_eq!(kpis.monthly_average, Decimal::MAX / Decimal::new(6, 0));
    }

    #[test]
    fn empty_input_is_all_zero() {
        let kpis = summarize(&[]);
        assert_eq!(kpis.total_spend, Decimal::ZERO);
        assert_eq!(kpis.transaction_count, 0);
        assert_eq!(kpis.monthly_average, Decimal::ZERO);
    }
}
