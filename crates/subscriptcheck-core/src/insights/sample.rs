use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::insights::types::Transaction;

const SAMPLE_CYCLES: u64 = 24;
const CYCLE_DAYS: u64 = 30;

/// Deterministic two-year sample snapshot anchored at `reference`.
pub fn sample_transactions(reference: NaiveDate) -> Vec<Transaction> {
    let mut rows = Vec::new();

    for cycle in 0..SAMPLE_CYCLES {
        let Some(charged_on) = days_before(reference, CYCLE_DAYS * cycle) else {
            continue;
        };
        let cents = i64::try_from(cycle).unwrap_or(0);
        let phase = cents % 3;

        if cycle < 12 {
            rows.push(sample(
                format!("seed_netflix_{cycle}"),
                "Netflix.com",
                1549,
                charged_on,
                "Entertainment",
            ));
        }
        if cycle >= 6 {
            rows.push(sample(
                format!("seed_spotify_{cycle}"),
                "Spotify Family",
                1699,
                charged_on,
                "Entertainment",
            ));
        }
        rows.push(sample(
            format!("seed_aws_{cycle}"),
            "AWS Service Bill",
            3500 + 150 * phase,
            charged_on,
            "Technology",
        ));
        rows.push(sample(
            format!("seed_hulu_{cycle}"),
            "Hulu No Ads",
            1799,
            charged_on,
            "Entertainment",
        ));
        rows.push(sample(
            format!("seed_google_{cycle}"),
            "Google One",
            999,
            charged_on,
            "Technology",
        ));
        rows.push(sample(
            format!("seed_apple_{cycle}"),
            "Apple.com/bill",
            1099,
            charged_on,
            "Entertainment",
        ));
        let gym_name = if cycle % 2 == 0 {
            "Gym ABC"
        } else {
            "Gym ABC Inc."
        };
        rows.push(sample(
            format!("seed_gym_{cycle}"),
            gym_name,
            4999,
            charged_on,
            "Health",
        ));
        rows.push(sample(
            format!("seed_adobe_{cycle}"),
            "Adobe Creative Cloud",
            5499 + phase - 1,
            charged_on,
            "Software",
        ));

        if cycle % 2 == 0 {
            let base = CYCLE_DAYS * cycle;
            if let Some(ride_on) = days_before(reference, base + 5) {
                rows.push(sample(
                    format!("seed_uber_{cycle}_a"),
                    "Uber Ride",
                    1250 + 200 * cents,
                    ride_on,
                    "Transport",
                ));
            }
            if let Some(ride_on) = days_before(reference, base + 15) {
                rows.push(sample(
                    format!("seed_uber_{cycle}_b"),
                    "Uber Ride",
                    2500 + 100 * cents,
                    ride_on,
                    "Transport",
                ));
            }
            if let Some(coffee_on) = days_before(reference, base + 2) {
                rows.push(sample(
                    format!("seed_coffee_{cycle}"),
                    "Joe's Coffee",
                    450,
                    coffee_on,
                    "Food & Drink",
                ));
            }
        }
    }

    rows
}

fn days_before(reference: NaiveDate, days: u64) -> Option<NaiveDate> {
    reference.checked_sub_days(Days::new(days))
}

fn sample(id: String, name: &str, cents: i64, date: NaiveDate, category: &str) -> Transaction {
    Transaction {
        id,
        name: name.to_string(),
        amount: Decimal::new(cents, 2),
        date,
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::sample_transactions;

    #[test]
    fn sample_snapshot_is_deterministic_for_a_reference_date() {
        let reference = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap_or(NaiveDate::MIN);
        let first = sample_transactions(reference);
        let second = sample_transactions(reference);
        assert_eq!(first, second);
        assert_eq!(first.len(), 210);
    }

    #[test]
    fn sample_amounts_follow_cycle_phase() {
        let reference = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap_or(NaiveDate::MIN);
        let rows = sample_transactions(reference);
        let amount_of = |id: &str| {
            rows.iter()
                .find(|row| row.id == id)
                .map(|row| row.amount)
                .unwrap_or_default()
        };
        assert_eq!(amount_of("seed_aws_2"), Decimal::new(3800, 2));
        assert_eq!(amount_of("seed_adobe_0"), Decimal::new(5498, 2));
        assert_eq!(amount_of("seed_uber_4_a"), Decimal::new(2050, 2));
        assert!(rows.iter().all(|row| row.date <= reference));
    }
}
