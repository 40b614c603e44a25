mod support;

use serde_json::{Value, json};
use subscriptcheck_core::commands::categories;
use subscriptcheck_core::commands::demo::{self, DemoRunOptions};
use subscriptcheck_core::commands::insights;
use subscriptcheck_core::commands::summary::{self, SummaryRunOptions};
use subscriptcheck_core::commands::transactions::{self, TransactionsRunOptions};
use subscriptcheck_core::commands::trend;
use subscriptcheck_core::commands::RangeRunOptions;
use subscriptcheck_core::insights::{BatchPolicy, TimeRange};
use support::insights_testkit::{
    payload, reference_date, rows_of, stdin_options, temp_fixture_dir, transaction,
    write_fixture_json, write_fixture_text,
};

fn mixed_rows() -> Vec<Value> {
    vec![
        transaction("t1", json!(10), "2024-01-15", Some("Food")),
        transaction("t2", json!("5.50"), "2024-01-20", Some("Food")),
        transaction("t3", json!(100), "2024-02-01", Some("Travel")),
        transaction("t4", json!(12.25), "2024-06-02", None),
    ]
}

#[test]
fn insights_payload_carries_trend_categories_and_kpis() {
    let body = payload(insights::run_with_options(stdin_options(
        &mixed_rows(),
        TimeRange::SixMonths,
    )));

    assert_eq!(body["ok"], true);
    assert_eq!(body["command"], "insights");
    assert_eq!(body["data"]["snapshot"]["source_used"], "stdin");
    assert_eq!(body["data"]["range"]["range"], "6M");
    assert_eq!(body["data"]["range"]["cutoff"], "2024-01-01");
    assert_eq!(body["data"]["range"]["transaction_count"], 4);

    let trend = rows_of(&body, "trend");
    let keys = trend
        .iter()
        .filter_map(|row| row["key"].as_str())
        .collect::<Vec<&str>>();
    assert_eq!(keys, vec!["2024-01", "2024-02", "2024-06"]);
    assert_eq!(trend[0]["total"], "15.50");
    assert_eq!(trend[0]["label"], "Jan '24");

    let categories = rows_of(&body, "categories");
    assert_eq!(categories[0]["name"], "Travel");
    assert_eq!(categories[0]["share_percent"], "78.3");
    assert_eq!(categories[1]["name"], "Food");
    assert_eq!(categories[2]["name"], "Uncategorized");
    assert_eq!(body["data"]["grand_total"], "127.75");

    assert_eq!(body["data"]["kpis"]["total_spend"], "127.75");
    assert_eq!(body["data"]["kpis"]["transaction_count"], 4);
    assert_eq!(body["data"]["kpis"]["monthly_average"], "21.29");
}

#[test]
fn range_narrows_aggregates_but_not_kpis() {
    let mut rows = mixed_rows();
    rows.push(transaction("old", json!(40), "2023-03-10", Some("Travel")));

    let six_months = payload(categories::run_with_options(stdin_options(
        &rows,
        TimeRange::SixMonths,
    )));
    assert_eq!(six_months["data"]["grand_total"], "127.75");

    let everything = payload(categories::run_with_options(stdin_options(
        &rows,
        TimeRange::All,
    )));
    assert_eq!(everything["data"]["grand_total"], "167.75");
    assert_eq!(everything["data"]["range"]["cutoff"], Value::Null);

    let kpis = payload(insights::run_with_options(stdin_options(
        &rows,
        TimeRange::SixMonths,
    )));
    assert_eq!(kpis["data"]["kpis"]["total_spend"], "167.75");
}

#[test]
fn skip_invalid_reports_issues_and_aggregates_the_rest() {
    let mut rows = mixed_rows();
    rows.push(transaction("bad-amount", json!("abc"), "2024-03-01", Some("Food")));
    rows.push(transaction("bad-date", json!(3), "03/01/2024", Some("Food")));
    rows.push(transaction("negative", json!(-4), "2024-03-01", Some("Food")));

    let body = payload(trend::run_with_options(stdin_options(
        &rows,
        TimeRange::All,
    )));
    let summary = &body["data"]["snapshot"]["summary"];
    assert_eq!(summary["rows_read"], 7);
    assert_eq!(summary["rows_valid"], 4);
    assert_eq!(summary["rows_invalid"], 3);

    let issues = body["data"]["snapshot"]["issues"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    let codes = issues
        .iter()
        .filter_map(|issue| issue["code"].as_str())
        .collect::<Vec<&str>>();
    assert_eq!(codes, vec!["invalid_number", "invalid_date", "negative_amount"]);
    assert_eq!(issues[0]["row"], 5);
    assert_eq!(issues[0]["received"], "abc");
}

#[test]
fn fail_fast_aggregates_nothing() {
    let mut rows = mixed_rows();
    rows.push(transaction("bad", json!("1.234"), "2024-03-01", Some("Food")));

    let result = trend::run_with_options(RangeRunOptions {
        policy: BatchPolicy::FailFast,
        ..stdin_options(&rows, TimeRange::All)
    });
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "validation_failed");
        assert!(error.message.contains("1 rows need fixes"));
        assert!(error.data.is_some());
        if let Some(data) = error.data {
            assert_eq!(data["issues"][0]["code"], "invalid_amount_scale");
            assert_eq!(data["summary"]["rows_valid"], 4);
        }
    }
}

#[test]
fn amounts_above_the_ceiling_are_skipped_before_aggregation() {
    let mut rows = mixed_rows();
    rows.push(transaction(
        "huge-1",
        json!("79228162514264337593543950335"),
        "2024-03-01",
        Some("Food"),
    ));
    rows.push(transaction(
        "huge-2",
        json!("79228162514264337593543950335"),
        "2024-03-02",
        Some("Food"),
    ));

    let body = payload(insights::run_with_options(stdin_options(
        &rows,
        TimeRange::All,
    )));
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["snapshot"]["summary"]["rows_invalid"], 2);
    assert_eq!(body["data"]["snapshot"]["issues"][0]["code"], "amount_too_large");
    assert_eq!(body["data"]["kpis"]["total_spend"], "127.75");
}

#[test]
fn csv_and_json_sources_produce_identical_views() {
    let temp = temp_fixture_dir("subscriptcheck-csv-json");
    assert!(temp.is_ok());
    if let Ok(dir) = temp {
        let json_path = write_fixture_json(dir.path(), "rows.json", &mixed_rows());
        let csv_path = write_fixture_text(
            dir.path(),
            "rows.csv",
            "id,name,amount,date,category\n\
             t1,merchant t1,10,2024-01-15,Food\n\
             t2,merchant t2,5.50,2024-01-20,Food\n\
             t3,merchant t3,100,2024-02-01,Travel\n\
             t4,merchant t4,12.25,2024-06-02,\n",
        );
        assert!(json_path.is_ok());
        assert!(csv_path.is_ok());
        if let (Ok(json_file), Ok(csv_file)) = (json_path, csv_path) {
            let from_json = payload(insights::run(
                &json_file.display().to_string(),
                TimeRange::OneYear,
                reference_date(),
            ));
            let from_csv = payload(insights::run(
                &csv_file.display().to_string(),
                TimeRange::OneYear,
                reference_date(),
            ));

            assert_eq!(from_json["data"]["snapshot"]["source_used"], "file");
            assert_eq!(from_json["data"]["trend"], from_csv["data"]["trend"]);
            assert_eq!(from_json["data"]["categories"], from_csv["data"]["categories"]);
            assert_eq!(from_json["data"]["kpis"], from_csv["data"]["kpis"]);
        }
    }
}

#[test]
fn empty_source_yields_zeroed_views() {
    let body = payload(insights::run_with_options(stdin_options(&[], TimeRange::All)));
    assert!(rows_of(&body, "trend").is_empty());
    assert!(rows_of(&body, "categories").is_empty());
    assert_eq!(body["data"]["grand_total"], "0.00");
    assert_eq!(body["data"]["kpis"]["transaction_count"], 0);
    assert_eq!(body["data"]["kpis"]["monthly_average"], "0.00");
}

#[test]
fn malformed_as_of_is_rejected_before_reading_the_source() {
    let result = insights::run_with_options(RangeRunOptions {
        as_of: Some("15/06/2024".to_string()),
        ..stdin_options(&mixed_rows(), TimeRange::All)
    });
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "invalid_argument");
    }
}

#[test]
fn summary_reports_kpis_over_every_valid_row() {
    let body = payload(summary::run_with_options(SummaryRunOptions {
        path: Some("-".to_string()),
        policy: BatchPolicy::SkipInvalid,
        stdin_override: Some(Value::Array(mixed_rows()).to_string()),
    }));
    assert_eq!(body["command"], "summary");
    assert_eq!(body["data"]["kpis"]["total_spend"], "127.75");
    assert_eq!(body["data"]["kpis"]["transaction_count"], 4);
}

#[test]
fn transactions_are_listed_newest_first_with_limit() {
    let body = payload(transactions::run_with_options(TransactionsRunOptions {
        path: Some("-".to_string()),
        limit: Some(2),
        stdin_override: Some(Value::Array(mixed_rows()).to_string()),
        ..TransactionsRunOptions::default()
    }));
    assert_eq!(body["data"]["total"], 4);
    let rows = rows_of(&body, "rows");
    let ids = rows
        .iter()
        .filter_map(|row| row["id"].as_str())
        .collect::<Vec<&str>>();
    assert_eq!(ids, vec!["t4", "t3"]);
    assert_eq!(rows[0]["category"], "Uncategorized");
    assert_eq!(rows[0]["amount"], "12.25");
}

#[test]
fn demo_is_deterministic_for_a_pinned_reference() {
    let first = payload(demo::run_with_options(DemoRunOptions {
        range: TimeRange::All,
        as_of: Some("2024-06-15".to_string()),
        today: reference_date(),
    }));
    let second = payload(demo::run_with_options(DemoRunOptions {
        range: TimeRange::All,
        as_of: Some("2024-06-15".to_string()),
        today: reference_date(),
    }));

    assert_eq!(first, second);
    assert_eq!(first["command"], "demo");
    assert_eq!(first["data"]["snapshot"]["source_used"], "sample");
    assert_eq!(first["data"]["snapshot"]["summary"]["rows_read"], 210);
    assert_eq!(first["data"]["range"]["transaction_count"], 210);
}
