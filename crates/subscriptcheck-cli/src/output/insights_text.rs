use std::io;

use serde_json::Value;

use super::error_text::render_issue_lines;
use super::format::{self, Align, Column, format_money, key_value_rows};

pub fn render_insights(command: &str, data: &Value) -> io::Result<String> {
    let range = require(data, "range", command)?;
    let trend = require_rows(data, "trend", command)?;
    let categories = require_rows(data, "categories", command)?;

    let mut lines = vec![range_heading("Spending insights", range)];
    lines.extend(source_lines(data));
    lines.push(String::new());
    lines.push("Summary (all transactions):".to_string());
    lines.extend(kpi_lines(require(data, "kpis", command)?));

    if trend.is_empty() && categories.is_empty() {
        lines.push(String::new());
        lines.extend(empty_range_lines(range));
    } else {
        lines.push(String::new());
        lines.push("Monthly trend:".to_string());
        lines.extend(trend_table(trend));
        lines.push(String::new());
        lines.push("Categories:".to_string());
        lines.extend(category_table(categories));
        lines.push(grand_total_line(data));
    }

    lines.extend(skipped_rows_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_trend(data: &Value) -> io::Result<String> {
    let range = require(data, "range", "trend")?;
    let rows = require_rows(data, "rows", "trend")?;

    let mut lines = vec![range_heading("Monthly spend", range)];
    lines.extend(source_lines(data));
    lines.push(String::new());
    if rows.is_empty() {
        lines.extend(empty_range_lines(range));
    } else {
        lines.extend(trend_table(rows));
    }

    lines.extend(skipped_rows_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_categories(data: &Value) -> io::Result<String> {
    let range = require(data, "range", "categories")?;
    let rows = require_rows(data, "rows", "categories")?;

    let mut lines = vec![range_heading("Spend by category", range)];
    lines.extend(source_lines(data));
    lines.push(String::new());
    if rows.is_empty() {
        lines.extend(empty_range_lines(range));
    } else {
        lines.extend(category_table(rows));
        lines.push(grand_total_line(data));
    }

    lines.extend(skipped_rows_lines(data));
    Ok(lines.join("\n"))
}

pub fn render_summary(data: &Value) -> io::Result<String> {
    let kpis = require(data, "kpis", "summary")?;

    let mut lines = vec!["Spending summary".to_string()];
    lines.extend(source_lines(data));
    lines.push(String::new());
    if kpis.get("transaction_count").and_then(Value::as_i64) == Some(0) {
        lines.push("No spending data in this source.".to_string());
    } else {
        lines.extend(kpi_lines(kpis));
    }

    lines.extend(skipped_rows_lines(data));
    Ok(lines.join("\n"))
}

pub(super) fn source_lines(data: &Value) -> Vec<String> {
    let snapshot = data.get("snapshot").unwrap_or(&Value::Null);
    let summary = snapshot.get("summary").unwrap_or(&Value::Null);
    let rows_read = summary.get("rows_read").and_then(Value::as_i64).unwrap_or(0);
    let rows_invalid = summary
        .get("rows_invalid")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let source = match snapshot.get("source_used").and_then(Value::as_str) {
        Some("sample") => "bundled sample subscriptions".to_string(),
        Some("stdin") => "stdin".to_string(),
        _ => snapshot
            .get("source_ref")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
    };

    let mut detail = format!("{rows_read} rows read");
    if rows_invalid > 0 {
        detail.push_str(&format!(", {rows_invalid} skipped"));
    }
    vec![format!("Source: {source} ({detail})")]
}

pub(super) fn skipped_rows_lines(data: &Value) -> Vec<String> {
    let issue_lines = render_issue_lines(data.get("snapshot"));
    if issue_lines.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(), "Skipped rows:".to_string()];
    lines.extend(issue_lines);
    lines.push("  Rerun with --strict to stop on the first bad source instead.".to_string());
    lines
}

fn range_heading(title: &str, range: &Value) -> String {
    let label = text(range, "label");
    let as_of = text(range, "as_of");
    match range.get("cutoff").and_then(Value::as_str) {
        Some(cutoff) => format!("{title}: {label} ({cutoff} to {as_of})"),
        None => format!("{title}: {label} (as of {as_of})"),
    }
}

fn empty_range_lines(range: &Value) -> Vec<String> {
    vec![
        format!("No spending data for {}.", text(range, "label")),
        "  Try a wider window with --range all, or check --as-of.".to_string(),
    ]
}

fn kpi_lines(kpis: &Value) -> Vec<String> {
    key_value_rows(
        &[
            ("Total spend:", format_money(&text(kpis, "total_spend"))),
            (
                "Transactions:",
                kpis.get("transaction_count")
                    .and_then(Value::as_i64)
                    .unwrap_or(0)
                    .to_string(),
            ),
            ("Monthly average:", format_money(&text(kpis, "monthly_average"))),
        ],
        2,
    )
}

fn trend_table(rows: &[Value]) -> Vec<String> {
    let columns = [
        Column {
            name: "Month",
            align: Align::Left,
        },
        Column {
            name: "Total",
            align: Align::Right,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| vec![text(row, "label"), format_money(&text(row, "total"))])
        .collect::<Vec<Vec<String>>>();

    format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), "Month")
}

fn category_table(rows: &[Value]) -> Vec<String> {
    let columns = [
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Total",
            align: Align::Right,
        },
        Column {
            name: "Share",
            align: Align::Right,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "name"),
                format_money(&text(row, "total")),
                format!("{}%", text(row, "share_percent")),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), "Category")
}

fn grand_total_line(data: &Value) -> String {
    format!("  Total: {}", format_money(&text(data, "grand_total")))
}

fn require<'a>(data: &'a Value, key: &str, command: &str) -> io::Result<&'a Value> {
    data.get(key)
        .ok_or_else(|| io::Error::other(format!("{command} output requires {key}")))
}

fn require_rows<'a>(data: &'a Value, key: &str, command: &str) -> io::Result<&'a [Value]> {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| io::Error::other(format!("{command} output requires {key}")))
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{render_categories, render_insights, render_summary, render_trend};

    fn snapshot(rows_invalid: i64, issues: Value) -> Value {
        json!({
            "source_used": "file",
            "source_ref": "rows.csv",
            "summary": {"rows_read": 4 + rows_invalid, "rows_valid": 4, "rows_invalid": rows_invalid},
            "issues": issues,
        })
    }

    fn range() -> Value {
        json!({
            "range": "6M",
            "label": "6 Months",
            "as_of": "2024-06-15",
            "cutoff": "2024-01-01",
            "transaction_count": 4,
        })
    }

    fn kpis() -> Value {
        json!({"total_spend": "127.75", "transaction_count": 4, "monthly_average": "21.29"})
    }

    #[test]
    fn insights_render_trend_categories_and_kpis() {
        let data = json!({
            "snapshot": snapshot(0, json!([])),
            "range": range(),
            "trend": [
                {"key": "2024-01", "label": "Jan '24", "total": "15.50"},
                {"key": "2024-02", "label": "Feb '24", "total": "1100.00"}
            ],
            "categories": [
                {"name": "Travel", "total": "1100.00", "share_percent": "98.6"},
                {"name": "Food", "total": "15.50", "share_percent": "1.4"}
            ],
            "grand_total": "1115.50",
            "kpis": kpis(),
        });

        let rendered = render_insights("insights", &data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Spending insights: 6 Months (2024-01-01 to 2024-06-15)"));
            assert!(text.contains("Source: rows.csv (4 rows read)"));
            assert!(text.contains("  Total spend:      $127.75"));
            assert!(text.contains("  Monthly average:  $21.29"));
            assert!(text.contains("Jan '24"));
            assert!(text.contains("$1,100.00"));
            assert!(text.contains("98.6%"));
            assert!(text.contains("  Total: $1,115.50"));
            assert!(!text.contains("Skipped rows:"));
        }
    }

    #[test]
    fn empty_window_renders_no_spending_data() {
        let data = json!({
            "snapshot": snapshot(0, json!([])),
            "range": range(),
            "trend": [],
            "categories": [],
            "grand_total": "0.00",
            "kpis": kpis(),
        });

        let rendered = render_insights("insights", &data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No spending data for 6 Months."));
            assert!(!text.contains("Monthly trend:"));
        }

        let trend = render_trend(&json!({
            "snapshot": snapshot(0, json!([])),
            "range": range(),
            "rows": [],
        }));
        assert!(trend.is_ok());
        if let Ok(text) = trend {
            assert!(text.contains("No spending data for 6 Months."));
        }
    }

    #[test]
    fn skipped_rows_are_listed_after_results() {
        let data = json!({
            "snapshot": snapshot(1, json!([{"row": 3, "description": "amount must be a finite number; got \"abc\""}])),
            "range": range(),
            "rows": [{"name": "Food", "total": "15.50", "share_percent": "100.0"}],
            "grand_total": "15.50",
        });

        let rendered = render_categories(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Source: rows.csv (5 rows read, 1 skipped)"));
            assert!(text.contains("Skipped rows:"));
            assert!(text.contains("  Row 3: amount must be a finite number"));
        }
    }

    #[test]
    fn summary_with_no_rows_says_so() {
        let data = json!({
            "snapshot": {
                "source_used": "stdin",
                "source_ref": null,
                "summary": {"rows_read": 0, "rows_valid": 0, "rows_invalid": 0},
                "issues": [],
            },
            "kpis": {"total_spend": "0.00", "transaction_count": 0, "monthly_average": "0.00"},
        });

        let rendered = render_summary(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Source: stdin (0 rows read)"));
            assert!(text.contains("No spending data in this source."));
        }
    }

    #[test]
    fn missing_fields_are_reported_as_render_errors() {
        assert!(render_trend(&json!({})).is_err());
    }
}
