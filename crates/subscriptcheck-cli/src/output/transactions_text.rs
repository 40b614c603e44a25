use std::io;

use serde_json::Value;

use super::format::{self, Align, Column, format_money};
use super::insights_text::{skipped_rows_lines, source_lines};

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires rows"))?;
    let total = data.get("total").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec!["Recent transactions".to_string()];
    lines.extend(source_lines(data));
    lines.push(String::new());

    if rows.is_empty() {
        lines.push("No spending data in this source.".to_string());
        lines.extend(skipped_rows_lines(data));
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                field(row, "date"),
                field(row, "name"),
                field(row, "category"),
                format_money(&field(row, "amount")),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Transaction",
    ));
    lines.push(String::new());
    lines.push(format!("Showing {} of {total} transactions.", rows.len()));

    lines.extend(skipped_rows_lines(data));
    Ok(lines.join("\n"))
}

fn field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
