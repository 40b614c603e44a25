use std::collections::HashMap;

use serde_json::Value;

use crate::insights::types::RawTransaction;
use crate::{InsightsError, InsightsResult};

const REQUIRED_FIELDS: [&str; 2] = ["amount", "date"];
const OPTIONAL_FIELDS: [&str; 3] = ["id", "name", "category"];

pub fn parse_source(content: &str) -> InsightsResult<Vec<RawTransaction>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(InsightsError::invalid_input("Transaction source is empty."));
    }

    if looks_like_ndjson(trimmed) {
        return Err(InsightsError::invalid_input_format(
            "NDJSON is not supported. Provide a JSON array or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(InsightsError::invalid_input_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(InsightsError::invalid_input_format(
        "Unsupported source format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> InsightsResult<Vec<RawTransaction>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|_| {
        InsightsError::invalid_input("Invalid JSON input. Provide a valid JSON array.")
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(InsightsError::invalid_input(
            "JSON input must be a top-level array of transaction objects.",
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(InsightsError::invalid_input(
                "JSON array entries must all be objects with transaction fields.",
            ));
        };

        rows.push(RawTransaction {
            row: (index as i64) + 1,
            id: read_optional_string(object.get("id")),
            name: read_optional_string(object.get("name")),
            amount: read_optional_string(object.get("amount")),
            date: read_optional_string(object.get("date")),
            category: read_optional_string(object.get("category")),
        });
    }

    tracing::debug!(rows = rows.len(), "parsed JSON transaction source");
    Ok(rows)
}

fn parse_csv(content: &str) -> InsightsResult<Vec<RawTransaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| InsightsError::invalid_input("CSV header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_ascii_lowercase())
        .collect::<Vec<String>>();

    let missing_required = REQUIRED_FIELDS
        .iter()
        .any(|required| !headers.iter().any(|header| header == required));
    if missing_required {
        return Err(InsightsError::source_schema_mismatch(
            REQUIRED_FIELDS.iter().map(|value| value.to_string()).collect(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| {
            REQUIRED_FIELDS.contains(&name.as_str()) || OPTIONAL_FIELDS.contains(&name.as_str())
        })
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row.map_err(|_| {
            InsightsError::invalid_input("CSV rows are malformed or not UTF-8.")
        })?;

        rows.push(RawTransaction {
            row: (row_index as i64) + 1,
            id: value_for(&record, &index_by_name, "id"),
            name: value_for(&record, &index_by_name, "name"),
            amount: value_for(&record, &index_by_name, "amount"),
            date: value_for(&record, &index_by_name, "date"),
            category: value_for(&record, &index_by_name, "category"),
        });
    }

    tracing::debug!(rows = rows.len(), "parsed CSV transaction source");
    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    match current {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        let parsed = serde_json::from_str::<Value>(line.trim());
        if let Ok(value) = parsed {
            return value.is_object();
        }
        false
    })
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}
