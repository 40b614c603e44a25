use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::{Value, json};
use subscriptcheck_core::InsightsResult;
use subscriptcheck_core::SuccessEnvelope;
use subscriptcheck_core::commands::RangeRunOptions;
use subscriptcheck_core::insights::{BatchPolicy, TimeRange};
use tempfile::{Builder, TempDir};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn reference_date() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn transaction(id: &str, amount: Value, date: &str, category: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": format!("merchant {id}"),
        "amount": amount,
        "date": date,
        "category": category,
    })
}

pub fn temp_fixture_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir()
}

pub fn write_fixture_json(base: &Path, name: &str, rows: &[Value]) -> std::io::Result<PathBuf> {
    let path = base.join(name);
    let body = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    fs::write(&path, body)?;
    Ok(path)
}

pub fn write_fixture_text(base: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = base.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

/// Options that read `rows` through stdin with the reference date pinned.
pub fn stdin_options(rows: &[Value], range: TimeRange) -> RangeRunOptions {
    RangeRunOptions {
        path: Some("-".to_string()),
        range,
        as_of: Some("2024-06-15".to_string()),
        today: reference_date(),
        policy: BatchPolicy::SkipInvalid,
        stdin_override: Some(Value::Array(rows.to_vec()).to_string()),
    }
}

pub fn payload(result: InsightsResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok());
    if let Ok(success) = result {
        let value = serde_json::to_value(success);
        assert!(value.is_ok());
        if let Ok(body) = value {
            return body;
        }
    }
    Value::Null
}

pub fn rows_of(payload: &Value, key: &str) -> Vec<Value> {
    payload["data"][key].as_array().cloned().unwrap_or_default()
}
