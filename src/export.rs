//! CSV serialization of flat record lists.
//!
//! The contract is deliberately small: header row from the first record's
//! keys, one line per record, string values containing commas quoted,
//! null/absent rendered as empty. Writing the bytes anywhere (file,
//! response body) is the caller's concern.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;

/// Serializes a homogeneous list of flat records to CSV. Empty input
/// produces empty output. Keys are emitted in sorted order.
pub fn export_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut headers: Option<Vec<String>> = None;
    let mut lines = Vec::with_capacity(rows.len());

    for row in rows {
        let value = serde_json::to_value(row).context("Failed to serialize record for CSV")?;
        let Value::Object(map) = value else {
            return Err(anyhow!("CSV export expects flat records (JSON objects)"));
        };

        let headers = headers.get_or_insert_with(|| map.keys().cloned().collect());
        let line: Vec<String> = headers.iter().map(|h| csv_field(map.get(h))).collect();
        lines.push(line.join(","));
    }

    let Some(headers) = headers else {
        return Ok(String::new());
    };

    let mut out = headers.join(",");
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }
    Ok(out)
}

fn csv_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => {
            if s.contains(',') {
                format!("\"{s}\"")
            } else {
                s.clone()
            }
        }
        Some(other) => other.to_string(),
    }
}
