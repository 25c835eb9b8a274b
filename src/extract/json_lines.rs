//! JSON Lines extraction
//!
//! Every non-blank line is one self-contained JSON object. A bad line fails
//! the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{Result, file_operation_error, json_parsing_error, json_record_error};
use crate::table::{RecordTable, Value};

pub fn extract_json_lines(path: &Path) -> Result<RecordTable> {
    let file = File::open(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "open"))?;
    parse_json_lines(BufReader::new(file), path)
}

/// Parses JSON Lines text into a record table
///
/// Columns are the union of object keys in first-seen order. `path` is only
/// used in error messages.
pub fn parse_json_lines<R: BufRead>(reader: R, path: &Path) -> Result<RecordTable> {
    let mut table = RecordTable::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed: serde_json::Value = serde_json::from_str(&line)
            .map_err(|e| json_parsing_error(e, path.to_path_buf(), line_number))?;

        match parsed {
            serde_json::Value::Object(fields) => {
                table.push_record(
                    fields
                        .into_iter()
                        .map(|(key, value)| (key, Value::from_json(value))),
                );
            }
            other => {
                return Err(json_record_error(
                    path.to_path_buf(),
                    line_number,
                    &format!("expected a JSON object, found {}", json_kind(&other)),
                ));
            }
        }
    }

    Ok(table)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
