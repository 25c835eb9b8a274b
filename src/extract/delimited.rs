//! CSV extraction

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use log::trace;

use crate::errors::{Result, csv_parsing_error, csv_record_error, file_operation_error};
use crate::table::{Cell, RecordTable, Value};

/// Reads a CSV file with a header row
pub fn extract_csv(path: &Path) -> Result<RecordTable> {
    let file = File::open(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "open"))?;
    parse_csv(file, path)
}

/// Parses CSV text with a header row into a record table
///
/// `path` is only used in error messages. Short records are padded with
/// missing values; a record longer than the header is rejected. A header made
/// of one empty field describes a table without columns, whose rows are single
/// empty fields.
pub fn parse_csv<R: Read>(reader: R, path: &Path) -> Result<RecordTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| csv_parsing_error(e, path.to_path_buf()))?;
    let columns = if is_blank(headers) {
        Vec::new()
    } else {
        disambiguate_headers(headers.iter())
    };
    let mut table = RecordTable::with_columns(columns.iter().map(String::as_str));

    for result in reader.records() {
        let record = result.map_err(|e| csv_parsing_error(e, path.to_path_buf()))?;

        if record.len() > columns.len() && !(columns.is_empty() && is_blank(&record)) {
            let line = record.position().map_or(0, |position| position.line());
            return Err(csv_record_error(
                path.to_path_buf(),
                line,
                &format!(
                    "record has {} fields but the header has {}",
                    record.len(),
                    columns.len()
                ),
            ));
        }

        let cells: Vec<(&str, Cell)> = columns
            .iter()
            .map(String::as_str)
            .zip(record.iter().map(Value::infer))
            .collect();
        table.push_record(cells);
    }

    trace!("Parsed {} CSV records from {}", table.row_count(), path.display());
    Ok(table)
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0) == Some("")
}

/// Renames repeated header names to `name.1`, `name.2`, ... so no column is lost
fn disambiguate_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns: Vec<String> = Vec::new();

    for header in headers {
        let mut name = header.to_string();
        while let Some(count) = seen.get_mut(&name) {
            *count += 1;
            name = format!("{header}.{count}");
        }
        seen.insert(name.clone(), 0);
        columns.push(name);
    }

    columns
}
