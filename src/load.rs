//! CSV output
//!
//! Writes a record table with a header row and no index column, replacing
//! any existing file.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::errors::{Result, csv_parsing_error, file_operation_error};
use crate::table::RecordTable;

/// Writes `table` to `path` as CSV, creating parent directories as needed
///
/// # Errors
/// * Returns an error if the directory or file cannot be created or written
pub fn write_csv(table: &RecordTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    let file = File::create(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "create"))?;
    write_table(table, file, path)?;

    debug!(
        "Wrote {} rows and {} columns to {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(())
}

/// Serialises `table` as CSV into any writer
///
/// Missing cells become empty fields. A table without columns or rows writes
/// nothing. Rows without columns are written as one empty field each, under an
/// empty header, so the row count survives.
pub fn write_table<W: Write>(table: &RecordTable, destination: W, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(destination);

    if table.column_count() == 0 && !table.is_empty() {
        for _ in 0..=table.row_count() {
            writer
                .write_record([""])
                .map_err(|e| csv_parsing_error(e, path.to_path_buf()))?;
        }
    } else if table.column_count() > 0 {
        writer
            .write_record(table.columns())
            .map_err(|e| csv_parsing_error(e, path.to_path_buf()))?;

        for row in table.rows() {
            let fields = row.iter().map(|cell| match cell {
                Some(value) => value.to_string(),
                None => String::new(),
            });
            writer
                .write_record(fields)
                .map_err(|e| csv_parsing_error(e, path.to_path_buf()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, Value};

    fn render(table: &RecordTable) -> String {
        let mut buffer = Vec::new();
        write_table(table, &mut buffer, Path::new("memory.csv")).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_table_header_and_missing_cells() {
        let mut table = RecordTable::new();
        table.push_record([("height", Some(Value::Integer(10)))]);
        table.push_record([("weight", Some(Value::Float(2.0)))]);

        assert_eq!(render(&table), "height,weight\n10,\n,2.0\n");
    }

    #[test]
    fn test_write_table_quotes_when_needed() {
        let mut table = RecordTable::new();
        table.push_record([("name", Some(Value::from("smith, jo")))]);

        assert_eq!(render(&table), "name\n\"smith, jo\"\n");
    }

    #[test]
    fn test_write_table_without_columns_is_empty() {
        assert_eq!(render(&RecordTable::new()), "");
    }

    #[test]
    fn test_write_table_rows_without_columns() {
        let mut table = RecordTable::new();
        table.push_record(Vec::<(&str, Cell)>::new());
        table.push_record(Vec::<(&str, Cell)>::new());

        assert_eq!(render(&table), "\"\"\n\"\"\n\"\"\n");
    }

    #[test]
    fn test_write_table_header_only() {
        let table = RecordTable::with_columns(["a", "b"]);
        assert_eq!(render(&table), "a,b\n");
    }
}
