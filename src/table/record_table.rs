//! Record table
//!
//! An ordered list of rows sharing one append-only column list. Every row
//! holds exactly one cell per column; cells a source did not provide are
//! `None`.

use std::fmt;

use super::Value;

/// A single cell: `None` marks a missing value
pub type Cell = Option<Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RecordTable {
    /// Creates an empty table with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given columns
    ///
    /// Repeated names are collapsed onto their first occurrence.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for column in columns {
            table.ensure_column(&column.into());
        }
        table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the index of `name`, appending it as a new column when absent
    ///
    /// Existing rows are back-filled with missing values.
    fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(None);
        }
        self.columns.len() - 1
    }

    /// Appends one record given as `(column, cell)` pairs
    ///
    /// Unknown columns are added to the table; columns the record does not
    /// mention are missing in the new row. When a column appears twice in the
    /// record the last cell wins.
    pub fn push_record<I, S>(&mut self, record: I)
    where
        I: IntoIterator<Item = (S, Cell)>,
        S: AsRef<str>,
    {
        let mut row: Vec<Cell> = vec![None; self.columns.len()];
        for (column, cell) in record {
            let index = self.ensure_column(column.as_ref());
            if index >= row.len() {
                row.resize(index + 1, None);
            }
            row[index] = cell;
        }
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    /// Appends every row of `other`, keeping row order
    ///
    /// The column list becomes the union of both tables in first-seen order.
    pub fn append(&mut self, other: RecordTable) {
        let mapping: Vec<usize> = other
            .columns
            .iter()
            .map(|column| self.ensure_column(column))
            .collect();

        let width = self.columns.len();
        self.rows.reserve(other.rows.len());
        for source_row in other.rows {
            let mut row: Vec<Cell> = vec![None; width];
            for (cell, &target) in source_row.into_iter().zip(&mapping) {
                row[target] = cell;
            }
            self.rows.push(row);
        }
    }

    /// Iterates over the cells of one column, or `None` if the column is absent
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    /// Looks up a single cell; `None` covers both an absent column and a missing value
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)?.as_ref()
    }

    /// Replaces the cells of `name`, appending the column if it does not exist
    ///
    /// `values` is expected to hold one cell per row; a shorter list leaves the
    /// remaining rows missing and extra cells are ignored.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        let index = self.ensure_column(name);
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row[index] = values.next().flatten();
        }
    }

    /// Returns a new table holding the first `count` rows
    pub fn head(&self, count: usize) -> RecordTable {
        RecordTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(count).cloned().collect(),
        }
    }
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Some(value) => value.to_string(),
        None => "NaN".to_string(),
    }
}

impl fmt::Display for RecordTable {
    /// Renders an aligned grid with a leading row-number column
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "Empty table ({} rows, 0 columns)", self.rows.len());
        }

        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                rendered
                    .iter()
                    .map(|row| row[index].chars().count())
                    .chain(std::iter::once(column.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (column, width) in self.columns.iter().zip(widths.iter().copied()) {
            write!(f, "  {column:>width$}")?;
        }

        for (position, row) in rendered.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{position:<index_width$}")?;
            for (cell, width) in row.iter().zip(widths.iter().copied()) {
                write!(f, "  {cell:>width$}")?;
            }
        }

        Ok(())
    }
}
