//! Source file extraction
//!
//! Each supported file is turned into a [`RecordTable`]. The format is chosen
//! from the file suffix alone; anything unrecognised aborts the run.

mod delimited;
mod json_lines;
mod markup;

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::errors::{Result, unsupported_format_error};
use crate::table::RecordTable;

pub use delimited::{extract_csv, parse_csv};
pub use json_lines::{extract_json_lines, parse_json_lines};
pub use markup::{extract_xml, parse_xml};

/// Input format derived from a file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text with a header row (`.csv`)
    Csv,
    /// One JSON object per line (`.json`)
    JsonLines,
    /// Flat attribute records under a root element (`.xml`)
    Xml,
}

impl SourceFormat {
    /// Every format the extractor understands
    pub const ALL: [SourceFormat; 3] = [
        SourceFormat::Csv,
        SourceFormat::JsonLines,
        SourceFormat::Xml,
    ];

    /// Determines the format of `path` from its suffix (case-insensitive)
    ///
    /// # Errors
    /// Returns an unsupported format error for any other suffix, or none
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);

        extension
            .and_then(|extension| {
                Self::ALL
                    .into_iter()
                    .find(|format| format.extension() == extension)
            })
            .ok_or_else(|| unsupported_format_error(path.to_path_buf()))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::JsonLines => "json",
            SourceFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => f.write_str("CSV"),
            SourceFormat::JsonLines => f.write_str("JSON Lines"),
            SourceFormat::Xml => f.write_str("XML"),
        }
    }
}

/// Extracts one source file into a record table
///
/// # Arguments
/// * `path` - The file to read
///
/// # Returns
/// * `Result<RecordTable>` - One row per logical record in the file
///
/// # Errors
/// * Returns an error if the suffix is unsupported, the file cannot be read,
///   or any record in it is malformed
pub fn extract_file(path: &Path) -> Result<RecordTable> {
    let format = SourceFormat::from_path(path)?;
    debug!("Reading {} as {format}", path.display());

    let table = match format {
        SourceFormat::Csv => extract_csv(path)?,
        SourceFormat::JsonLines => extract_json_lines(path)?,
        SourceFormat::Xml => extract_xml(path)?,
    };

    info!(
        "Extracted {} rows and {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );

    Ok(table)
}
