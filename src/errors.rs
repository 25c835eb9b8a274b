use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the ETL pipeline
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The file suffix does not map to a supported source format
    UnsupportedFormat { path: PathBuf },
    /// Error raised while reading a delimited file
    CsvParsing { source: csv::Error, path: PathBuf },
    /// A delimited record that does not fit the header
    CsvRecord {
        path: PathBuf,
        line: u64,
        detail: String,
    },
    /// Error raised while parsing one line of a JSON Lines file
    JsonParsing {
        source: Option<serde_json::Error>,
        path: PathBuf,
        line: usize,
        detail: String,
    },
    /// Error raised while parsing a markup document
    XmlParsing {
        source: Option<Box<dyn StdError + Send + Sync>>,
        path: PathBuf,
        detail: String,
    },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::UnsupportedFormat { path } => {
                write!(f, "Unsupported file format: {}", path.display())
            }
            Error::CsvParsing { source, path } => {
                write!(f, "Failed to parse CSV file {}: {source}", path.display())
            }
            Error::CsvRecord { path, line, detail } => {
                write!(
                    f,
                    "Failed to parse CSV record on line {} of {}: {detail}",
                    line,
                    path.display()
                )
            }
            Error::JsonParsing {
                path, line, detail, ..
            } => {
                write!(
                    f,
                    "Failed to parse JSON record on line {} of {}: {detail}",
                    line,
                    path.display()
                )
            }
            Error::XmlParsing { path, detail, .. } => {
                write!(f, "Failed to parse XML file {}: {detail}", path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::CsvParsing { source, .. } => Some(source),
            Error::JsonParsing {
                source: Some(source),
                ..
            } => Some(source),
            Error::XmlParsing {
                source: Some(source),
                ..
            } => Some(source.as_ref()),
            Error::GlobPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the ETL pipeline
///
/// Used by the extraction, table, discovery and load modules. Application
/// level code converts it into `anyhow::Error` with `?`.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use file_etl::prelude::{Result, unsupported_format_error};
///
/// fn example_function(name: &str) -> Result<String> {
///     if name.ends_with(".csv") {
///         Ok(name.to_string())
///     } else {
///         Err(unsupported_format_error(PathBuf::from(name)))
///     }
/// }
///
/// assert!(example_function("data.txt").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an unsupported format error
pub fn unsupported_format_error(path: PathBuf) -> Error {
    Error::UnsupportedFormat { path }
}

/// Helper function to create a CSV parsing error
pub fn csv_parsing_error(err: csv::Error, path: PathBuf) -> Error {
    Error::CsvParsing { source: err, path }
}

/// Helper function to create a JSON parsing error from a serde_json failure
pub fn json_parsing_error(err: serde_json::Error, path: PathBuf, line: usize) -> Error {
    Error::JsonParsing {
        detail: err.to_string(),
        source: Some(err),
        path,
        line,
    }
}

/// Helper function to create a JSON parsing error for a record of the wrong shape
pub fn json_record_error(path: PathBuf, line: usize, detail: &str) -> Error {
    Error::JsonParsing {
        source: None,
        path,
        line,
        detail: detail.to_string(),
    }
}

/// Helper function to create an XML parsing error
pub fn xml_parsing_error<E: StdError + Send + Sync + 'static>(err: E, path: PathBuf) -> Error {
    Error::XmlParsing {
        detail: err.to_string(),
        source: Some(Box::new(err)),
        path,
    }
}

/// Helper function to create an XML document structure error
pub fn xml_structure_error(path: PathBuf, detail: &str) -> Error {
    Error::XmlParsing {
        source: None,
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create an error for a CSV record that does not fit the header
pub fn csv_record_error(path: PathBuf, line: u64, detail: &str) -> Error {
    Error::CsvRecord {
        path,
        line,
        detail: detail.to_string(),
    }
}
