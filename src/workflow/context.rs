//! Workflow context
//!
//! This module defines the options a run starts from and the summary it
//! finishes with.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;

/// Options for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// The resolved configuration
    pub config: Config,
    /// Run every stage but skip writing the output file
    pub dry_run: bool,
}

impl PipelineOptions {
    pub fn new(config: Config, dry_run: bool) -> Self {
        PipelineOptions { config, dry_run }
    }
}

/// Statistics about a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Number of source files extracted
    pub files_extracted: usize,
    /// Number of rows in the combined table
    pub rows: usize,
    /// Number of columns in the written table, derived columns included
    pub columns: usize,
    /// Number of derived columns the transform added
    pub derived_columns: usize,
    /// The file written, or `None` for a dry run
    pub output_path: Option<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Combined {} file(s) into {} rows x {} columns ({} derived)",
            self.files_extracted, self.rows, self.columns, self.derived_columns
        )?;
        match &self.output_path {
            Some(path) => write!(f, ", written to {}", path.display()),
            None => f.write_str(", nothing written (dry run)"),
        }
    }
}
