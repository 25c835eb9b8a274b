//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PREVIEW_ROWS, LOG_FILE_DEFAULT};
use crate::extract::SourceFormat;
use crate::utils::expand_pathbuf;

use super::loader::deserialize_path;

/// Configuration for one ETL run
///
/// Relative paths are resolved against the working directory of the process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory whose files are extracted and combined
    #[serde(deserialize_with = "deserialize_path")]
    pub source_dir: PathBuf,
    /// CSV file the transformed table is written to
    #[serde(deserialize_with = "deserialize_path")]
    pub output_path: PathBuf,
    /// Log file receiving stage timings
    #[serde(default = "default_log_file", deserialize_with = "deserialize_path")]
    pub log_file: PathBuf,
    /// Number of rows printed after extraction
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(LOG_FILE_DEFAULT)
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

impl Default for Config {
    /// Starter configuration written by `--init`
    fn default() -> Self {
        Config {
            source_dir: PathBuf::from("source"),
            output_path: PathBuf::from("output").join("transformed_data.csv"),
            log_file: default_log_file(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub source_dir: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub preview_rows: Option<usize>,
}

impl ConfigOverrides {
    /// Builds a configuration from the overrides alone
    ///
    /// Returns `None` unless both the source directory and the output path
    /// were given.
    pub fn into_config(self) -> Option<Config> {
        let source_dir = self.source_dir.as_deref().map(expand_pathbuf)?;
        let output_path = self.output_path.as_deref().map(expand_pathbuf)?;
        Some(Config {
            source_dir,
            output_path,
            log_file: self
                .log_file
                .as_deref()
                .map(expand_pathbuf)
                .unwrap_or_else(default_log_file),
            preview_rows: self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
        })
    }
}

impl Config {
    /// Replaces every field that has an override
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(source_dir) = overrides.source_dir {
            self.source_dir = expand_pathbuf(&source_dir);
        }
        if let Some(output_path) = overrides.output_path {
            self.output_path = expand_pathbuf(&output_path);
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = expand_pathbuf(&log_file);
        }
        if let Some(preview_rows) = overrides.preview_rows {
            self.preview_rows = preview_rows;
        }
    }

    /// Validates the configuration
    ///
    /// # Arguments
    /// * `check_paths` - Whether to check the filesystem as well
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self, check_paths: bool) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(anyhow!(
                "No source directory specified in configuration. A source directory is required."
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(anyhow!(
                "No output path specified in configuration. An output path is required."
            ));
        }

        if self.output_path.file_name().is_none() {
            return Err(anyhow!(
                "Output path {} does not name a file.",
                self.output_path.display()
            ));
        }

        if check_paths {
            if self.source_dir.exists() && !self.source_dir.is_dir() {
                return Err(anyhow!(
                    "Source path is not a directory: {}\n{}",
                    self.source_dir.display(),
                    "Please specify a valid directory path."
                ));
            }

            if self.output_path.is_dir() {
                return Err(anyhow!(
                    "Output path is a directory: {}\n{}",
                    self.output_path.display(),
                    "Please specify the path of the CSV file to write."
                ));
            }
        }

        Ok(())
    }

    /// True when the output file would itself be picked up as a source file
    ///
    /// Such a configuration is valid; the engine warns about it once logging
    /// is set up.
    pub fn output_is_reextracted(&self) -> bool {
        self.output_path.parent() == Some(self.source_dir.as_path())
            && SourceFormat::from_path(&self.output_path).is_ok()
    }
}
