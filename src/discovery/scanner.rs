//! Directory scanning functionality
//!
//! This module contains functions for enumerating the files of the source
//! directory.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use log::{debug, warn};

use crate::constants::WILDCARD;
use crate::errors::{Result, file_operation_error, glob_pattern_error, invalid_filename_error};
use crate::utils::is_hidden_file;

/// Lists the regular, non-hidden files directly inside `directory`
///
/// Paths come back in lexicographic order, which is the order the files are
/// extracted and combined in. A directory that does not exist yields an empty
/// list.
///
/// # Arguments
/// * `directory` - The directory to scan
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The files found or an error
///
/// # Errors
/// Returns an error if the directory path is not valid Unicode or an entry
/// cannot be read
pub fn discover_source_files(directory: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", directory.display());

    if !directory.exists() {
        warn!(
            "Source directory {} does not exist, nothing to extract",
            directory.display()
        );
        return Ok(Vec::new());
    }

    let directory_str = directory
        .to_str()
        .ok_or_else(|| invalid_filename_error(directory.to_path_buf()))?;
    let pattern = PathBuf::from(Pattern::escape(directory_str)).join(WILDCARD);
    let pattern_str = pattern
        .to_str()
        .ok_or_else(|| invalid_filename_error(pattern.clone()))?;

    let entries = glob(pattern_str).map_err(|e| glob_pattern_error(e, pattern_str))?;

    let mut files = Vec::new();
    for entry in entries {
        let path =
            entry.map_err(|e| file_operation_error(e.into(), directory.to_path_buf(), "access"))?;
        if path.is_file() && !is_hidden_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    debug!("Found {} files in directory", files.len());

    Ok(files)
}
