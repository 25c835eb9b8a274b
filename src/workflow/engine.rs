//! Workflow engine
//!
//! This module contains the engine that runs the pipeline stages in order.

use anyhow::Result;
use log::{info, warn};

use crate::discovery::discover_source_files;
use crate::load::write_csv;
use crate::pipeline::{combine, timed, timed_infallible};
use crate::transform::transform;

use super::context::{PipelineOptions, RunSummary};

/// Runs the pipeline once
///
/// This function orchestrates the workflow steps:
/// 1. Discover the files of the source directory
/// 2. Extract every file and combine the rows into one table
/// 3. Print the first rows for inspection
/// 4. Add the derived unit columns
/// 5. Write the table to the output path, unless this is a dry run
///
/// # Arguments
/// * `options` - The configuration and dry-run flag
///
/// # Returns
/// * `Result<RunSummary>` - Statistics about the run or an error
///
/// # Errors
/// * Returns an error if any stage fails; nothing is written in that case
pub fn run_pipeline(options: &PipelineOptions) -> Result<RunSummary> {
    let config = &options.config;
    info!("ETL process started");

    if config.output_is_reextracted() {
        warn!(
            "Output {} is inside the source directory and will be read back on the next run",
            config.output_path.display()
        );
    }

    let files = timed("discover", || discover_source_files(&config.source_dir))?;
    if files.is_empty() {
        warn!(
            "No files found in {}, the output will be empty",
            config.source_dir.display()
        );
    }

    let combined = timed("combine", || combine(&files))?;

    if config.preview_rows > 0 {
        println!("{}", combined.head(config.preview_rows));
    }

    let source_columns = combined.column_count();
    let transformed = timed_infallible("transform", || transform(combined));

    let output_path = if options.dry_run {
        info!(
            "Dry run: skipping write of {} rows to {}",
            transformed.row_count(),
            config.output_path.display()
        );
        None
    } else {
        timed("load", || write_csv(&transformed, &config.output_path))?;
        Some(config.output_path.clone())
    };

    info!("ETL process completed");

    Ok(RunSummary {
        files_extracted: files.len(),
        rows: transformed.row_count(),
        columns: transformed.column_count(),
        derived_columns: transformed.column_count() - source_columns,
        output_path,
    })
}
