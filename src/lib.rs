//! Merges a directory of CSV, JSON Lines and XML files into one CSV dataset
//!
//! The pipeline discovers the source files, extracts each into a
//! [`table::RecordTable`], combines them, adds metric unit columns and
//! writes the result, timing every stage in the log.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod extract;
pub mod load;
pub mod logging;
pub mod pipeline;
pub mod table;
pub mod transform;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        get_config_path, get_matches, get_overrides, get_verbosity, is_dry_run, is_init,
    };
    pub use crate::config::{Config, ConfigOverrides, resolve_configuration, write_default_config};
    pub use crate::errors::{
        Error, Result, file_operation_error, unsupported_format_error,
    };
    pub use crate::extract::{SourceFormat, extract_file};
    pub use crate::load::write_csv;
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::pipeline::{combine, timed};
    pub use crate::table::{Cell, RecordTable, Value};
    pub use crate::transform::transform;
    pub use crate::workflow::{PipelineOptions, RunSummary, run_pipeline};
}
