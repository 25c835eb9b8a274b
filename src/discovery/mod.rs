//! File discovery module
//!
//! This module contains components for scanning the source directory.

mod scanner;

pub use scanner::discover_source_files;
