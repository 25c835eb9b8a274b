//! Workflow module
//!
//! This module contains the pipeline engine and the types it runs on.

mod context;
mod engine;

pub use context::{PipelineOptions, RunSummary};
pub use engine::run_pipeline;
