//! In-memory record table
//!
//! Every extractor produces a [`RecordTable`]; the pipeline appends them,
//! adds derived columns and hands the result to the loader.

mod record_table;
mod value;

pub use record_table::{Cell, RecordTable};
pub use value::Value;
