//! Pipeline stages
//!
//! The combine stage and the timing wrapper every stage runs under.

mod timing;

use std::path::Path;

use crate::errors::Result;
use crate::extract::extract_file;
use crate::table::RecordTable;

pub use timing::{format_elapsed, timed, timed_infallible};

/// Extracts every path in order and appends the rows into one table
///
/// Each extraction is timed as its own `extract <file>` stage. Columns a
/// file lacks are missing in its rows. The first failing file aborts.
///
/// # Arguments
/// * `paths` - Source files in the order they should be combined
///
/// # Returns
/// * `Result<RecordTable>` - All rows of all files; empty for no paths
pub fn combine<P: AsRef<Path>>(paths: &[P]) -> Result<RecordTable> {
    let mut combined = RecordTable::new();

    for path in paths {
        let path = path.as_ref();
        let stage = format!("extract {}", stage_name(path));
        let table = timed(&stage, || extract_file(path))?;
        combined.append(table);
    }

    Ok(combined)
}

fn stage_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_combine_no_paths() {
        let paths: Vec<&Path> = Vec::new();
        let table = combine(&paths).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_combine_stops_at_unsupported_file() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("a.csv");
        let bad = dir.path().join("data.txt");
        fs::write(&good, "x\n1\n").unwrap();
        fs::write(&bad, "x\n2\n").unwrap();

        let result = combine(&[good, bad]);
        assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_stage_name_uses_file_name() {
        assert_eq!(stage_name(Path::new("/data/source/a.csv")), "a.csv");
    }
}
