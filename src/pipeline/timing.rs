//! Stage timing
//!
//! Wraps a stage in `Starting <stage>` / `Completed <stage> in <duration>`
//! log entries without touching its result.

use std::fmt::Display;
use std::time::{Duration, Instant};

use log::{error, info};

/// Runs a fallible stage, logging its start, completion and elapsed time
///
/// A failing stage logs `Failed <stage> after <duration>` instead of the
/// completion entry. The closure's result is returned unchanged.
///
/// # Examples
/// ```
/// use file_etl::pipeline::timed;
///
/// let rows: Result<usize, String> = timed("count", || Ok(3));
/// assert_eq!(rows, Ok(3));
/// ```
pub fn timed<T, E, F>(stage: &str, operation: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    let started = Instant::now();
    info!("Starting {stage}");

    let result = operation();
    let elapsed = format_elapsed(started.elapsed());

    match &result {
        Ok(_) => info!("Completed {stage} in {elapsed}"),
        Err(e) => error!("Failed {stage} after {elapsed}: {e}"),
    }

    result
}

/// Runs a stage that cannot fail, with the same logging as [`timed`]
pub fn timed_infallible<T, F>(stage: &str, operation: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    info!("Starting {stage}");

    let value = operation();
    info!("Completed {stage} in {}", format_elapsed(started.elapsed()));

    value
}

/// Formats a duration as `H:MM:SS.ffffff`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!(
        "{}:{:02}:{:02}.{:06}",
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60,
        elapsed.subsec_micros()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_micros(1_234)), "0:00:00.001234");
        assert_eq!(
            format_elapsed(Duration::from_secs(3_725) + Duration::from_micros(5)),
            "1:02:05.000005"
        );
    }

    #[test]
    fn test_timed_passes_results_through() {
        let ok: Result<i32, String> = timed("ok stage", || Ok(7));
        assert_eq!(ok, Ok(7));

        let failed: Result<i32, String> = timed("failing stage", || Err("boom".to_string()));
        assert_eq!(failed, Err("boom".to_string()));
    }

    #[test]
    fn test_timed_runs_operation_once() {
        let mut calls = 0;
        let value = timed_infallible("counting", || {
            calls += 1;
            calls
        });
        assert_eq!(value, 1);
        assert_eq!(calls, 1);
    }
}
