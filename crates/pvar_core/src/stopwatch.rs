//! Scoped elapsed-time reporting.
//!
//! A `Stopwatch` is a guard that records its start instant and reports the
//! elapsed milliseconds when dropped. Because the report lives in `Drop`,
//! it fires on every exit path: normal return, early `?` propagation, or
//! unwinding.

use std::time::Instant;

use tracing::info;

/// Guard that logs `"<label> <elapsed>ms"` when it goes out of scope.
#[derive(Debug)]
pub struct Stopwatch {
    label: String,
    start: Instant,
}

impl Stopwatch {
    /// Start timing with the given report label.
    pub fn start(label: impl Into<String>) -> Self {
        info!("Starting stopwatch");
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the stopwatch started.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Time a closure, reporting the elapsed time whether or not the body
    /// completes successfully.
    pub fn time<T>(label: &str, body: impl FnOnce() -> T) -> T {
        let _guard = Self::start(label);
        body()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        info!("{} {}ms", self.label, self.elapsed_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_passes_value_through() {
        let value = Stopwatch::time("Test took", || 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_time_passes_error_through() {
        let result: Result<(), String> =
            Stopwatch::time("Test took", || Err("failed".to_string()));
        assert_eq!(result, Err("failed".to_string()));
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let stopwatch = Stopwatch::start("Test took");
        let first = stopwatch.elapsed_ms();
        let second = stopwatch.elapsed_ms();
        assert!(second >= first);
    }

    #[test]
    fn test_guard_reports_during_unwind() {
        // The Drop report must not itself panic while unwinding.
        let result = std::panic::catch_unwind(|| {
            let _guard = Stopwatch::start("Unwinding took");
            panic!("body failed");
        });
        assert!(result.is_err());
    }
}
