// ABOUTME: Measurement harness contract shared by every comparative benchmark
// ABOUTME: Times exactly N iterations after setup and turns failures into hard aborts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Benchmark Harness Contract
//!
//! Criterion chooses the iteration count and owns the statistics. This module
//! owns everything around that:
//!
//! - [`measure`] and [`measure_with_setup`] open the measurement window only
//!   after setup, run the candidate exactly `iters` times and stop at the first
//!   failure instead of timing corrupted work
//! - [`abort`] turns a fatal failure into a hard benchmark failure
//! - [`isolate`] keeps one aborted benchmark from taking the rest of the run
//!   down with it
//!
//! ```rust
//! use strategy_bench::harness::measure;
//!
//! let mut total = 0_u64;
//! let elapsed = measure(10, |i| {
//!     total += i;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(total, 45);
//! assert!(elapsed < std::time::Duration::from_secs(1));
//! ```

use crate::errors::{BenchError, BenchResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{error, trace, warn};

/// Standard benchmark sizes
pub struct BenchSizes;

impl BenchSizes {
    /// Small count for expensive operations
    pub const SMALL: usize = 100;
    /// Medium count
    pub const MEDIUM: usize = 1_000;
    /// Large count for cheap operations
    pub const LARGE: usize = 10_000;
}

/// Run `op` exactly `iters` times inside a measurement window
///
/// `op` receives the zero-based iteration index.
///
/// # Errors
///
/// Returns the first fatal error, annotated with its iteration. Non-fatal
/// errors are logged and the loop continues.
pub fn measure<F>(iters: u64, mut op: F) -> BenchResult<Duration>
where
    F: FnMut(u64) -> BenchResult<()>,
{
    let start = Instant::now();
    for iteration in 0..iters {
        if let Err(err) = op(iteration) {
            let err = err.with_iteration(iteration);
            if err.is_fatal() {
                return Err(err);
            }
            warn!(iteration, error = %err, "Non-fatal benchmark failure");
        }
    }
    let elapsed = start.elapsed();
    trace!(iters, per_iteration = ?per_iteration(elapsed, iters), "Measurement window closed");
    Ok(elapsed)
}

/// Prepare a fixture, then measure `op` against it
///
/// The window opens after `setup` returns, so setup cost is never attributed
/// to the candidate.
///
/// # Errors
///
/// Returns a setup failure before any iteration runs, or the first fatal
/// iteration failure
pub fn measure_with_setup<S, T, F>(iters: u64, setup: S, mut op: F) -> BenchResult<Duration>
where
    S: FnOnce() -> BenchResult<T>,
    F: FnMut(&mut T, u64) -> BenchResult<()>,
{
    let mut fixture = setup()?;
    measure(iters, |iteration| op(&mut fixture, iteration))
}

/// Mean time per iteration for a measured window
#[must_use]
pub fn per_iteration(elapsed: Duration, iters: u64) -> Duration {
    if iters == 0 {
        return Duration::ZERO;
    }
    let nanos = elapsed.as_nanos() / u128::from(iters);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Report a hard failure and abandon the running benchmark
///
/// Criterion has no failure channel, so the benchmark unwinds out of its
/// routine; [`isolate`] catches it at the registration boundary.
#[allow(clippy::panic)] // Safe: hard failures must stop the sampling loop immediately
pub fn abort(bench: &str, err: &BenchError) -> ! {
    error!(
        bench,
        code = ?err.code,
        iteration = err.iteration,
        error = %err,
        "Benchmark aborted, samples discarded"
    );
    panic!("benchmark '{bench}' aborted: {err}");
}

/// Unwrap a measured window or abort the benchmark
pub fn window_or_abort(bench: &str, result: BenchResult<Duration>) -> Duration {
    result.unwrap_or_else(|err| abort(bench, &err))
}

/// Unwrap a setup result or abort the benchmark before measuring
pub fn setup_or_abort<T>(bench: &str, result: BenchResult<T>) -> T {
    result.unwrap_or_else(|err| abort(bench, &err))
}

/// Log misses of randomized lookups once per window
///
/// Misses are a property of the random keys, not a measurement bug, so they
/// never abort.
pub fn report_misses(bench: &str, misses: u64, lookups: u64) {
    if misses > 0 {
        let err = BenchError::inconsistent(format!("{misses} of {lookups} lookups missed"));
        warn!(bench, misses, lookups, error = %err, "Lookup fixture misses");
    }
}

/// Run one benchmark registration behind an unwind boundary
///
/// Returns `None` when the benchmark aborted; the failure has already been
/// logged and the caller moves on to the next benchmark.
pub fn isolate<R, F>(bench: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let failure = BenchError::aborted(panic_message(payload.as_ref()));
            error!(bench, error = %failure, "Benchmark failed, continuing with next");
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| "benchmark panicked".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_measure_runs_exactly_n_times() {
        let mut calls = 0_u64;
        measure(25, |_| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 25);
    }

    #[test]
    fn test_measure_stops_at_first_fatal_error() {
        let mut calls = 0_u64;
        let err = measure(10, |i| {
            calls += 1;
            if i == 3 {
                return Err(BenchError::short_read(8, 2));
            }
            Ok(())
        })
        .unwrap_err();
        assert_eq!(calls, 4);
        assert_eq!(err.code, ErrorCode::ShortRead);
        assert_eq!(err.iteration, Some(3));
    }

    #[test]
    fn test_measure_continues_after_non_fatal_error() {
        let mut calls = 0_u64;
        measure(5, |_| {
            calls += 1;
            Err(BenchError::inconsistent("random key missed"))
        })
        .unwrap();
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_setup_failure_skips_window() {
        let mut calls = 0;
        let err = measure_with_setup(
            5,
            || Err::<(), _>(BenchError::setup("no device")),
            |(), _| {
                calls += 1;
                Ok(())
            },
        )
        .unwrap_err();
        assert_eq!(calls, 0);
        assert_eq!(err.code, ErrorCode::SetupFailed);
    }

    #[test]
    fn test_per_iteration() {
        assert_eq!(
            per_iteration(Duration::from_micros(10), 10),
            Duration::from_micros(1)
        );
        assert_eq!(per_iteration(Duration::from_secs(1), 0), Duration::ZERO);
    }

    #[test]
    fn test_isolate_recovers_from_abort() {
        let outcome = isolate("failing", || abort("failing", &BenchError::task("boom")));
        assert!(outcome.is_none());
        assert_eq!(isolate("ok", || 7), Some(7));
    }
}
