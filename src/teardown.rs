// ABOUTME: Error aggregation strategies for multi-step teardown that must attempt every step
// ABOUTME: Compares joining messages into one string error with collecting typed errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Teardown Error Aggregation
//!
//! A connection is shut down in two steps, `quit` then `close`, and `close`
//! runs even when `quit` fails. The strategies differ only in how the
//! failures are reported.

use crate::constants::teardown::{FAILURE_SEED, STEP_FAILURE_RATE};
use crate::errors::{BenchError, BenchResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Two-step teardown of a connection-like resource
pub trait Teardown {
    /// Ask the peer to end the session
    ///
    /// # Errors
    ///
    /// Returns `OperationFailed` when the step fails
    fn quit(&mut self) -> BenchResult<()>;

    /// Release the local end
    ///
    /// # Errors
    ///
    /// Returns `OperationFailed` when the step fails
    fn close(&mut self) -> BenchResult<()>;
}

/// Client whose teardown steps fail at a fixed rate from a seeded sequence
#[derive(Debug, Clone)]
pub struct FlakyClient {
    rng: ChaCha8Rng,
    failure_rate: f64,
}

impl FlakyClient {
    /// Client failing each step with `failure_rate` probability
    ///
    /// The rate is clamped to `0..=1`; NaN means the steps never fail.
    #[must_use]
    pub fn seeded(seed: u64, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            failure_rate,
        }
    }

    fn step(&mut self, name: &str) -> BenchResult<()> {
        if self.rng.gen_bool(self.failure_rate) {
            return Err(BenchError::operation(format!("{name} failed")));
        }
        Ok(())
    }
}

impl Default for FlakyClient {
    fn default() -> Self {
        Self::seeded(FAILURE_SEED, STEP_FAILURE_RATE)
    }
}

impl Teardown for FlakyClient {
    fn quit(&mut self) -> BenchResult<()> {
        self.step("quit")
    }

    fn close(&mut self) -> BenchResult<()> {
        self.step("close")
    }
}

/// Every failed teardown step, in step order
#[derive(Debug, Error)]
#[error("{} teardown step(s) failed", .failures.len())]
pub struct ShutdownFailure {
    /// Failures of the individual steps
    pub failures: Vec<BenchError>,
}

impl ShutdownFailure {
    /// Messages of the failed steps
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|e| e.message.as_str()).collect()
    }
}

fn attempt_all<C: Teardown>(client: &mut C) -> Vec<BenchError> {
    // close must run even when quit failed
    [client.quit(), client.close()]
        .into_iter()
        .filter_map(Result::err)
        .collect()
}

/// Shut down, folding every failure message into one string error
///
/// # Errors
///
/// Returns `OperationFailed` whose message holds one line per failed step
pub fn shutdown_joined<C: Teardown>(client: &mut C) -> BenchResult<()> {
    let mut joined = String::new();
    for failure in attempt_all(client) {
        joined.push_str(&failure.message);
        joined.push('\n');
    }
    if joined.is_empty() {
        Ok(())
    } else {
        Err(BenchError::operation(joined))
    }
}

/// Shut down, keeping every failure as a typed error
///
/// # Errors
///
/// Returns [`ShutdownFailure`] listing each failed step
pub fn shutdown_collected<C: Teardown>(client: &mut C) -> Result<(), ShutdownFailure> {
    let failures = attempt_all(client);
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ShutdownFailure { failures })
    }
}
