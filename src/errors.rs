// ABOUTME: Unified error type and error codes for benchmark setup and measurement failures
// ABOUTME: Classifies failures as fatal (abort the benchmark) or non-fatal (log and continue)
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling
//!
//! Every candidate operation returns [`BenchResult`]. The [`ErrorCode`] decides
//! what the harness does with a failure: fatal codes abort the benchmark and
//! invalidate its samples, the non-fatal code is logged as a warning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used by the benchmark battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A fixture or data source could not be prepared before measurement
    #[serde(rename = "SETUP_FAILED")]
    SetupFailed,
    /// A read or write failed inside the measurement window
    #[serde(rename = "IO_FAILED")]
    IoFailed,
    /// A read returned fewer bytes than requested
    #[serde(rename = "SHORT_READ")]
    ShortRead,
    /// Bytes could not be interpreted as the expected representation
    #[serde(rename = "INVALID_DATA")]
    InvalidData,
    /// A spawned task panicked or was cancelled
    #[serde(rename = "TASK_FAILED")]
    TaskFailed,
    /// An operation completed but produced a result it must never produce
    #[serde(rename = "UNEXPECTED_RESULT")]
    UnexpectedResult,
    /// A lookup that must always succeed found nothing
    #[serde(rename = "MISSING_ENTRY")]
    MissingEntry,
    /// A fixture produced a result that randomized inputs can legitimately cause
    #[serde(rename = "INCONSISTENT_FIXTURE")]
    InconsistentFixture,
    /// Configuration values are missing or contradictory
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// A candidate operation reported a failure it was expected to report
    #[serde(rename = "OPERATION_FAILED")]
    OperationFailed,
    /// The benchmark was aborted after a hard failure
    #[serde(rename = "ABORTED")]
    Aborted,
}

impl ErrorCode {
    /// Whether this failure must abort the benchmark it occurred in
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::InconsistentFixture | Self::OperationFailed)
    }

    /// Short human-readable description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SetupFailed => "Benchmark setup failed",
            Self::IoFailed => "I/O failed during measurement",
            Self::ShortRead => "Read returned fewer bytes than requested",
            Self::InvalidData => "Data has an unexpected representation",
            Self::TaskFailed => "Concurrent task failed",
            Self::UnexpectedResult => "Operation produced an unexpected result",
            Self::MissingEntry => "Expected entry is missing",
            Self::InconsistentFixture => "Fixture returned an unexpected result",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::OperationFailed => "Operation failed",
            Self::Aborted => "Benchmark aborted",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the benchmark battery
#[derive(Debug, Error)]
pub struct BenchError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Zero-based iteration the failure happened in, when inside a window
    pub iteration: Option<u64>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BenchError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            iteration: None,
            source: None,
        }
    }

    /// Record the iteration the failure happened in
    #[must_use]
    pub fn with_iteration(mut self, iteration: u64) -> Self {
        self.iteration = Some(iteration);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the harness must abort on this error
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iteration {
            Some(iteration) => write!(
                f,
                "{}: {} (iteration {iteration})",
                self.code.description(),
                self.message
            ),
            None => write!(f, "{}: {}", self.code.description(), self.message),
        }
    }
}

/// Result type alias for convenience
pub type BenchResult<T> = Result<T, BenchError>;

/// Convenience functions for creating common errors
impl BenchError {
    /// Data source or fixture could not be prepared
    pub fn setup(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SetupFailed, message)
    }

    /// Read returned fewer bytes than requested
    #[must_use]
    pub fn short_read(expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::ShortRead,
            format!("expected {expected} bytes, got {actual}"),
        )
    }

    /// Bytes could not be interpreted
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidData, message)
    }

    /// Spawned task failed
    pub fn task(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TaskFailed, message)
    }

    /// Result disagrees with the fixture's known answer
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnexpectedResult, message)
    }

    /// Lookup that must succeed missed
    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingEntry, message)
    }

    /// Fixture lookup missed or disagreed
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InconsistentFixture, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Candidate operation reported failure
    pub fn operation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OperationFailed, message)
    }

    /// Benchmark aborted after a hard failure
    pub fn aborted(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Aborted, message)
    }
}

impl From<io::Error> for BenchError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::UnexpectedEof {
            ErrorCode::ShortRead
        } else {
            ErrorCode::IoFailed
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
